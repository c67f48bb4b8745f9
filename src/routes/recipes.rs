// ABOUTME: Route handlers for the recipe REST API
// ABOUTME: Create, update, delete, list, search, and id-by-name lookup of recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Request bodies use the recipe representation with `isVegetarian` and a
//! list of `{name}` ingredient objects. Malformed bodies, paths, and query
//! strings are reported through the standard error envelope.

use crate::server::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use recipe_core::errors::AppError;
use recipe_core::models::RecipeRequest;
use recipe_core::search::{parse_ingredient_list, RecipeSearchFilter};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

/// Query of `GET /recipes/id`
#[derive(Debug, Default, Deserialize)]
pub struct RecipeNameQuery {
    /// Recipe name, compared after normalization
    pub name: Option<String>,
}

/// Query of `GET /recipes/search`
///
/// Every parameter is optional and an empty value counts as absent.
/// Ingredient lists are comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchQuery {
    /// `true` or `false`
    pub is_vegetarian: Option<String>,
    /// Inclusive lower bound on servings
    pub min_servings: Option<String>,
    /// Inclusive upper bound on servings
    pub max_servings: Option<String>,
    /// Recipes with at least one of these ingredients
    pub included_ingredients: Option<String>,
    /// Recipes with none of these ingredients
    pub excluded_ingredients: Option<String>,
    /// Case-insensitive substring of the instructions
    pub query_instructions: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_param<T: FromStr>(name: &str, value: Option<&String>) -> Result<Option<T>, AppError> {
    present(value)
        .map(|raw| {
            raw.parse()
                .map_err(|_| AppError::invalid_input(format!("Invalid {name} value: {raw}")))
        })
        .transpose()
}

impl RecipeSearchQuery {
    /// Convert the raw query into a search filter
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a boolean or number parameter does not parse
    pub fn to_filter(&self) -> Result<RecipeSearchFilter, AppError> {
        Ok(RecipeSearchFilter {
            vegetarian: parse_param("isVegetarian", self.is_vegetarian.as_ref())?,
            min_servings: parse_param("minServings", self.min_servings.as_ref())?,
            max_servings: parse_param("maxServings", self.max_servings.as_ref())?,
            include_ingredients: present(self.included_ingredients.as_ref())
                .map(parse_ingredient_list),
            exclude_ingredients: present(self.excluded_ingredients.as_ref())
                .map(parse_ingredient_list),
            instructions_contains: present(self.query_instructions.as_ref()).map(str::to_owned),
        })
    }
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/recipes/id", get(Self::handle_get_id_by_name))
            .route("/recipes/search", get(Self::handle_search))
            .route(
                "/recipes/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /recipes
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        resources.recipes.create(&request).await?;
        Ok(StatusCode::CREATED.into_response())
    }

    /// Handle GET /recipes/id?name=
    async fn handle_get_id_by_name(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<RecipeNameQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let name = query.name.unwrap_or_default();
        let id = resources.recipes.get_recipe_id_by_name(&name).await?;
        Ok((StatusCode::OK, Json(id)).into_response())
    }

    /// Handle GET /recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.find_all().await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /recipes/search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<RecipeSearchQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let filter = query.to_filter()?;
        let recipes = resources.recipes.search(&filter).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle PUT /recipes/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
        body: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let updated = resources.recipes.update(id, &request).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle DELETE /recipes/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| AppError::invalid_input(e.body_text()))?;
        resources.recipes.delete(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
