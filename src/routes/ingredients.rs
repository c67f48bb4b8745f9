// ABOUTME: Route handlers for listing and deleting shared ingredients
// ABOUTME: Deleting an ingredient a recipe still references is rejected with a conflict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::server::ServerResources;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use recipe_core::errors::AppError;
use std::sync::Arc;

/// Ingredient routes implementation
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingredients", get(Self::handle_list))
            .route("/ingredients/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /ingredients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let ingredients = resources.recipes.list_ingredients().await?;
        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    /// Handle DELETE /ingredients/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id.map_err(|e| AppError::invalid_input(e.body_text()))?;
        resources.recipes.delete_ingredient(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
