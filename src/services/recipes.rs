// ABOUTME: Recipe service orchestrating validation, ingredient resolution, and storage
// ABOUTME: Every write runs in one transaction so recipe rows and associations commit together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Service
//!
//! The operations behind the HTTP surface. Writes validate first, then open a
//! transaction in which the assembler resolves ingredients and the recipe
//! store persists the result. Reads run on a pooled connection.

use super::assembler::{assemble_recipe, to_dtos};
use crate::database::{
    IngredientStore, RecipeDatabase, RecipeStore, SqliteIngredientStore, SqliteRecipeStore,
};
use crate::logging::AppLogger;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{normalize_name, IngredientDto, RecipeDto, RecipeRequest};
use recipe_core::search::RecipeSearchFilter;
use sqlx::{Sqlite, Transaction};
use std::time::Instant;
use tracing::{debug, info};

async fn commit(tx: Transaction<'static, Sqlite>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))
}

/// Recipe catalog operations
#[derive(Clone)]
pub struct RecipeService {
    database: RecipeDatabase,
}

impl RecipeService {
    /// Create a service over an initialized database
    #[must_use]
    pub const fn new(database: RecipeDatabase) -> Self {
        Self { database }
    }

    /// The underlying database
    #[must_use]
    pub const fn database(&self) -> &RecipeDatabase {
        &self.database
    }

    /// Create a recipe, creating ingredients it names that do not exist yet
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the request fails validation
    /// - `ResourceAlreadyExists` if a recipe with the same name exists
    /// - `DatabaseError` on storage failures
    pub async fn create(&self, request: &RecipeRequest) -> AppResult<RecipeDto> {
        let draft = request.validate()?;
        let mut tx = self.database.begin().await?;

        let recipe = {
            let mut ingredients = SqliteIngredientStore::new(&mut tx);
            assemble_recipe(&mut ingredients, None, draft).await?
        };
        let saved = SqliteRecipeStore::new(&mut tx).save(&recipe).await?;
        commit(tx).await?;

        AppLogger::log_recipe_event(saved.id, "create", true);
        Ok(saved.into())
    }

    /// Replace a recipe's fields and ingredient set
    ///
    /// Ingredients dropped from the recipe are unlinked, never deleted.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the request fails validation
    /// - `ResourceNotFound` if no recipe has this id
    /// - `ResourceAlreadyExists` if the new name belongs to another recipe
    /// - `DatabaseError` on storage failures
    pub async fn update(&self, id: i64, request: &RecipeRequest) -> AppResult<RecipeDto> {
        let draft = request.validate()?;
        let mut tx = self.database.begin().await?;

        if SqliteRecipeStore::new(&mut tx).find_by_id(id).await?.is_none() {
            AppLogger::log_recipe_event(Some(id), "update", false);
            return Err(AppError::not_found(format!("Recipe {id}")));
        }

        let recipe = {
            let mut ingredients = SqliteIngredientStore::new(&mut tx);
            assemble_recipe(&mut ingredients, Some(id), draft).await?
        };
        let saved = SqliteRecipeStore::new(&mut tx).save(&recipe).await?;
        commit(tx).await?;

        AppLogger::log_recipe_event(Some(id), "update", true);
        Ok(saved.into())
    }

    /// Delete a recipe and its associations, keeping its ingredients
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if no recipe has this id
    /// - `DatabaseError` on storage failures
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.database.begin().await?;

        if !SqliteRecipeStore::new(&mut tx).delete(id).await? {
            AppLogger::log_recipe_event(Some(id), "delete", false);
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        commit(tx).await?;

        AppLogger::log_recipe_event(Some(id), "delete", true);
        Ok(())
    }

    /// Every recipe with its full ingredient set
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures
    pub async fn find_all(&self) -> AppResult<Vec<RecipeDto>> {
        let mut conn = self.database.acquire().await?;
        let recipes = SqliteRecipeStore::new(&mut conn).find_all().await?;
        debug!(count = recipes.len(), "Listed recipes");
        Ok(to_dtos(recipes))
    }

    /// Recipes matching every present filter, each once
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures
    pub async fn search(&self, filter: &RecipeSearchFilter) -> AppResult<Vec<RecipeDto>> {
        let started = Instant::now();
        let predicate = filter.to_predicate();

        let mut conn = self.database.acquire().await?;
        let recipes = SqliteRecipeStore::new(&mut conn).query(&predicate).await?;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_search(predicate.conditions().len(), recipes.len(), duration_ms);
        Ok(to_dtos(recipes))
    }

    /// Identity of the recipe with this name, compared after normalization
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    /// - `ResourceNotFound` if no recipe has this name
    /// - `DatabaseError` on storage failures
    pub async fn get_recipe_id_by_name(&self, name: &str) -> AppResult<i64> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Err(AppError::invalid_input("name is required"));
        }

        let mut conn = self.database.acquire().await?;
        SqliteRecipeStore::new(&mut conn)
            .find_by_name(&normalized)
            .await?
            .and_then(|recipe| recipe.id)
            .ok_or_else(|| AppError::not_found(format!("Recipe named {normalized}")))
    }

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures
    pub async fn count(&self) -> AppResult<i64> {
        let mut conn = self.database.acquire().await?;
        SqliteRecipeStore::new(&mut conn).count().await
    }

    /// Every ingredient, ordered by name
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures
    pub async fn list_ingredients(&self) -> AppResult<Vec<IngredientDto>> {
        let mut conn = self.database.acquire().await?;
        let ingredients = SqliteIngredientStore::new(&mut conn).find_all().await?;
        Ok(ingredients.into_iter().map(IngredientDto::from).collect())
    }

    /// Delete an ingredient no recipe references
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if no ingredient has this id
    /// - `ResourceInUse` if a recipe still references it
    /// - `DatabaseError` on storage failures
    pub async fn delete_ingredient(&self, id: i64) -> AppResult<()> {
        let mut tx = self.database.begin().await?;
        let mut store = SqliteIngredientStore::new(&mut tx);

        if store.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(format!("Ingredient {id}")));
        }
        if store.is_referenced(id).await? {
            return Err(AppError::in_use("Ingredient", id));
        }
        store.delete(id).await?;
        commit(tx).await?;

        info!(ingredient.id = id, "Ingredient deleted");
        Ok(())
    }
}
