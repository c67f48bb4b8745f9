// ABOUTME: Store contracts for ingredients and recipes
// ABOUTME: Callers normalize names before calling; stores compare names exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use recipe_core::errors::AppResult;
use recipe_core::models::{Ingredient, Recipe};
use recipe_core::search::RecipePredicate;

/// Storage of uniquely named ingredients
#[async_trait]
pub trait IngredientStore: Send {
    /// Find an ingredient by its exact (already normalized) name
    async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Ingredient>>;

    /// Find an ingredient by identity
    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Ingredient>>;

    /// Create an ingredient with a new identity
    ///
    /// Fails with `ResourceAlreadyExists` if the name is taken, which lets
    /// callers that lost a creation race fall back to a lookup.
    async fn create(&mut self, name: &str) -> AppResult<Ingredient>;

    /// Every ingredient, ordered by name
    async fn find_all(&mut self) -> AppResult<Vec<Ingredient>>;

    /// Whether any recipe references the ingredient
    async fn is_referenced(&mut self, id: i64) -> AppResult<bool>;

    /// Delete an ingredient; returns `false` if it did not exist
    async fn delete(&mut self, id: i64) -> AppResult<bool>;
}

/// Storage of recipes and their ingredient associations
#[async_trait]
pub trait RecipeStore: Send {
    /// Find a recipe by identity, with its ingredients
    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Recipe>>;

    /// Find a recipe by its exact (already normalized) name
    async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Recipe>>;

    /// Every recipe with its ingredients, ordered by identity
    async fn find_all(&mut self) -> AppResult<Vec<Recipe>>;

    /// Insert (no identity) or update (identity) a recipe and replace its
    /// association rows with exactly its ingredient set
    async fn save(&mut self, recipe: &Recipe) -> AppResult<Recipe>;

    /// Delete a recipe and its association rows; returns `false` if it did
    /// not exist. Referenced ingredients are kept.
    async fn delete(&mut self, id: i64) -> AppResult<bool>;

    /// Recipes satisfying every condition of the predicate, each once
    async fn query(&mut self, predicate: &RecipePredicate) -> AppResult<Vec<Recipe>>;

    /// Number of stored recipes
    async fn count(&mut self) -> AppResult<i64>;
}
