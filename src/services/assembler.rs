// ABOUTME: Maps validated recipe drafts onto stored recipes with resolved ingredient references
// ABOUTME: Ingredient resolution is find-or-create and recovers when a concurrent insert wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Assembler
//!
//! Turns a [`RecipeDraft`] into a [`Recipe`] whose ingredient list references
//! stored ingredients, creating any that do not exist yet. Names in a draft
//! are already normalized and distinct, so each one resolves to exactly one
//! ingredient reference.

use crate::database::IngredientStore;
use recipe_core::errors::{AppError, AppResult, ErrorCode};
use recipe_core::models::{Ingredient, Recipe, RecipeDraft, RecipeDto};
use std::collections::BTreeSet;
use tracing::debug;

/// Look up an ingredient by normalized name, creating it if absent
///
/// A uniqueness conflict on create means another writer inserted the same
/// name first; the existing record is fetched and reused.
///
/// # Errors
///
/// Returns a database error if the store fails, or an internal error if the
/// conflicting record cannot be found afterwards
pub async fn find_or_create_ingredient<S>(store: &mut S, name: &str) -> AppResult<Ingredient>
where
    S: IngredientStore + ?Sized,
{
    if let Some(existing) = store.find_by_name(name).await? {
        return Ok(existing);
    }

    match store.create(name).await {
        Ok(created) => {
            debug!(ingredient.id = created.id, ingredient.name = %name, "Created ingredient");
            Ok(created)
        }
        Err(error) if error.code == ErrorCode::ResourceAlreadyExists => {
            debug!(ingredient.name = %name, "Ingredient created concurrently, reusing it");
            store.find_by_name(name).await?.ok_or_else(|| {
                AppError::internal(format!("Ingredient {name} conflicted but cannot be found"))
            })
        }
        Err(error) => Err(error),
    }
}

/// Resolve every name to a stored ingredient, in name order
///
/// # Errors
///
/// Propagates the first resolution failure
pub async fn resolve_ingredients<S>(
    store: &mut S,
    names: &BTreeSet<String>,
) -> AppResult<Vec<Ingredient>>
where
    S: IngredientStore + ?Sized,
{
    let mut ingredients = Vec::with_capacity(names.len());
    for name in names {
        ingredients.push(find_or_create_ingredient(store, name).await?);
    }
    Ok(ingredients)
}

/// Build the recipe to save from a draft
///
/// `id` is `None` for a new recipe and the target identity for an update.
/// The ingredient set is replaced wholesale by the draft's ingredients.
///
/// # Errors
///
/// Propagates ingredient resolution failures
pub async fn assemble_recipe<S>(
    store: &mut S,
    id: Option<i64>,
    draft: RecipeDraft,
) -> AppResult<Recipe>
where
    S: IngredientStore + ?Sized,
{
    let ingredients = resolve_ingredients(store, &draft.ingredient_names).await?;

    Ok(Recipe {
        id,
        name: draft.name,
        is_vegetarian: draft.is_vegetarian,
        servings: draft.servings,
        instructions: draft.instructions,
        ingredients,
    })
}

/// Map stored recipes to their external representation
#[must_use]
pub fn to_dtos(recipes: Vec<Recipe>) -> Vec<RecipeDto> {
    recipes.into_iter().map(RecipeDto::from).collect()
}
