// ABOUTME: External request and response representations of recipes and ingredients
// ABOUTME: Wire format uses isVegetarian and nested {id, name} ingredient objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{Ingredient, Recipe};

/// Ingredient as exchanged with clients
///
/// `id` is ignored on input; ingredients are always resolved by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDto {
    /// Identity of the stored ingredient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Ingredient name
    pub name: String,
}

impl IngredientDto {
    /// Ingredient reference by name only, as submitted by clients
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl From<Ingredient> for IngredientDto {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: Some(ingredient.id),
            name: ingredient.name,
        }
    }
}

/// Recipe as submitted by clients on create and update
///
/// Required fields are optional here so that a missing field is reported as a
/// validation failure alongside every other violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Ignored on input, the path or the store decides identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Recipe name
    pub name: Option<String>,
    /// Whether the dish is vegetarian
    #[serde(rename = "isVegetarian")]
    pub is_vegetarian: Option<bool>,
    /// Number of servings
    pub servings: Option<i64>,
    /// Preparation instructions
    pub instructions: Option<String>,
    /// Ingredients by name
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientDto>>,
}

/// Recipe as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDto {
    /// Recipe identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Recipe name
    pub name: String,
    /// Whether the dish is vegetarian
    #[serde(rename = "isVegetarian")]
    pub is_vegetarian: bool,
    /// Number of servings
    pub servings: u32,
    /// Preparation instructions
    pub instructions: String,
    /// Full ingredient set
    pub ingredients: Vec<IngredientDto>,
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            is_vegetarian: recipe.is_vegetarian,
            servings: recipe.servings,
            instructions: recipe.instructions,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RecipeDto> for RecipeRequest {
    fn from(dto: RecipeDto) -> Self {
        Self {
            id: dto.id,
            name: Some(dto.name),
            is_vegetarian: Some(dto.is_vegetarian),
            servings: Some(i64::from(dto.servings)),
            instructions: Some(dto.instructions),
            ingredients: Some(dto.ingredients),
        }
    }
}
