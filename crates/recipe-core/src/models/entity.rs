// ABOUTME: Stored recipe and ingredient entities
// ABOUTME: Recipes reference shared ingredients; ingredient names are stored lowercase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A uniquely named item any number of recipes can reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned identity
    pub id: i64,
    /// Lowercase, unique name
    pub name: String,
}

/// A recipe together with the ingredients it references
///
/// `id` is `None` until the recipe has been saved. The ingredient list holds
/// each referenced ingredient once, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Store-assigned identity, absent before the first save
    pub id: Option<i64>,
    /// Lowercase, unique name
    pub name: String,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Number of servings, always positive
    pub servings: u32,
    /// Free-form preparation instructions
    pub instructions: String,
    /// Shared ingredient references
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Names of the referenced ingredients
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|ingredient| ingredient.name.as_str())
    }

    /// Instructions with Unicode case folding applied
    ///
    /// Stores persist this next to the instructions so substring searches
    /// match exactly what the in-memory predicate matches.
    #[must_use]
    pub fn folded_instructions(&self) -> String {
        self.instructions.to_lowercase()
    }
}
