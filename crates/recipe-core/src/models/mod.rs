// ABOUTME: Recipe and ingredient domain models with their external representations
// ABOUTME: Re-exports stored entities, write requests, validated drafts, and read DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! Stored entities ([`Recipe`], [`Ingredient`]) are what the stores read and
//! write. [`RecipeRequest`] is what clients submit, [`RecipeDraft`] is that
//! request after validation and name normalization, and [`RecipeDto`] is what
//! clients read back.

mod dto;
mod entity;
mod validation;

pub use dto::{IngredientDto, RecipeDto, RecipeRequest};
pub use entity::{Ingredient, Recipe};
pub use validation::RecipeDraft;

/// Normalize a recipe or ingredient name for storage and lookup
///
/// Names are compared case-insensitively everywhere, so they are stored
/// trimmed and lowercased.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Salt "), "salt");
        assert_eq!(normalize_name("Mozzarella Cheese"), "mozzarella cheese");
        assert_eq!(normalize_name(""), "");
    }
}
