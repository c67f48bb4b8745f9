// ABOUTME: Field validation for submitted recipes producing normalized drafts
// ABOUTME: Collects every violated constraint into a single validation error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use super::{normalize_name, RecipeRequest};
use crate::constants::validation::{NAME_MAX_CHARS, NAME_MIN_CHARS};
use crate::errors::{AppError, AppResult};

/// A recipe request that passed validation
///
/// The name and every ingredient name are normalized; ingredient names that
/// collapse to the same normalized form appear once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Normalized recipe name
    pub name: String,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Positive number of servings
    pub servings: u32,
    /// Instructions as submitted
    pub instructions: String,
    /// Distinct normalized ingredient names
    pub ingredient_names: BTreeSet<String>,
}

fn check_name(field: &str, value: &str, violations: &mut Vec<String>) {
    let length = value.trim().chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        violations.push(format!(
            "{field} must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        ));
    }
}

impl RecipeRequest {
    /// Validate the request and normalize its names
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error listing every violated constraint
    pub fn validate(&self) -> AppResult<RecipeDraft> {
        let mut violations = Vec::new();

        match self.name.as_deref() {
            Some(name) => check_name("name", name, &mut violations),
            None => violations.push("name is required".to_owned()),
        }

        if self.is_vegetarian.is_none() {
            violations.push("isVegetarian is required".to_owned());
        }

        let servings = match self.servings {
            Some(servings) if servings > 0 => u32::try_from(servings).map_or_else(
                |_| {
                    violations.push(format!("servings must not exceed {}", u32::MAX));
                    None
                },
                Some,
            ),
            Some(_) => {
                violations.push("servings must be positive".to_owned());
                None
            }
            None => {
                violations.push("servings is required".to_owned());
                None
            }
        };

        match self.instructions.as_deref() {
            Some(instructions) if instructions.trim().is_empty() => {
                violations.push("instructions must not be blank".to_owned());
            }
            Some(_) => {}
            None => violations.push("instructions is required".to_owned()),
        }

        let ingredients = self.ingredients.as_deref().unwrap_or_default();
        for ingredient in ingredients {
            check_name("ingredient name", &ingredient.name, &mut violations);
        }

        match (&self.name, self.is_vegetarian, servings, &self.instructions) {
            (Some(name), Some(is_vegetarian), Some(servings), Some(instructions))
                if violations.is_empty() =>
            {
                Ok(RecipeDraft {
                    name: normalize_name(name),
                    is_vegetarian,
                    servings,
                    instructions: instructions.clone(),
                    ingredient_names: ingredients
                        .iter()
                        .map(|ingredient| normalize_name(&ingredient.name))
                        .collect(),
                })
            }
            _ => Err(AppError::validation(violations)),
        }
    }
}
