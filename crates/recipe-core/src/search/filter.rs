// ABOUTME: Optional search filter set for recipes and its folding into a predicate
// ABOUTME: Normalizes ingredient names and drops empty constraints before folding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use super::predicate::{Condition, RecipePredicate};
use crate::models::normalize_name;

/// Optional constraints of a recipe search; `None` means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeSearchFilter {
    /// Exact match on the vegetarian flag
    pub vegetarian: Option<bool>,
    /// Inclusive lower bound on servings
    pub min_servings: Option<i64>,
    /// Inclusive upper bound on servings
    pub max_servings: Option<i64>,
    /// Recipe must reference at least one of these ingredients
    pub include_ingredients: Option<Vec<String>>,
    /// Recipe must reference none of these ingredients
    pub exclude_ingredients: Option<Vec<String>>,
    /// Case-insensitive substring of the instructions
    pub instructions_contains: Option<String>,
}

/// Split a comma-separated ingredient list, trimming entries and dropping blanks
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn normalized_set(names: Option<&[String]>) -> Option<BTreeSet<String>> {
    let set: BTreeSet<String> = names?
        .iter()
        .map(|name| normalize_name(name))
        .filter(|name| !name.is_empty())
        .collect();
    (!set.is_empty()).then_some(set)
}

impl RecipeSearchFilter {
    /// Fold the present filters into a conjunctive predicate
    #[must_use]
    pub fn to_predicate(&self) -> RecipePredicate {
        let mut conditions = Vec::new();

        if let Some(vegetarian) = self.vegetarian {
            conditions.push(Condition::Vegetarian(vegetarian));
        }

        match (self.min_servings, self.max_servings) {
            (Some(min), Some(max)) => conditions.push(Condition::ServingsBetween { min, max }),
            (Some(min), None) => conditions.push(Condition::ServingsAtLeast(min)),
            (None, Some(max)) => conditions.push(Condition::ServingsAtMost(max)),
            (None, None) => {}
        }

        if let Some(names) = normalized_set(self.include_ingredients.as_deref()) {
            conditions.push(Condition::AnyIngredient(names));
        }

        if let Some(names) = normalized_set(self.exclude_ingredients.as_deref()) {
            conditions.push(Condition::NoIngredient(names));
        }

        if let Some(text) = self
            .instructions_contains
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        {
            conditions.push(Condition::InstructionsContain(text.to_lowercase()));
        }

        RecipePredicate::new(conditions)
    }
}
