// ABOUTME: Conjunctive recipe predicate built from search filters
// ABOUTME: Evaluates in memory so stores and tests share one definition of a match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use crate::models::Recipe;

/// A single constraint on a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Vegetarian flag equals the value
    Vegetarian(bool),
    /// Servings within `min..=max`
    ServingsBetween {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },
    /// Servings at least the value
    ServingsAtLeast(i64),
    /// Servings at most the value
    ServingsAtMost(i64),
    /// At least one referenced ingredient is in the set (lowercase names)
    AnyIngredient(BTreeSet<String>),
    /// No referenced ingredient is in the set (lowercase names)
    NoIngredient(BTreeSet<String>),
    /// Lowercased instructions contain the (lowercase) text
    InstructionsContain(String),
}

impl Condition {
    /// Evaluate this condition against one recipe
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let servings = i64::from(recipe.servings);
        match self {
            Self::Vegetarian(expected) => recipe.is_vegetarian == *expected,
            Self::ServingsBetween { min, max } => (*min..=*max).contains(&servings),
            Self::ServingsAtLeast(min) => servings >= *min,
            Self::ServingsAtMost(max) => servings <= *max,
            Self::AnyIngredient(names) => recipe.ingredient_names().any(|n| names.contains(n)),
            Self::NoIngredient(names) => !recipe.ingredient_names().any(|n| names.contains(n)),
            Self::InstructionsContain(text) => {
                recipe.folded_instructions().contains(text.as_str())
            }
        }
    }
}

/// Conjunction of conditions; the empty predicate matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePredicate {
    conditions: Vec<Condition>,
}

impl RecipePredicate {
    /// Build a predicate from its conditions
    #[must_use]
    pub const fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Conditions in the order they were folded
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether the predicate constrains nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a store must join recipes to their ingredients to evaluate it
    ///
    /// Only the any-of condition needs the join; the exclusion is evaluated as
    /// an anti-join and does not multiply result rows.
    #[must_use]
    pub fn requires_ingredient_join(&self) -> bool {
        self.conditions
            .iter()
            .any(|condition| matches!(condition, Condition::AnyIngredient(_)))
    }

    /// Whether the recipe satisfies every condition
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(recipe))
    }
}
