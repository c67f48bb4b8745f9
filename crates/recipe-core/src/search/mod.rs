// ABOUTME: Recipe search filters and the conjunctive predicate they fold into
// ABOUTME: Store-independent so the filter semantics can be tested without a database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Search
//!
//! A search request is a sparse set of optional constraints
//! ([`RecipeSearchFilter`]). [`RecipeSearchFilter::to_predicate`] folds the
//! present ones into a [`RecipePredicate`]: a flat conjunction of
//! [`Condition`]s. Stores render the predicate into their own query language;
//! [`RecipePredicate::matches`] evaluates it in memory against a single recipe.
//!
//! Semantics worth knowing:
//! - absent filters, empty ingredient lists, and blank instruction text add no
//!   condition, so an empty filter matches every recipe
//! - the include-ingredients condition is *any-of*: one matching ingredient is
//!   enough
//! - the exclude-ingredients condition rejects a recipe if *any* of its
//!   ingredients is listed

mod filter;
mod predicate;

pub use filter::{parse_ingredient_list, RecipeSearchFilter};
pub use predicate::{Condition, RecipePredicate};
