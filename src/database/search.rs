// ABOUTME: Renders a recipe predicate into SQLite statements
// ABOUTME: Include is a joined IN list, exclude is a NOT IN anti-join, rows are made distinct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::search::{Condition, RecipePredicate};
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite};
use std::collections::BTreeSet;

/// Columns of `recipes` read by every recipe query
pub const RECIPE_COLUMNS: &str = "r.id, r.name, r.is_vegetarian, r.servings, r.instructions";

/// Columns of the ingredient rows attached to loaded recipes
const INGREDIENT_ROWS: &str = "SELECT link.recipe_id, ing.id, ing.name FROM recipe_ingredients link \
     JOIN ingredients ing ON ing.id = link.ingredient_id";

/// Bind a name set as one JSON array, expanded with `json_each`
///
/// A single parameter per list keeps long lists clear of the bound-variable
/// limit.
fn push_name_list(builder: &mut QueryBuilder<'static, Sqlite>, names: &BTreeSet<String>) {
    let array = Value::from(names.iter().cloned().collect::<Vec<_>>()).to_string();
    builder
        .push("(SELECT value FROM json_each(")
        .push_bind(array)
        .push("))");
}

/// Push `FROM recipes r`, the include join, and the WHERE clause
fn push_recipe_filter(builder: &mut QueryBuilder<'static, Sqlite>, predicate: &RecipePredicate) {
    builder.push(" FROM recipes r");

    if predicate.requires_ingredient_join() {
        builder.push(
            " JOIN recipe_ingredients ri ON ri.recipe_id = r.id \
             JOIN ingredients i ON i.id = ri.ingredient_id",
        );
    }

    for (index, condition) in predicate.conditions().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });

        match condition {
            Condition::Vegetarian(vegetarian) => {
                builder.push("r.is_vegetarian = ").push_bind(*vegetarian);
            }
            Condition::ServingsBetween { min, max } => {
                builder
                    .push("r.servings BETWEEN ")
                    .push_bind(*min)
                    .push(" AND ")
                    .push_bind(*max);
            }
            Condition::ServingsAtLeast(min) => {
                builder.push("r.servings >= ").push_bind(*min);
            }
            Condition::ServingsAtMost(max) => {
                builder.push("r.servings <= ").push_bind(*max);
            }
            Condition::AnyIngredient(names) => {
                builder.push("i.name IN ");
                push_name_list(builder, names);
            }
            Condition::NoIngredient(names) => {
                builder.push(
                    "r.id NOT IN (SELECT ri2.recipe_id FROM recipe_ingredients ri2 \
                     JOIN ingredients i2 ON i2.id = ri2.ingredient_id WHERE i2.name IN ",
                );
                push_name_list(builder, names);
                builder.push(")");
            }
            Condition::InstructionsContain(text) => {
                // Both sides are folded in Rust; SQLite's lower() only folds ASCII
                builder
                    .push("instr(r.instructions_folded, ")
                    .push_bind(text.clone())
                    .push(") > 0");
            }
        }
    }
}

/// Build the search statement for a predicate
///
/// The statement selects [`RECIPE_COLUMNS`] of each matching recipe exactly
/// once, ordered by id. The empty predicate selects every recipe.
#[must_use]
pub fn build_search_query(predicate: &RecipePredicate) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT DISTINCT {RECIPE_COLUMNS}"));
    push_recipe_filter(&mut builder, predicate);
    builder.push(" ORDER BY r.id");
    builder
}

/// Build the statement loading `(recipe_id, id, name)` ingredient rows of
/// every recipe the predicate selects, ordered by recipe and ingredient name
///
/// The recipe selection is a subquery, so the statement carries no per-recipe
/// parameters however many recipes match.
#[must_use]
pub fn build_ingredient_query(predicate: &RecipePredicate) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(INGREDIENT_ROWS);
    builder.push(" WHERE link.recipe_id IN (SELECT r.id");
    push_recipe_filter(&mut builder, predicate);
    builder.push(") ORDER BY link.recipe_id, ing.name");
    builder
}

/// Build the statement loading the ingredient rows of one recipe
#[must_use]
pub fn build_recipe_ingredient_query(recipe_id: i64) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(INGREDIENT_ROWS);
    builder
        .push(" WHERE link.recipe_id = ")
        .push_bind(recipe_id)
        .push(" ORDER BY ing.name");
    builder
}
