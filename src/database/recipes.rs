// ABOUTME: SQLite implementation of the recipe store
// ABOUTME: Saves rewrite association rows wholesale; reads load ingredient sets with one joined follow-up query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::search::{
    build_ingredient_query, build_recipe_ingredient_query, build_search_query, RECIPE_COLUMNS,
};
use super::{map_write_error, RecipeStore};
use async_trait::async_trait;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Ingredient, Recipe};
use recipe_core::search::RecipePredicate;
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqliteConnection};
use std::collections::HashMap;

/// Recipe store over a borrowed connection or transaction
pub struct SqliteRecipeStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteRecipeStore<'c> {
    /// Wrap a connection; pass `&mut *tx` to run inside a transaction
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Attach the ingredient rows a statement yields to their recipes
    ///
    /// Rows arrive ordered by ingredient name within each recipe.
    async fn attach_ingredients(
        &mut self,
        mut recipes: Vec<Recipe>,
        mut statement: QueryBuilder<'static, Sqlite>,
    ) -> AppResult<Vec<Recipe>> {
        if recipes.is_empty() {
            return Ok(recipes);
        }

        let rows = statement
            .build()
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to load recipe ingredients: {e}")))?;

        let mut by_recipe: HashMap<i64, Vec<Ingredient>> = HashMap::new();
        for row in &rows {
            by_recipe
                .entry(row.get("recipe_id"))
                .or_default()
                .push(Ingredient {
                    id: row.get("id"),
                    name: row.get("name"),
                });
        }

        for recipe in &mut recipes {
            if let Some(id) = recipe.id {
                recipe.ingredients = by_recipe.remove(&id).unwrap_or_default();
            }
        }

        Ok(recipes)
    }

    /// Load the recipes a predicate selects along with their ingredient sets
    async fn load_matching(&mut self, predicate: &RecipePredicate) -> AppResult<Vec<Recipe>> {
        let rows = build_search_query(predicate)
            .build()
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to search recipes: {e}")))?;

        let recipes = rows.iter().map(row_to_recipe).collect::<AppResult<Vec<_>>>()?;
        self.attach_ingredients(recipes, build_ingredient_query(predicate))
            .await
    }

    async fn hydrate_one(&mut self, row: Option<SqliteRow>) -> AppResult<Option<Recipe>> {
        match row {
            Some(row) => {
                let statement = build_recipe_ingredient_query(row.get("id"));
                let recipe = row_to_recipe(&row)?;
                Ok(self.attach_ingredients(vec![recipe], statement).await?.pop())
            }
            None => Ok(None),
        }
    }

    async fn insert(&mut self, recipe: &Recipe) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO recipes (name, is_vegetarian, servings, instructions, instructions_folded)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&recipe.name)
        .bind(recipe.is_vegetarian)
        .bind(i64::from(recipe.servings))
        .bind(&recipe.instructions)
        .bind(recipe.folded_instructions())
        .execute(&mut *self.conn)
        .await
        .map_err(|e| map_write_error("Recipe", "create recipe", e))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&mut self, id: i64, recipe: &Recipe) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE recipes
            SET name = $1, is_vegetarian = $2, servings = $3, instructions = $4,
                instructions_folded = $5
            WHERE id = $6
            ",
        )
        .bind(&recipe.name)
        .bind(recipe.is_vegetarian)
        .bind(i64::from(recipe.servings))
        .bind(&recipe.instructions)
        .bind(recipe.folded_instructions())
        .bind(id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| map_write_error("Recipe", "update recipe", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        Ok(())
    }

    async fn replace_associations(&mut self, id: i64, ingredients: &[Ingredient]) -> AppResult<()> {
        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to unlink ingredients: {e}")))?;

        for ingredient in ingredients {
            sqlx::query(
                "INSERT OR IGNORE INTO recipe_ingredients (recipe_id, ingredient_id) VALUES ($1, $2)",
            )
            .bind(id)
            .bind(ingredient.id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to link ingredient: {e}")))?;
        }

        Ok(())
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore<'_> {
    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        self.hydrate_one(row).await
    }

    async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.name = $1");
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe by name: {e}")))?;

        self.hydrate_one(row).await
    }

    async fn find_all(&mut self) -> AppResult<Vec<Recipe>> {
        self.load_matching(&RecipePredicate::default()).await
    }

    async fn save(&mut self, recipe: &Recipe) -> AppResult<Recipe> {
        let id = match recipe.id {
            Some(id) => {
                self.update(id, recipe).await?;
                id
            }
            None => self.insert(recipe).await?,
        };

        let mut ingredients = recipe.ingredients.clone();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        ingredients.dedup_by_key(|ingredient| ingredient.id);
        self.replace_associations(id, &ingredients).await?;

        Ok(Recipe {
            id: Some(id),
            ingredients,
            ..recipe.clone()
        })
    }

    async fn delete(&mut self, id: i64) -> AppResult<bool> {
        // Association rows go with the recipe through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn query(&mut self, predicate: &RecipePredicate) -> AppResult<Vec<Recipe>> {
        self.load_matching(predicate).await
    }

    async fn count(&mut self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))
    }
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let servings: i64 = row.get("servings");

    Ok(Recipe {
        id: Some(row.get("id")),
        name: row.get("name"),
        is_vegetarian: row.get("is_vegetarian"),
        servings: u32::try_from(servings)
            .map_err(|e| AppError::internal(format!("Invalid servings {servings}: {e}")))?,
        instructions: row.get("instructions"),
        ingredients: Vec::new(),
    })
}
