// ABOUTME: SQLite implementation of the ingredient store
// ABOUTME: Unique names are enforced by the schema; conflicts surface as ResourceAlreadyExists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{map_write_error, IngredientStore};
use async_trait::async_trait;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::Ingredient;
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection};

/// Ingredient store over a borrowed connection or transaction
pub struct SqliteIngredientStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteIngredientStore<'c> {
    /// Wrap a connection; pass `&mut *tx` to run inside a transaction
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl IngredientStore for SqliteIngredientStore<'_> {
    async fn find_by_name(&mut self, name: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query("SELECT id, name FROM ingredients WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to get ingredient by name: {e}")))?;

        Ok(row.as_ref().map(row_to_ingredient))
    }

    async fn find_by_id(&mut self, id: i64) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query("SELECT id, name FROM ingredients WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to get ingredient: {e}")))?;

        Ok(row.as_ref().map(row_to_ingredient))
    }

    async fn create(&mut self, name: &str) -> AppResult<Ingredient> {
        let result = sqlx::query("INSERT INTO ingredients (name) VALUES ($1)")
            .bind(name)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| map_write_error("Ingredient", "create ingredient", e))?;

        Ok(Ingredient {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
        })
    }

    async fn find_all(&mut self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query("SELECT id, name FROM ingredients ORDER BY name")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to list ingredients: {e}")))?;

        Ok(rows.iter().map(row_to_ingredient).collect())
    }

    async fn is_referenced(&mut self, id: i64) -> AppResult<bool> {
        let referenced: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM recipe_ingredients WHERE ingredient_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to check ingredient usage: {e}")))?;

        Ok(referenced)
    }

    async fn delete(&mut self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete ingredient: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_ingredient(row: &SqliteRow) -> Ingredient {
    Ingredient {
        id: row.get("id"),
        name: row.get("name"),
    }
}
