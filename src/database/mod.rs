// ABOUTME: SQLite connection pool, schema migrations, and store implementations
// ABOUTME: Recipes, ingredients, and their association table live in one database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`RecipeDatabase`] owns the connection pool and creates the schema. The
//! stores in [`ingredients`] and [`recipes`] borrow a single
//! [`SqliteConnection`], so callers decide whether they run on a pooled
//! connection (reads) or inside an open transaction (writes).

/// Ingredient store over a borrowed connection
pub mod ingredients;
/// Recipe store over a borrowed connection
pub mod recipes;
/// SQL rendering of search predicates
pub mod search;
/// Store contracts used by the services
pub mod stores;

pub use ingredients::SqliteIngredientStore;
pub use recipes::SqliteRecipeStore;
pub use stores::{IngredientStore, RecipeStore};

use crate::config::DatabaseUrl;
use crate::constants::database::BUSY_TIMEOUT_MS;
use crate::logging::AppLogger;
use recipe_core::errors::{AppError, AppResult};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::info;

/// Map a storage failure, turning unique-constraint violations into conflicts
pub(crate) fn map_write_error(resource: &str, operation: &str, error: sqlx::Error) -> AppError {
    let unique_violation = matches!(
        &error,
        sqlx::Error::Database(db_error) if db_error.is_unique_violation()
    );

    if unique_violation {
        AppError::already_exists(resource.to_owned()).with_source(error)
    } else {
        AppError::database(format!("Failed to {operation}: {error}")).with_source(error)
    }
}

/// Connection pool plus schema management for the catalog
#[derive(Clone)]
pub struct RecipeDatabase {
    pool: SqlitePool,
}

impl RecipeDatabase {
    /// Connect to the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection cannot be opened or the
    /// schema cannot be created
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let connection_string = url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Writers queue on the file lock instead of failing with SQLITE_BUSY;
        // WAL keeps readers off the writer's lock
        let options = if url.is_memory() {
            options
        } else {
            options
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_millis(BUSY_TIMEOUT_MS))
        };

        // An in-memory database lives as long as its connection, so keep
        // exactly one connection open for the life of the pool
        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        let database = Self { pool };
        database.migrate().await?;

        info!(database = %url, "Database ready");
        Ok(database)
    }

    /// Acquire a pooled connection for reads
    ///
    /// # Errors
    ///
    /// Returns a database error if no connection becomes available
    pub async fn acquire(&self) -> AppResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| AppError::database(format!("Failed to acquire connection: {e}")))
    }

    /// Begin a transaction for a write
    ///
    /// The write lock is taken up front (`BEGIN IMMEDIATE`). A deferred
    /// transaction that reads before it writes cannot upgrade its lock while
    /// another writer holds it, and `SQLite` fails that upgrade without
    /// waiting for the busy timeout.
    ///
    /// # Errors
    ///
    /// Returns a database error if the transaction cannot be started
    pub async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))
    }

    /// Check that the database answers queries
    ///
    /// # Errors
    ///
    /// Returns a database error if the probe query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns a database error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let started = Instant::now();
        let mut conn = self.acquire().await?;
        let result = migrate_catalog(&mut conn).await;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_database_operation("migrate", "recipes", result.is_ok(), duration_ms);
        result
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn migrate_catalog(conn: &mut SqliteConnection) -> AppResult<()> {
    let statements = [
        r"
        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            is_vegetarian BOOLEAN NOT NULL,
            servings INTEGER NOT NULL CHECK (servings > 0),
            instructions TEXT NOT NULL,
            instructions_folded TEXT NOT NULL
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS recipe_ingredients (
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            ingredient_id INTEGER NOT NULL REFERENCES ingredients(id) ON DELETE RESTRICT,
            PRIMARY KEY (recipe_id, ingredient_id)
        )
        ",
        r"
        CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient
            ON recipe_ingredients(ingredient_id)
        ",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to migrate catalog schema: {e}")))?;
    }

    Ok(())
}
