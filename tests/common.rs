// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory and file databases, services, server resources, and recipe builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_catalog`

use anyhow::Result;
use recipe_catalog::{
    config::{DatabaseUrl, ServerConfig},
    database::RecipeDatabase,
    models::{IngredientDto, RecipeRequest},
    server::ServerResources,
    services::RecipeService,
};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Result<RecipeDatabase> {
    init_test_logging();
    Ok(RecipeDatabase::new(&DatabaseUrl::Memory).await?)
}

/// Recipe service over a fresh in-memory database
pub async fn create_test_service() -> Result<RecipeService> {
    Ok(RecipeService::new(create_test_database().await?))
}

/// Recipe service over a database file in a fresh temporary directory
///
/// Keep the returned directory alive for as long as the service is used.
pub async fn create_file_test_service() -> Result<(TempDir, RecipeService)> {
    init_test_logging();
    let dir = TempDir::new()?;
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("recipes.db"),
    };
    let database = RecipeDatabase::new(&url).await?;
    Ok((dir, RecipeService::new(database)))
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let config = ServerConfig {
        database: DatabaseUrl::Memory,
        ..ServerConfig::default()
    };
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(config, database)))
}

/// Valid create/update request
pub fn recipe_request(
    name: &str,
    vegetarian: bool,
    servings: i64,
    instructions: &str,
    ingredients: &[&str],
) -> RecipeRequest {
    RecipeRequest {
        id: None,
        name: Some(name.to_owned()),
        is_vegetarian: Some(vegetarian),
        servings: Some(servings),
        instructions: Some(instructions.to_owned()),
        ingredients: Some(ingredients.iter().map(|n| IngredientDto::named(*n)).collect()),
    }
}

/// Recipe A of the reference search scenario
pub fn recipe_a() -> RecipeRequest {
    recipe_request(
        "Recipe A",
        true,
        4,
        "Bake for 10 minutes",
        &["tomato", "cheese"],
    )
}

/// Recipe B of the reference search scenario
pub fn recipe_b() -> RecipeRequest {
    recipe_request(
        "Recipe B",
        false,
        2,
        "Simmer for an hour",
        &["beef", "salt"],
    )
}
