// ABOUTME: HTTP route modules for the recipe catalog
// ABOUTME: Each module exposes a routes() constructor taking the shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Liveness and database reachability
pub mod health;
/// Ingredient listing and deletion
pub mod ingredients;
/// Recipe CRUD, search, and lookup
pub mod recipes;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;
