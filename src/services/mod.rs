// ABOUTME: Service layer for the recipe catalog
// ABOUTME: Recipe assembly, catalog operations, and startup seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Draft-to-recipe mapping with ingredient resolution
pub mod assembler;
/// Catalog operations behind the HTTP routes
pub mod recipes;
/// Seeding an empty catalog at startup
pub mod seed;

pub use recipes::RecipeService;
pub use seed::{seed_if_empty, SeedOutcome};
