// ABOUTME: Main library entry point for the recipe catalog server
// ABOUTME: Storage, services, HTTP routes, and the ambient configuration and logging stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! An HTTP service for creating, updating, listing, and searching recipes that
//! share a common set of ingredients. Domain types, validation, and the
//! search predicate live in `recipe-core`; this crate adds `SQLite` storage,
//! the service layer, and the axum HTTP surface.
//!
//! ## Architecture
//!
//! - **database**: schema, store traits, `SQLite` stores, search SQL rendering
//! - **services**: recipe assembly, catalog operations, startup seeding
//! - **routes**: `/recipes`, `/ingredients`, `/health`
//! - **server**: shared resources, router, serve loop

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Connection pool, migrations, and stores
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Catalog services
pub mod services;

pub use recipe_core::{errors, models, search};
