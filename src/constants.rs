// ABOUTME: Application constants for the recipe catalog server
// ABOUTME: Service names, configuration defaults, and HTTP header names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared across the server

/// Service identification used in logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary
    pub const RECIPE_CATALOG_SERVER: &str = "recipe-catalog-server";
}

/// Defaults applied when an environment variable is not set
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Bind port
    pub const HTTP_PORT: u16 = 8081;
    /// `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Startup fixture with recipes in the create representation
    pub const SEED_FILE: &str = "./data/recipes.json";
    /// Allow every origin unless configured otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Connection settings for file-backed databases
pub mod database {
    /// How long a writer waits for the `SQLite` write lock
    pub const BUSY_TIMEOUT_MS: u64 = 5_000;
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Seed fixture path
    pub const RECIPE_SEED_FILE: &str = "RECIPE_SEED_FILE";
    /// Toggle for startup seeding
    pub const SEED_ON_STARTUP: &str = "SEED_ON_STARTUP";
    /// Comma-separated list of allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
