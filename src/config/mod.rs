// ABOUTME: Configuration module for the recipe catalog server
// ABOUTME: Environment-driven server settings with command line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseUrl, Environment, SeedConfig, ServerConfig};
