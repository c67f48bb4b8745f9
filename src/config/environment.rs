// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, database location, seeding and CORS settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use recipe_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite`, lost when the pool closes
    Memory,
    /// Any other scheme; rejected by validation
    Unsupported {
        /// The URL as configured
        url: String,
    },
}

impl DatabaseUrl {
    /// Parse a connection string
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if path == ":memory:" {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            }
        } else if s.contains("://") {
            Self::Unsupported { url: s.to_owned() }
        } else {
            Self::SQLite {
                path: PathBuf::from(s),
            }
        }
    }

    /// Convert to a connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
            Self::Unsupported { url } => url.clone(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Startup seeding settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Whether to seed an empty catalog on startup
    pub enabled: bool,
    /// Fixture with a JSON array of recipes
    pub file: PathBuf,
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Database location
    pub database: DatabaseUrl,
    /// Startup seeding
    pub seed: SeedConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            database: DatabaseUrl::default(),
            seed: SeedConfig {
                enabled: true,
                file: PathBuf::from(defaults::SEED_FILE),
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            database: DatabaseUrl::parse_url(&env_var_or(
                env_vars::DATABASE_URL,
                defaults::DATABASE_URL,
            )),
            seed: SeedConfig {
                enabled: parse_bool(&env_var_or(env_vars::SEED_ON_STARTUP, "true"))
                    .context("Invalid SEED_ON_STARTUP value")?,
                file: PathBuf::from(env_var_or(env_vars::RECIPE_SEED_FILE, defaults::SEED_FILE)),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero port or a non-`SQLite` database
    pub fn validate(&self) -> AppResult<()> {
        if self.http_port == 0 {
            return Err(AppError::config("HTTP_PORT must be non-zero"));
        }

        if let DatabaseUrl::Unsupported { url } = &self.database {
            return Err(AppError::config(format!(
                "Unsupported DATABASE_URL {url}: only SQLite is supported"
            )));
        }

        if self.host.trim().is_empty() {
            return Err(AppError::config("HOST must not be empty"));
        }

        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Catalog Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Seeding: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            if self.database.is_memory() {
                "SQLite (in-memory)".to_owned()
            } else {
                format!("SQLite ({})", self.database)
            },
            if self.seed.enabled {
                format!("Enabled ({})", self.seed.file.display())
            } else {
                "Disabled".to_owned()
            },
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got {other:?}")),
    }
}
