// ABOUTME: Startup seeding of an empty catalog from a JSON fixture
// ABOUTME: Failures are logged and swallowed so the server always starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipes::RecipeService;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::RecipeRequest;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info, warn};

/// What startup seeding did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held recipes; nothing was loaded
    Skipped {
        /// Recipes present before seeding
        existing: i64,
    },
    /// The fixture was loaded completely
    Seeded {
        /// Recipes created
        count: usize,
    },
    /// The fixture file does not exist
    NoFixture,
    /// Seeding stopped at the first failure
    Failed {
        /// Recipes created before the failure
        seeded: usize,
        /// Description of the failure
        reason: String,
    },
}

async fn load_fixture(path: &Path) -> AppResult<Option<Vec<RecipeRequest>>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::internal(format!(
            "Failed to read seed file {}: {e}",
            path.display()
        ))
        .with_source(e)),
    }
}

/// Seed the catalog from `path` if it holds no recipes
///
/// Each fixture entry goes through the same create path as the public API.
/// Nothing is merged into a populated catalog.
pub async fn seed_if_empty(service: &RecipeService, path: &Path) -> SeedOutcome {
    match service.count().await {
        Ok(0) => {}
        Ok(existing) => {
            info!(existing, "Catalog already populated, skipping seed");
            return SeedOutcome::Skipped { existing };
        }
        Err(e) => {
            error!("Failed to count recipes before seeding: {e}");
            return SeedOutcome::Failed {
                seeded: 0,
                reason: e.to_string(),
            };
        }
    }

    let requests = match load_fixture(path).await {
        Ok(Some(requests)) => requests,
        Ok(None) => {
            warn!(path = %path.display(), "Seed file not found, starting with an empty catalog");
            return SeedOutcome::NoFixture;
        }
        Err(e) => {
            error!(path = %path.display(), "Failed to load seed file: {e}");
            return SeedOutcome::Failed {
                seeded: 0,
                reason: e.to_string(),
            };
        }
    };

    let mut seeded = 0;
    for request in &requests {
        if let Err(e) = service.create(request).await {
            error!(seeded, "Seeding stopped: {e}");
            return SeedOutcome::Failed {
                seeded,
                reason: e.to_string(),
            };
        }
        seeded += 1;
    }

    info!(count = seeded, path = %path.display(), "Catalog seeded");
    SeedOutcome::Seeded { count: seeded }
}
