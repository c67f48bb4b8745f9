// ABOUTME: Integration tests for startup seeding from a JSON fixture
// ABOUTME: Covers empty-catalog seeding, skipping a populated catalog, and swallowed failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{create_test_service, recipe_a, recipe_b};
use recipe_catalog::services::{seed_if_empty, SeedOutcome};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_seeds_empty_catalog() {
    let service = create_test_service().await.unwrap();
    let file = fixture(&serde_json::to_string(&[recipe_a(), recipe_b()]).unwrap());

    let outcome = seed_if_empty(&service, file.path()).await;

    assert_eq!(outcome, SeedOutcome::Seeded { count: 2 });
    assert_eq!(service.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_populated_catalog_is_not_touched() {
    let service = create_test_service().await.unwrap();
    service.create(&recipe_a()).await.unwrap();
    let file = fixture(&serde_json::to_string(&[recipe_b()]).unwrap());

    let outcome = seed_if_empty(&service, file.path()).await;

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_missing_fixture_is_reported() {
    let service = create_test_service().await.unwrap();

    let outcome = seed_if_empty(&service, Path::new("/nonexistent/recipes.json")).await;

    assert_eq!(outcome, SeedOutcome::NoFixture);
}

#[tokio::test]
async fn test_malformed_fixture_is_swallowed() {
    let service = create_test_service().await.unwrap();
    let file = fixture("[{\"name\": ");

    let outcome = seed_if_empty(&service, file.path()).await;

    assert!(matches!(outcome, SeedOutcome::Failed { seeded: 0, .. }));
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_seeding_stops_at_first_invalid_recipe() {
    let service = create_test_service().await.unwrap();
    let mut invalid = recipe_b();
    invalid.servings = Some(0);
    let file = fixture(&serde_json::to_string(&[recipe_a(), invalid]).unwrap());

    let outcome = seed_if_empty(&service, file.path()).await;

    assert!(matches!(outcome, SeedOutcome::Failed { seeded: 1, .. }));
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_bundled_fixture_is_valid() {
    let service = create_test_service().await.unwrap();
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/recipes.json");

    let outcome = seed_if_empty(&service, &path).await;

    assert!(matches!(outcome, SeedOutcome::Seeded { count } if count > 0));
}
