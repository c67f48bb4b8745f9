// ABOUTME: Criterion benchmarks for recipe search
// ABOUTME: Measures in-memory predicate evaluation and the SQLite search query over a seeded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for recipe search.
//!
//! Compares evaluating the search predicate against loaded recipes with
//! running the generated SQL against an in-memory `SQLite` catalog.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_catalog::config::DatabaseUrl;
use recipe_catalog::database::RecipeDatabase;
use recipe_catalog::models::{Ingredient, IngredientDto, Recipe, RecipeRequest};
use recipe_catalog::search::RecipeSearchFilter;
use recipe_catalog::services::RecipeService;
use tokio::runtime::Runtime;

const PANTRY: [&str; 12] = [
    "tomato", "cheese", "basil", "beef", "salt", "pepper", "onion", "garlic", "rice", "egg",
    "flour", "salmon",
];

/// Deterministic catalog sizes
const CATALOG_SIZES: [usize; 3] = [10, 100, 500];

fn ingredient_names(index: usize) -> Vec<&'static str> {
    (0..4).map(|offset| PANTRY[(index * 5 + offset * 3) % PANTRY.len()]).collect()
}

fn generate_request(index: usize) -> RecipeRequest {
    RecipeRequest {
        id: None,
        name: Some(format!("bench recipe {index}")),
        is_vegetarian: Some(index % 3 != 0),
        servings: Some(i64::try_from(index % 8 + 1).unwrap()),
        instructions: Some(if index % 2 == 0 {
            "Bake in the oven until golden".to_owned()
        } else {
            "Simmer gently for an hour".to_owned()
        }),
        ingredients: Some(
            ingredient_names(index)
                .into_iter()
                .map(IngredientDto::named)
                .collect(),
        ),
    }
}

fn generate_recipe(index: usize) -> Recipe {
    let mut ingredients: Vec<Ingredient> = ingredient_names(index)
        .into_iter()
        .map(|name| Ingredient {
            id: i64::try_from(PANTRY.iter().position(|p| *p == name).unwrap()).unwrap(),
            name: name.to_owned(),
        })
        .collect();
    ingredients.sort();
    ingredients.dedup();

    Recipe {
        id: Some(i64::try_from(index).unwrap()),
        name: format!("bench recipe {index}"),
        is_vegetarian: index % 3 != 0,
        servings: u32::try_from(index % 8 + 1).unwrap(),
        instructions: "Simmer gently for an hour".to_owned(),
        ingredients,
    }
}

fn combined_filter() -> RecipeSearchFilter {
    RecipeSearchFilter {
        vegetarian: Some(true),
        min_servings: Some(2),
        max_servings: Some(6),
        include_ingredients: Some(vec!["tomato".to_owned(), "egg".to_owned()]),
        exclude_ingredients: Some(vec!["beef".to_owned()]),
        instructions_contains: Some("oven".to_owned()),
    }
}

async fn seeded_service(size: usize) -> RecipeService {
    let database = RecipeDatabase::new(&DatabaseUrl::Memory).await.unwrap();
    let service = RecipeService::new(database);
    for index in 0..size {
        service.create(&generate_request(index)).await.unwrap();
    }
    service
}

/// Benchmark predicate evaluation over recipes already in memory
fn bench_predicate_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_predicate");
    let predicate = combined_filter().to_predicate();

    for size in CATALOG_SIZES {
        let recipes: Vec<Recipe> = (0..size).map(generate_recipe).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| {
                recipes
                    .iter()
                    .filter(|recipe| predicate.matches(black_box(recipe)))
                    .count()
            });
        });
    }

    group.finish();
}

/// Benchmark the generated SQL search against an in-memory catalog
fn bench_sqlite_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("search_sqlite");
    group.sample_size(20);

    for size in CATALOG_SIZES {
        let service = rt.block_on(seeded_service(size));

        group.bench_function(BenchmarkId::new("combined_filter", size), |b| {
            let filter = combined_filter();
            b.iter(|| rt.block_on(service.search(black_box(&filter))).unwrap());
        });

        group.bench_function(BenchmarkId::new("unfiltered", size), |b| {
            let filter = RecipeSearchFilter::default();
            b.iter(|| rt.block_on(service.search(black_box(&filter))).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_predicate_matching, bench_sqlite_search);
criterion_main!(benches);
