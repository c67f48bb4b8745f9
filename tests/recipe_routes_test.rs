// ABOUTME: HTTP-level tests for the recipe, ingredient, and health routes
// ABOUTME: Drives the real router with oneshot requests and checks statuses and bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use common::{create_test_resources, recipe_a, recipe_b};
use recipe_catalog::models::{IngredientDto, RecipeDto, RecipeRequest};
use recipe_catalog::server::build_router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

async fn test_router() -> Router {
    let resources = create_test_resources().await.unwrap();
    build_router(&resources)
}

fn json_request(method: Method, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn create(router: &Router, request: &RecipeRequest) -> StatusCode {
    send(router, json_request(Method::POST, "/recipes", request))
        .await
        .0
}

async fn id_of(router: &Router, name: &str) -> i64 {
    let (status, body) = send(
        router,
        empty_request(Method::GET, &format!("/recipes/id?name={name}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_create_returns_created_without_body() {
    let router = test_router().await;

    let (status, body) = send(&router, json_request(Method::POST, "/recipes", &recipe_a())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_list_returns_wire_format() {
    let router = test_router().await;
    create(&router, &recipe_a()).await;

    let (status, body) = send(&router, empty_request(Method::GET, "/recipes")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let recipe = &json[0];
    assert_eq!(recipe["name"], "recipe a");
    assert_eq!(recipe["isVegetarian"], true);
    assert_eq!(recipe["servings"], 4);
    assert_eq!(recipe["ingredients"][0]["name"], "cheese");
    assert!(recipe["ingredients"][0]["id"].is_i64());
}

#[tokio::test]
async fn test_get_id_by_name_returns_bare_number() {
    let router = test_router().await;
    create(&router, &recipe_a()).await;

    let (status, body) = send(&router, empty_request(Method::GET, "/recipes/id?name=Recipe%20A")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "1");

    let (missing, body) = send(&router, empty_request(Method::GET, "/recipes/id?name=none")).await;
    assert_eq!(missing, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_search_parses_query_parameters() {
    let router = test_router().await;
    create(&router, &recipe_a()).await;
    create(&router, &recipe_b()).await;

    let query = serde_urlencoded::to_string([
        ("includedIngredients", "salt, tomato"),
        ("excludedIngredients", "cheese"),
        ("minServings", "1"),
        ("isVegetarian", ""),
    ])
    .unwrap();

    let (status, body) = send(
        &router,
        empty_request(Method::GET, &format!("/recipes/search?{query}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recipes: Vec<RecipeDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "recipe b");
}

#[tokio::test]
async fn test_search_without_parameters_lists_everything() {
    let router = test_router().await;
    create(&router, &recipe_a()).await;
    create(&router, &recipe_b()).await;

    let (status, body) = send(&router, empty_request(Method::GET, "/recipes/search")).await;
    assert_eq!(status, StatusCode::OK);
    let recipes: Vec<RecipeDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(recipes.len(), 2);
}

#[tokio::test]
async fn test_search_rejects_malformed_numbers() {
    let router = test_router().await;

    let (status, body) = send(
        &router,
        empty_request(Method::GET, "/recipes/search?maxServings=lots"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_update_returns_updated_recipe() {
    let router = test_router().await;
    create(&router, &recipe_a()).await;
    let id = id_of(&router, "recipe%20a").await;

    let mut request = recipe_a();
    request.servings = Some(8);
    request.ingredients = Some(vec![IngredientDto::named("Cheese")]);

    let (status, body) = send(
        &router,
        json_request(Method::PUT, &format!("/recipes/{id}"), &request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated: RecipeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.servings, 8);
    assert_eq!(updated.ingredients.len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_missing_recipe() {
    let router = test_router().await;

    let (status, _) = send(&router, json_request(Method::PUT, "/recipes/99", &recipe_a())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, empty_request(Method::DELETE, "/recipes/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, empty_request(Method::DELETE, "/recipes/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_returns_no_content() {
    let router = test_router().await;
    create(&router, &recipe_b()).await;
    let id = id_of(&router, "recipe%20b").await;

    let (status, body) = send(&router, empty_request(Method::DELETE, &format!("/recipes/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = send(&router, empty_request(Method::GET, "/ingredients")).await;
    let ingredients: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(ingredients.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_validation_failure_lists_violations() {
    let router = test_router().await;

    let (status, body) = send(
        &router,
        json_request(
            Method::POST,
            "/recipes",
            &serde_json::json!({ "name": "A", "servings": 0, "instructions": "" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["details"]["violations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let router = test_router().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let router = test_router().await;
    assert_eq!(create(&router, &recipe_a()).await, StatusCode::CREATED);
    assert_eq!(create(&router, &recipe_a()).await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_referenced_ingredient_is_conflict() {
    let router = test_router().await;
    create(&router, &recipe_b()).await;

    let (_, body) = send(&router, empty_request(Method::GET, "/ingredients")).await;
    let ingredients: Value = serde_json::from_slice(&body).unwrap();
    let beef_id = ingredients[0]["id"].as_i64().unwrap();
    assert_eq!(ingredients[0]["name"], "beef");

    let (status, body) = send(
        &router,
        empty_request(Method::DELETE, &format!("/ingredients/{beef_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "RESOURCE_IN_USE");
}

#[tokio::test]
async fn test_health_reports_database() {
    let router = test_router().await;

    let (status, body) = send(&router, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn test_request_id_is_generated_or_echoed() {
    let router = test_router().await;

    let response = router
        .clone()
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    let generated = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(generated).is_ok());

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "client-supplied-id"
    );
}
