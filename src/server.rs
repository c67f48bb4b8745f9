// ABOUTME: HTTP server assembly for the recipe catalog
// ABOUTME: Shared resources, router with tracing/request-id/CORS layers, and the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::constants::headers::REQUEST_ID;
use crate::database::RecipeDatabase;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, IngredientRoutes, RecipeRoutes};
use crate::services::RecipeService;
use anyhow::{Context, Result};
use axum::{body::Body, middleware, Router};
use http::Request;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn, Span};

/// Resources shared by every route handler
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Database pool
    pub database: RecipeDatabase,
    /// Catalog operations
    pub recipes: RecipeService,
}

impl ServerResources {
    /// Bundle configuration and database into handler state
    #[must_use]
    pub fn new(config: ServerConfig, database: RecipeDatabase) -> Self {
        Self {
            config: Arc::new(config),
            recipes: RecipeService::new(database.clone()),
            database,
        }
    }
}

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// Build the application router
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(RecipeRoutes::routes(Arc::clone(resources)))
        .merge(IngredientRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(setup_cors(&resources.config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("HTTP server listening on {address}");
    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    resources.database.close().await;
    info!("HTTP server stopped");
    Ok(())
}
