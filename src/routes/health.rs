// ABOUTME: Health check route for service monitoring
// ABOUTME: Reports liveness together with database reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use crate::server::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let (status, database) = match resources.database.ping().await {
            Ok(()) => (StatusCode::OK, "ok"),
            Err(e) => {
                warn!("Health check failed: {e}");
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
        };

        let body = serde_json::json!({
            "status": if status == StatusCode::OK { "healthy" } else { "degraded" },
            "service": service_names::RECIPE_CATALOG_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
        });

        (status, Json(body))
    }
}
