// ABOUTME: axum IntoResponse integration for AppError
// ABOUTME: Maps error codes to HTTP statuses and logs server-side failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_client_error() {
            warn!(error.code = ?self.code, status = %status, "Request rejected: {}", self.message);
        } else {
            error!(
                error.code = ?self.code,
                status = %status,
                error.source = ?self.source,
                "Request failed: {}",
                self.message
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
