// ABOUTME: Request ID middleware assigning a correlation id to every HTTP request
// ABOUTME: Reuses a client-supplied x-request-id or generates a UUID v4 and echoes it on the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers::REQUEST_ID;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::{HeaderName, HeaderValue};
use uuid::Uuid;

/// Correlation id of the current request, available as an extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// The id as sent in the `x-request-id` header
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attach a request id to the request (header + extension) and the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let supplied = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    let request_id = supplied.unwrap_or_else(|| Uuid::new_v4().to_string());
    let header_value = HeaderValue::from_str(&request_id).ok();

    if let Some(value) = &header_value {
        request
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID), value.clone());
    }
    request.extensions_mut().insert(RequestId(request_id));

    let mut response = next.run(request).await;
    if let Some(value) = header_value {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID), value);
    }
    response
}
