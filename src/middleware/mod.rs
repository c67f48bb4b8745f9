// ABOUTME: HTTP middleware for the recipe catalog server
// ABOUTME: Request correlation ids and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from configuration
pub mod cors;
/// Request id assignment and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
