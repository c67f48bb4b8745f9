// ABOUTME: Validation limits and shared constant values for the recipe catalog
// ABOUTME: Centralizes field length bounds and structured error detail keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Field constraints applied to submitted recipes and ingredients
pub mod validation {
    /// Minimum length of a recipe or ingredient name (after trimming)
    pub const NAME_MIN_CHARS: usize = 2;

    /// Maximum length of a recipe or ingredient name (after trimming)
    pub const NAME_MAX_CHARS: usize = 30;
}

/// Keys used inside `AppError` details payloads
pub mod error_details {
    /// List of human-readable field violations
    pub const VIOLATIONS: &str = "violations";

    /// Resource identifier the error refers to
    pub const RESOURCE_ID: &str = "resource_id";
}
