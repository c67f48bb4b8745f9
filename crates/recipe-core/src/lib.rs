// ABOUTME: Core types for the recipe catalog service
// ABOUTME: Foundation crate with error handling, domain models, validation, and search predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Store-independent building blocks for the recipe catalog. Nothing in this
//! crate talks to a database or a socket, which keeps the search predicate and
//! the validation rules testable on their own.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Validation limits and error detail keys
//! - **models**: Recipes, ingredients, and their external representations
//! - **search**: Optional search filters folded into a conjunctive predicate

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Validation limits and shared constant values
pub mod constants;

/// Recipe and ingredient models plus request/response representations
pub mod models;

/// Search filter set and the predicate it folds into
pub mod search;
