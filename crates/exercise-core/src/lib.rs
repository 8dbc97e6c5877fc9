// ABOUTME: Core types and constants for the exercise lifecycle service
// ABOUTME: Foundation crate with error handling, offset pagination, the exercise entity and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Exercise Core
//!
//! Foundation crate providing shared types and constants for the exercise
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `DatabaseError`
//! - **constants**: Field limits, defaults and environment variable names
//! - **pagination**: Page/size based pagination for list endpoints
//! - **models**: The `Exercise` entity and its enumerated field types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Offset pagination calculator and paginated response envelope
pub mod pagination;

/// Core data models (Exercise, `ExerciseLang`, `ExerciseTag`)
pub mod models;
