// ABOUTME: Projection schemas crossing the service boundary
// ABOUTME: Re-exports exercise request/response shapes and the sparse-update Patch wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request and response shapes
//!
//! Every projection validates its own fields when data enters the service, so
//! invalid input is rejected before any storage access.

/// Exercise projections
pub mod exercise;
/// Three-state field wrapper for partial updates
pub mod patch;

pub use exercise::{
    CreateExerciseRequest, CreateExerciseResponse, DeleteExerciseResponse, ExerciseDetail,
    ExerciseSummary, UpdateExerciseRequest, UpdateExerciseResponse,
};
pub use patch::Patch;
