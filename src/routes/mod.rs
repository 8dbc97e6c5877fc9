// ABOUTME: Route module organization for the exercise service HTTP surface
// ABOUTME: Exercise CRUD endpoints plus health and readiness probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each route group exposes a `routes(resources)` constructor returning an
//! `axum::Router`; `server::build_router` merges them.

/// Exercise CRUD endpoints
pub mod exercises;
/// Liveness and readiness endpoints
pub mod health;

pub use exercises::{ExerciseRoutes, ListExercisesQuery};
pub use health::HealthRoutes;
