// ABOUTME: Business logic layer between route handlers and storage
// ABOUTME: Hosts the exercise lifecycle service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise lifecycle service
pub mod exercises;

pub use exercises::{ExerciseService, IdGenerator};
