// ABOUTME: Core data models for the exercise service
// ABOUTME: Re-exports the Exercise entity and its enumerated field types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise entity, language and tag enums
pub mod exercise;

pub use exercise::{Exercise, ExerciseLang, ExerciseTag, NewExercise};
