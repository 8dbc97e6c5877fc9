// ABOUTME: Re-exports the exercise entity model from exercise-core
// ABOUTME: Exercise, NewExercise, ExerciseLang and ExerciseTag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use exercise_core::models::*;
