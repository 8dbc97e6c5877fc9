// ABOUTME: Unified error handling re-exported from exercise-core
// ABOUTME: Ensures AppError/ErrorCode are the same types across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use exercise_core::errors::*;
