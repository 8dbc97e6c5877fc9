// ABOUTME: Application constants re-exported from exercise-core
// ABOUTME: Field limits, defaults, service names, environment keys and header names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use exercise_core::constants::*;
