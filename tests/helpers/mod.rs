// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request driver and exercise fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;
pub mod test_utils;
