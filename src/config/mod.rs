// ABOUTME: Configuration module organization for the exercise service
// ABOUTME: Environment-driven server settings and database connection settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings are read from `EXERCISES_*` environment variables (optionally
//! seeded from a `.env` file). There is no configuration file.

/// Database connection settings
pub mod database;
/// Environment-based server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;
