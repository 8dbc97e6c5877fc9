// ABOUTME: Main library entry point for the exercise service
// ABOUTME: Paginated CRUD API for training exercises backed by SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Exercise Service
//!
//! Network-accessible manager for training exercises: paginated listing,
//! retrieval, creation, sparse update and deletion, persisted in `SQLite`.
//!
//! ## Architecture
//!
//! - **Models**: the `Exercise` entity (from `exercise-core`)
//! - **Schemas**: summary, detail and request/result projections with boundary validation
//! - **Pagination**: page/size to skip/limit conversion (from `exercise-core`)
//! - **Services**: the exercise lifecycle service
//! - **Database**: the storage port and its `SQLite` implementation
//! - **Routes**: the HTTP surface, assembled by `server`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use exercise_service::config::ServerConfig;
//! use exercise_service::database::Database;
//! use exercise_service::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let database = Database::connect(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(database, config));
//!     exercise_service::server::run(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants (re-exported from `exercise-core`)
pub mod constants;

/// Storage port, `SQLite` implementation and transaction handling
pub mod database;

/// Unified error handling (re-exported from `exercise-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Request correlation and tracing middleware
pub mod middleware;

/// Exercise entity model (re-exported from `exercise-core`)
pub mod models;

/// Offset pagination (re-exported from `exercise-core`)
pub mod pagination;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Request and response projections
pub mod schemas;

/// HTTP server assembly and lifecycle
pub mod server;

/// Business logic services
pub mod services;
