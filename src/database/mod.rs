// ABOUTME: Database connection management for the exercise store
// ABOUTME: Builds the SQLite pool, bootstraps the schema and exposes health probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Owns the `SQLite` connection pool. Schema bootstrap is idempotent and runs on
//! every connect; there is no versioned migration history.

/// Exercise table schema and row decoding
pub mod exercises;
/// Storage port trait and its `SQLite` implementation
pub mod repositories;
/// RAII transaction guard with explicit commit / rollback
pub mod transactions;

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub use repositories::{ExerciseRepository, ExerciseRepositoryImpl};
pub use transactions::TransactionGuard;

use crate::config::{DatabaseConfig, DatabaseUrl};
pub use crate::errors::DatabaseError;

/// Connection pool for the exercise store
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using the given configuration and bootstrap the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot be
    /// created
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            ensure_parent_dir(path).await?;
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())?
            .create_if_missing(true)
            .busy_timeout(config.busy_timeout);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.pool_size());
        if config.url.is_memory() {
            // Dropping the last connection to :memory: discards the database
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        let db = Self { pool };
        db.migrate().await?;

        info!(
            url = %config.url,
            pool_size = config.pool_size(),
            "Database initialized"
        );
        Ok(db)
    }

    /// In-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run schema bootstrap
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_exercises().await?;
        debug!("Database schema ready");
        Ok(())
    }

    /// Round-trip a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}

async fn ensure_parent_dir(path: &Path) -> Result<(), DatabaseError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                DatabaseError::ConnectionError(format!(
                    "Cannot create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}
