// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Parses connection URLs and carries pool sizing and busy-timeout settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names a backend other than `SQLite` or has an
    /// empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "PostgreSQL is not supported; use a sqlite: URL",
            ));
        }

        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        let path_str = path_str.split('?').next().unwrap_or(path_str);

        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "Database URL has an empty path",
            )),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/exercises.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection and pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum pooled connections (forced to 1 for in-memory databases)
    pub max_connections: u32,
    /// How long a connection waits on a locked database
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// In-memory configuration used by tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            ..Self::default()
        }
    }

    /// Effective pool size
    #[must_use]
    pub fn pool_size(&self) -> u32 {
        // Every connection to :memory: opens a separate database
        if self.url.is_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
            busy_timeout: Duration::from_secs(defaults::DATABASE_BUSY_TIMEOUT_SECS),
        }
    }
}
