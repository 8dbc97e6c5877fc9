// ABOUTME: Application-wide constants for the exercise service
// ABOUTME: Field limits, entity defaults, service names and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Field length limits enforced by projections and the storage schema
pub mod limits {
    /// Maximum number of characters in an exercise title
    pub const TITLE_MAX_LENGTH: usize = 50;

    /// Maximum number of characters in a preview or background image path
    pub const IMAGE_PATH_MAX_LENGTH: usize = 500;
}

/// Default values applied when a field is omitted at creation
pub mod defaults {
    /// Title given to exercises created without one
    pub const EXERCISE_TITLE: &str = "generic exercise";

    /// Difficulty stored when none is persisted explicitly
    pub const EXERCISE_DIFFICULTY: u32 = 0;

    /// Page size used by list requests that omit `size`
    pub const PAGE_SIZE: i64 = 10;

    /// HTTP port the service listens on
    pub const HTTP_PORT: u16 = 8000;

    /// Interface the service binds to
    pub const HOST: &str = "0.0.0.0";

    /// `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/exercises.db";

    /// Maximum pooled database connections
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;

    /// Seconds a connection waits on a locked database before failing
    pub const DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
}

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// Default service name
    pub const EXERCISE_SERVICE: &str = "ilps-service-exercises";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Bind address
    pub const HOST: &str = "EXERCISES_HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "EXERCISES_HTTP_PORT";
    /// Database connection string
    pub const DATABASE_URL: &str = "EXERCISES_DATABASE_URL";
    /// Pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "EXERCISES_DATABASE_MAX_CONNECTIONS";
    /// Busy timeout in seconds
    pub const DATABASE_BUSY_TIMEOUT_SECS: &str = "EXERCISES_DATABASE_BUSY_TIMEOUT_SECS";
    /// Service name reported in logs
    pub const SERVICE_NAME: &str = "EXERCISES_SERVICE_NAME";
    /// Debug mode toggle
    pub const DEBUG_MODE: &str = "EXERCISES_DEBUG_MODE";
    /// Page size applied when a list request omits `size`
    pub const DEFAULT_PAGE_SIZE: &str = "EXERCISES_DEFAULT_PAGE_SIZE";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
