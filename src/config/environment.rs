// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads EXERCISES_* variables into a typed ServerConfig with contextual parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::database::{DatabaseConfig, DatabaseUrl};
use crate::constants::{defaults, env_config, service_names};

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Service name used in logs and health responses
    pub service_name: String,
    /// Verbose defaults for local development
    pub debug_mode: bool,
    /// Page size applied when a list request omits `size`
    pub default_page_size: i64,
    /// Database settings
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            service_name: service_names::EXERCISE_SERVICE.to_owned(),
            debug_mode: true,
            default_page_size: defaults::PAGE_SIZE,
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let database_url = env_var_or(env_config::DATABASE_URL, defaults::DATABASE_URL);
        let url = DatabaseUrl::parse_url(&database_url)
            .map_err(|e| anyhow!("Invalid {}: {e}", env_config::DATABASE_URL))?;

        let default_page_size: i64 =
            parse_env(env_config::DEFAULT_PAGE_SIZE, defaults::PAGE_SIZE)?;
        if default_page_size <= 0 {
            return Err(anyhow!(
                "Invalid {}: must be greater than 0, got {default_page_size}",
                env_config::DEFAULT_PAGE_SIZE
            ));
        }

        let config = Self {
            host: env_var_or(env_config::HOST, defaults::HOST),
            http_port: parse_env(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            service_name: env_var_or(env_config::SERVICE_NAME, service_names::EXERCISE_SERVICE),
            debug_mode: parse_bool(env_config::DEBUG_MODE, true)?,
            default_page_size,
            database: DatabaseConfig {
                url,
                max_connections: parse_env(
                    env_config::DATABASE_MAX_CONNECTIONS,
                    defaults::DATABASE_MAX_CONNECTIONS,
                )?,
                busy_timeout: Duration::from_secs(parse_env(
                    env_config::DATABASE_BUSY_TIMEOUT_SECS,
                    defaults::DATABASE_BUSY_TIMEOUT_SECS,
                )?),
            },
        };

        info!("Configuration loaded from environment");
        Ok(config)
    }

    /// `host:port` string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} configuration: listen={} database={} pool_size={} default_page_size={} debug={}",
            self.service_name,
            self.bind_address(),
            self.database.url,
            self.database.pool_size(),
            self.default_page_size,
            self.debug_mode,
        )
    }
}

/// Read a variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean flag accepting `true/false`, `1/0`, `yes/no`
fn parse_bool(key: &str, default: bool) -> Result<bool> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow!("Invalid {key} value: {other:?}")),
    }
}
