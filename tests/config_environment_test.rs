// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides and rejection of unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use exercise_service::config::{DatabaseUrl, ServerConfig};
use serial_test::serial;

const VARS: &[&str] = &[
    "EXERCISES_HOST",
    "EXERCISES_HTTP_PORT",
    "EXERCISES_DATABASE_URL",
    "EXERCISES_DATABASE_MAX_CONNECTIONS",
    "EXERCISES_DATABASE_BUSY_TIMEOUT_SECS",
    "EXERCISES_SERVICE_NAME",
    "EXERCISES_DEBUG_MODE",
    "EXERCISES_DEFAULT_PAGE_SIZE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.service_name, "ilps-service-exercises");
    assert!(config.debug_mode);
    assert_eq!(config.default_page_size, 10);
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/exercises.db")
        }
    );
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.busy_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("EXERCISES_HOST", "127.0.0.1");
    env::set_var("EXERCISES_HTTP_PORT", "9100");
    env::set_var("EXERCISES_DATABASE_URL", "sqlite::memory:");
    env::set_var("EXERCISES_SERVICE_NAME", "exercises-test");
    env::set_var("EXERCISES_DEBUG_MODE", "false");
    env::set_var("EXERCISES_DEFAULT_PAGE_SIZE", "25");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert_eq!(config.database.url, DatabaseUrl::Memory);
    assert_eq!(config.database.pool_size(), 1);
    assert_eq!(config.service_name, "exercises-test");
    assert!(!config.debug_mode);
    assert_eq!(config.default_page_size, 25);
    assert!(config.summary().contains("listen=127.0.0.1:9100"));
}

#[test]
#[serial]
fn test_invalid_values_fail() {
    for (var, value) in [
        ("EXERCISES_HTTP_PORT", "eighty"),
        ("EXERCISES_DEBUG_MODE", "maybe"),
        ("EXERCISES_DEFAULT_PAGE_SIZE", "0"),
        ("EXERCISES_DATABASE_URL", "postgresql://localhost/exercises"),
    ] {
        clear_env();
        env::set_var(var, value);
        let result = ServerConfig::from_env();
        clear_env();

        let error = result.expect_err(var);
        assert!(error.to_string().contains(var), "{var}: {error}");
    }
}
