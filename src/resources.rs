// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles the database pool, the exercise lifecycle service and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::{Database, ExerciseRepositoryImpl};
use crate::services::ExerciseService;

/// Dependencies shared across requests
///
/// Built once at startup and passed to routers as `Arc<ServerResources>`.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Connection pool, used directly only by readiness probes
    pub database: Database,
    /// Exercise lifecycle service
    pub exercises: ExerciseService,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the `SQLite` repository into a new service
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let repository = Arc::new(ExerciseRepositoryImpl::new(&database));
        Self {
            exercises: ExerciseService::new(repository),
            database,
            config,
        }
    }

    /// Use a pre-built service, keeping `database` for readiness probes
    #[must_use]
    pub fn with_service(
        database: Database,
        exercises: ExerciseService,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database,
            exercises,
            config,
        }
    }
}
