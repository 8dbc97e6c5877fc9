// ABOUTME: Exercise service binary entry point
// ABOUTME: Loads environment configuration, initializes logging and the database, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Service Binary
//!
//! Starts the exercises HTTP API. All settings come from `EXERCISES_*`
//! environment variables; `--host` and `--http-port` override them.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use exercise_service::{
    config::ServerConfig, database::Database, logging, resources::ServerResources, server,
};
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "exercise-service")]
#[command(about = "Exercise API - paginated CRUD service for training exercises")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_for_server(&config)?;
    info!("{}", config.summary());

    let database = match Database::connect(&config.database).await {
        Ok(database) => database,
        Err(e) => {
            error!("Failed to initialize database: {e}");
            return Err(e.into());
        }
    };

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let result = server::run(resources).await;
    if let Err(ref e) = result {
        error!("Server error: {e:#}");
    }
    info!("Exercise service shut down");
    result
}
