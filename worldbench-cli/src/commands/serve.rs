//! HTTP server command
//!
//! Runs the benchmark server with all routes.

use anyhow::{Context, Result};
use clap::Parser;

use worldbench_server::db::create_pool;
use worldbench_server::http::run_server;

use crate::config::{BenchConfig, SettingsArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = BenchConfig::resolve(&args.settings)?;
    let pool_config = config.pool_config()?;
    let server_config = config.server_config();

    tracing::info!(
        bind = %server_config.bind_addr,
        max_connections = pool_config.max_connections,
        "Starting worldbench server"
    );

    let pool = create_pool(&pool_config)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
