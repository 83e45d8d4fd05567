//! worldbench - database benchmark server
//!
//! Entry point for the `worldbench` binary:
//! - `serve` runs the HTTP server against PostgreSQL
//! - `config` prints the effective configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "worldbench",
    author,
    version,
    about = "Benchmark server for plaintext, JSON, and PostgreSQL query workloads"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP benchmark server
    Serve(commands::serve::ServeArgs),
    /// Print the effective configuration as TOML
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads environment-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            tracing_setup::init(&TracingConfig { debug: cli.debug })?;
            commands::serve::run_serve(args).await
        }
        Commands::Config(args) => commands::config::run_config(args),
    }
}
