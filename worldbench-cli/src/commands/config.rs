//! Print the effective configuration

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{BenchConfig, SettingsArgs};

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Resolve file, environment, and flags, then print the result as TOML.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    let config = BenchConfig::resolve(&args.settings)?;
    let mut effective = config.redacted();
    effective.server.bind = Some(config.server_config().bind_addr);

    let rendered = toml::to_string_pretty(&effective).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
