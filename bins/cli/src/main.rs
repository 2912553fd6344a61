//! Tally command-line front end.
//!
//! Usage:
//!   tally round <amount> <code> [mode]
//!   tally allocate <amount> <code> <ratio>...
//!   tally convert <amount> <from> <to>
//!   tally sum|min|max <code> <amount>...
//!
//! Currencies, rates and the default rounding mode come from `config/`
//! and `TALLY__*` environment variables.

mod command;

use anyhow::Context;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tally_shared::AppConfig;

use crate::command::Command;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(
        currencies = config.currencies.len(),
        rates = config.rates.len(),
        mode = %config.rounding.mode,
        "Configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = execute(&args, &config) {
        error!(error = %err, "Command failed");
        return Err(err);
    }

    Ok(())
}

fn execute(args: &[String], config: &AppConfig) -> anyhow::Result<()> {
    let command = Command::parse(args)?;
    debug!(?command, "Parsed command");

    for line in command.run(config)? {
        println!("{line}");
    }
    Ok(())
}
