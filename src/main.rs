//! tictactoe - play tic-tac-toe against a random computer opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_solo::{Cli, Console, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    info!(?config, "Starting tic-tac-toe session");

    let session = Session::new(Console::stdio(), config.computer_source(), &config);
    let stats = session.run().context("Session ended abnormally")?;
    info!(?stats, "Exiting");

    Ok(())
}

/// Logs go to stderr so the game transcript on stdout stays readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
