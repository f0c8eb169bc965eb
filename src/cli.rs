//! Command-line interface for tictactoe.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a computer that moves at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep previous rounds on screen instead of clearing it
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Resolves the effective configuration: file (if any), then flags.
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let clear_screen = *config.clear_screen() && !self.no_clear;
        Ok(config.with_seed(self.seed).with_clear_screen(clear_screen))
    }
}
