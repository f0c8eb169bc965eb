//! Game configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_solo_core::{MarkSymbols, RandomMoveSource};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for the human's marks.
    #[serde(default = "default_player_symbol")]
    player_symbol: char,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Clear the terminal before each round.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Fixed seed for the computer's moves; seeded from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_player_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_symbol: default_player_symbol(),
            computer_symbol: default_computer_symbol(),
            clear_screen: default_clear_screen(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both symbols are visible and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(ConfigError::new("Mark symbols must not be whitespace"));
        }
        if self.player_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Player and computer share the symbol '{}'",
                self.player_symbol
            )));
        }
        Ok(())
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Sets whether the screen is cleared between rounds.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Symbols used when drawing the board.
    pub fn symbols(&self) -> MarkSymbols {
        MarkSymbols::new(self.player_symbol, self.computer_symbol)
    }

    /// Builds the computer opponent, seeded once for the whole process.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn computer_source(&self) -> RandomMoveSource {
        match self.seed {
            Some(seed) => RandomMoveSource::with_seed(seed),
            None => RandomMoveSource::new(),
        }
    }
}

/// A game config file that could not be read, parsed or accepted.
///
/// Records where in this crate the problem was detected.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid game config: {message} ({file}:{line})")]
pub struct ConfigError {
    /// What was wrong with the file or its settings.
    pub message: String,
    /// Source file that rejected the config.
    pub file: &'static str,
    /// Line in `file` that rejected the config.
    pub line: u32,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.symbols(), MarkSymbols::new('X', 'O'));
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_full_toml() {
        let config = GameConfig::from_toml(
            "player_symbol = \"A\"\ncomputer_symbol = \"B\"\nclear_screen = false\nseed = 42\n",
        )
        .unwrap();
        assert_eq!(config.symbols(), MarkSymbols::new('A', 'B'));
        assert!(!*config.clear_screen());
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = GameConfig::from_toml("player_symbol = \"O\"").unwrap_err();
        assert!(err.message.contains("share the symbol 'O'"));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let err = GameConfig::from_toml("computer_symbol = \" \"").unwrap_err();
        assert!(err.message.contains("whitespace"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/nonexistent/tictactoe.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_error_names_rejecting_location() {
        let err = GameConfig::from_toml("player_symbol = \"O\"").unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(err.line > 0);
        assert_eq!(
            err.to_string(),
            format!(
                "Invalid game config: Player and computer share the symbol 'O' ({}:{})",
                err.file, err.line
            )
        );
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_seed(Some(3))
            .with_seed(None)
            .with_clear_screen(false);
        assert_eq!(*config.seed(), Some(3));
        assert!(!*config.clear_screen());
    }
}
