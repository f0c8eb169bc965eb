//! Score keeping across rounds.

use crate::round::RoundOutcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Running totals for one session. Counters only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed rounds.
    rounds_played: u32,
    /// Rounds won by the human.
    player_wins: u32,
    /// Rounds won by the computer.
    computer_wins: u32,
    /// Rounds that filled the board without a line.
    ties: u32,
}

impl SessionStats {
    /// Creates zeroed stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: RoundOutcome) {
        self.rounds_played += 1;
        match outcome {
            RoundOutcome::PlayerWin => self.player_wins += 1,
            RoundOutcome::ComputerWin => self.computer_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
        info!(
            rounds = self.rounds_played,
            player = self.player_wins,
            computer = self.computer_wins,
            ties = self.ties,
            "Score updated"
        );
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rounds played: {}", self.rounds_played)?;
        writeln!(f, "Player Score: {}", self.player_wins)?;
        writeln!(f, "Computer Score: {}", self.computer_wins)?;
        write!(f, "Ties: {}", self.ties)
    }
}
