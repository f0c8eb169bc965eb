//! Round state machine: alternate turns until a win or a full board.

use crate::error::RoundError;
use crate::rules::{has_won, is_full};
use crate::source::MoveSource;
use crate::types::{Board, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// How a finished round ended.
///
/// `Display` yields the message shown to the player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum RoundOutcome {
    /// The human completed a line.
    #[strum(to_string = "YOU WIN!")]
    PlayerWin,
    /// The computer completed a line.
    #[strum(to_string = "YOU LOSE!")]
    ComputerWin,
    /// The board filled with no line completed.
    #[strum(to_string = "IT'S A TIE!")]
    Tie,
}

impl RoundOutcome {
    /// Outcome for a round won by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => RoundOutcome::PlayerWin,
            Mark::Computer => RoundOutcome::ComputerWin,
        }
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// The human moves next.
    AwaitingPlayerMove,
    /// The computer moves next.
    AwaitingComputerMove,
    /// The round is over.
    Finished(RoundOutcome),
}

impl RoundState {
    /// State waiting on `mark` to move.
    fn awaiting(mark: Mark) -> Self {
        match mark {
            Mark::Player => RoundState::AwaitingPlayerMove,
            Mark::Computer => RoundState::AwaitingComputerMove,
        }
    }
}

/// Result of a completed round: the outcome and the final board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct RoundReport {
    /// How the round ended.
    outcome: RoundOutcome,
    /// Board as it stood when the round ended.
    board: Board,
    /// Marks placed during this round.
    moves_played: usize,
}

/// A single round from its starting board to a terminal outcome.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    state: RoundState,
    moves_played: usize,
}

impl Round {
    /// Creates a round on an empty board with the human to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_position(Board::new(), RoundState::AwaitingPlayerMove)
    }

    /// Resumes a round from an arbitrary board and state.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, state: RoundState) -> Self {
        Self {
            board,
            state,
            moves_played: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Marks placed since the round was created or resumed.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Advances the round by one transition.
    ///
    /// A finished round stays finished. A side with no empty cell left to
    /// play ends the round in a tie without consulting its move source.
    #[instrument(skip_all, fields(state = ?self.state))]
    pub fn step(
        &mut self,
        player: &mut dyn MoveSource,
        computer: &mut dyn MoveSource,
    ) -> Result<RoundState, RoundError> {
        self.state = match self.state {
            RoundState::Finished(_) => self.state,
            _ if is_full(&self.board) => {
                debug!("Board full before move, round is a tie");
                RoundState::Finished(RoundOutcome::Tie)
            }
            RoundState::AwaitingPlayerMove => self.take_turn(player, Mark::Player)?,
            RoundState::AwaitingComputerMove => self.take_turn(computer, Mark::Computer)?,
        };
        Ok(self.state)
    }

    /// Runs the round to completion.
    ///
    /// Every non-terminal step places one mark, so the loop ends after at
    /// most nine moves.
    #[instrument(skip_all)]
    pub fn play(
        mut self,
        player: &mut dyn MoveSource,
        computer: &mut dyn MoveSource,
    ) -> Result<RoundReport, RoundError> {
        let outcome = loop {
            if let RoundState::Finished(outcome) = self.state {
                break outcome;
            }
            self.step(player, computer)?;
        };
        info!(%outcome, moves = self.moves_played, "Round finished");
        Ok(RoundReport::new(outcome, self.board, self.moves_played))
    }

    fn take_turn(
        &mut self,
        source: &mut dyn MoveSource,
        mark: Mark,
    ) -> Result<RoundState, RoundError> {
        let mv = source.produce_move(&self.board).inspect_err(|e| {
            if !e.is_input_closed() {
                error!(source = source.name(), error = %e, "Move source failed");
            }
        })?;
        self.board.apply(mv, mark)?;
        self.moves_played += 1;
        debug!(side = %mark, %mv, "Mark placed");

        let next = if has_won(&self.board, mark) {
            RoundState::Finished(RoundOutcome::won_by(mark))
        } else if is_full(&self.board) {
            RoundState::Finished(RoundOutcome::Tie)
        } else {
            RoundState::awaiting(mark.opponent())
        };
        Ok(next)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
