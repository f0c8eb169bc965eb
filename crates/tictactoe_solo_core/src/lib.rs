//! Pure tic-tac-toe logic for a single human playing a random computer.
//!
//! This crate holds everything that does not touch a terminal:
//!
//! - **Board**: the 3x3 grid of cells and its placement rules
//! - **Rules**: win detection over the 8 lines and full-board detection
//! - **Move sources**: the [`MoveSource`] seam plus a uniformly random
//!   opponent and a scripted source for replays
//! - **Round**: the state machine that alternates turns until a round finishes
//! - **Stats**: score keeping across rounds

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod round;
mod source;
mod stats;
mod types;

pub mod rules;

pub use action::Move;
pub use error::{BoardError, InputError, RoundError};
pub use round::{Round, RoundOutcome, RoundReport, RoundState};
pub use source::{MoveSource, RandomMoveSource, ScriptedMoveSource};
pub use stats::SessionStats;
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Mark, MarkSymbols};
