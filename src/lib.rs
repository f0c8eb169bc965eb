//! Console tic-tac-toe: one human against a computer that moves at random.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_solo_core`): board, rules, move sources, round state machine
//! - **Console**: line input and text output collaborators
//! - **Human**: the console-backed move source
//! - **Session**: repeated rounds with running scores
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_solo::{Console, GameConfig, Session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let session = Session::new(Console::stdio(), config.computer_source(), &config);
//! let stats = session.run()?;
//! println!("{} rounds", stats.rounds_played());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod human;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::{Console, InputProvider, OutputSink};
pub use human::HumanMoveSource;
pub use session::Session;

pub use tictactoe_solo_core::{
    Board, BoardError, Cell, InputError, Mark, MarkSymbols, Move, MoveSource, RandomMoveSource,
    Round, RoundError, RoundOutcome, RoundReport, RoundState, ScriptedMoveSource, SessionStats,
};
