//! Human player that types row and column numbers at the console.

use crate::console::{InputProvider, OutputSink};
use tictactoe_solo_core::{Board, MarkSymbols, Move, MoveSource, RoundError};
use tracing::{debug, instrument};

/// Human move source.
///
/// Shows the board, asks for a 1-indexed row and column, and keeps asking
/// until the answer names an empty cell on the board.
pub struct HumanMoveSource<'a, IO> {
    io: &'a mut IO,
    symbols: MarkSymbols,
}

impl<'a, IO> HumanMoveSource<'a, IO>
where
    IO: InputProvider + OutputSink,
{
    /// Creates a human source borrowing the console for one round.
    pub fn new(io: &'a mut IO, symbols: MarkSymbols) -> Self {
        Self { io, symbols }
    }

    /// Asks for one row/column pair.
    ///
    /// Returns `None` after reporting an unusable answer.
    fn request_move(&mut self, board: &Board) -> Result<Option<Move>, RoundError> {
        self.io.write("Enter row # (1-3): ")?;
        let row = self.io.read_integer()?;
        self.io.write("Enter column # (1-3): ")?;
        let col = self.io.read_integer()?;

        let checked = match (row, col) {
            (Some(row), Some(col)) => match Move::from_one_based(row, col) {
                Ok(mv) if board.is_empty(mv) => return Ok(Some(mv)),
                Ok(mv) => format!("{mv} is occupied"),
                Err(e) => e.to_string(),
            },
            _ => "input is not a number".to_string(),
        };
        debug!(reason = %checked, "Rejected human move");
        self.io.write_line("Invalid move!")?;
        Ok(None)
    }
}

impl<IO> MoveSource for HumanMoveSource<'_, IO>
where
    IO: InputProvider + OutputSink,
{
    #[instrument(skip_all)]
    fn produce_move(&mut self, board: &Board) -> Result<Move, RoundError> {
        self.io.write_line(&board.render(&self.symbols))?;
        loop {
            if let Some(mv) = self.request_move(board)? {
                debug!(%mv, "Human chose cell");
                return Ok(mv);
            }
        }
    }

    fn name(&self) -> &str {
        "Player"
    }
}
