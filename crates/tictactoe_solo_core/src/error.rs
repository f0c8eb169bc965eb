//! Error taxonomy for board operations and round play.

use derive_more::{Display, Error, From};

/// Error raised by board placement and lookup.
///
/// Coordinates are always zero-based, matching [`Board::place`]. They are
/// signed so that a position typed as `0` or below can be reported as-is
/// after conversion.
///
/// [`Board::place`]: crate::Board::place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..3` (zero-based).
    #[display("Position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Zero-based row that was requested.
        row: i64,
        /// Zero-based column that was requested.
        col: i64,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Zero-based row of the occupied cell.
        row: i64,
        /// Zero-based column of the occupied cell.
        col: i64,
    },

    /// A move was requested from a board with no empty cells.
    #[display("No empty cells remain on the board")]
    NoEmptyCells,
}

impl BoardError {
    /// Out-of-bounds error for unsigned zero-based indices.
    pub(crate) fn out_of_bounds(row: usize, col: usize) -> Self {
        BoardError::OutOfBounds {
            row: to_signed(row),
            col: to_signed(col),
        }
    }

    /// Occupied-cell error for unsigned zero-based indices.
    pub(crate) fn cell_occupied(row: usize, col: usize) -> Self {
        BoardError::CellOccupied {
            row: to_signed(row),
            col: to_signed(col),
        }
    }
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Error raised by the console collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input reached end of stream.
    #[display("Input closed")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {message}")]
    Io {
        /// Underlying failure description.
        message: String,
    },
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Error that ends a round before it reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RoundError {
    /// A board operation failed where the state machine forbids it.
    #[display("Board error: {_0}")]
    Board(BoardError),

    /// The move source could not obtain input.
    #[display("Input error: {_0}")]
    Input(InputError),
}

impl RoundError {
    /// Returns true when the round ended because input was exhausted.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, RoundError::Input(InputError::Closed))
    }
}
