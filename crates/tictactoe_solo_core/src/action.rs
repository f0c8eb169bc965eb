//! Move type addressing a single cell.

use crate::error::BoardError;
use crate::types::{BOARD_SIZE, CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A zero-based (row, col) pair inside the 3x3 grid.
///
/// Construction checks bounds, including when deserialized from a
/// `[row, col]` pair; whether the target cell is still empty is checked
/// when the move is applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::out_of_bounds(row, col));
        }
        Ok(Self { row, col })
    }

    /// Creates a move from the 1-indexed numbers a person types.
    ///
    /// Errors report the converted zero-based coordinates, like every
    /// other [`BoardError`].
    #[instrument]
    pub fn from_one_based(row: i64, col: i64) -> Result<Self, BoardError> {
        let (row, col) = (row.saturating_sub(1), col.saturating_sub(1));
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => {
                Self::new(r, c).map_err(|_| BoardError::OutOfBounds { row, col })
            }
            _ => Err(BoardError::OutOfBounds { row, col }),
        }
    }

    /// Creates a move from a flat row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Flat row-major index of the target cell.
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}
