//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Owner of a mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// The human player (moves first).
    Player,
    /// The random computer opponent.
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Characters used to draw each side's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSymbols {
    /// Symbol for the human player.
    pub player: char,
    /// Symbol for the computer.
    pub computer: char,
}

impl MarkSymbols {
    /// Creates a symbol set.
    pub fn new(player: char, computer: char) -> Self {
        Self { player, computer }
    }

    /// Returns the symbol drawn for a cell.
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Occupied(Mark::Player) => self.player,
            Cell::Occupied(Mark::Computer) => self.computer,
        }
    }
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored flat in row-major order, `index = row * 3 + col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns the cell at (row, col).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let mv = Move::new(row, col)?;
        Ok(self.cells[mv.index()])
    }

    /// Places a mark at (row, col).
    ///
    /// Fails without touching the board if the indices are outside the grid
    /// or the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let mv = Move::new(row, col)?;
        self.apply(mv, mark)
    }

    /// Places a mark at an already bounds-checked move.
    pub fn apply(&mut self, mv: Move, mark: Mark) -> Result<(), BoardError> {
        let cell = &mut self.cells[mv.index()];
        if !cell.is_empty() {
            return Err(BoardError::cell_occupied(mv.row(), mv.col()));
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks if the cell targeted by a move is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cells[mv.index()].is_empty()
    }

    /// Number of empty cells, in `0..=9`.
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty_cell_count() == 0
    }

    /// Moves targeting every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .filter_map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board for the console.
    ///
    /// Each cell is drawn as ` c `, cells are joined by `|` and rows by a
    /// `---|---|---` divider.
    pub fn render(&self, symbols: &MarkSymbols) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| {
                row.iter()
                    .map(|&cell| format!(" {} ", symbols.symbol(cell)))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n---|---|---\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
