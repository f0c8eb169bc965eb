//! Move sources: anything that can pick the next move for one side.

use crate::action::Move;
use crate::error::{BoardError, InputError, RoundError};
use crate::types::Board;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Trait for sides that can produce moves.
pub trait MoveSource {
    /// Produces the next move for the given board.
    ///
    /// The returned move must target an empty cell.
    fn produce_move(&mut self, board: &Board) -> Result<Move, RoundError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Computer opponent that picks uniformly among empty cells.
///
/// The generator is seeded once when the source is created and reused for
/// every move of every round.
#[derive(Debug, Clone)]
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    /// Creates a source seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic source from a fixed seed.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoveSource {
    /// Fails with [`BoardError::NoEmptyCells`] on a full board; callers are
    /// expected to detect the tie before asking.
    #[instrument(skip(self, board), fields(empty = board.empty_cell_count()))]
    fn produce_move(&mut self, board: &Board) -> Result<Move, RoundError> {
        let candidates = board.empty_cells();
        let mv = *candidates
            .choose(&mut self.rng)
            .ok_or(BoardError::NoEmptyCells)?;
        debug!(%mv, "Computer chose cell");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

/// Replays a fixed queue of moves.
///
/// Used to drive rounds deterministically. When the queue runs dry it
/// reports [`InputError::Closed`], the same way exhausted console input does.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoveSource {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedMoveSource {
    /// Creates a source that yields `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Builds a script from zero-based (row, col) pairs.
    pub fn from_cells(
        name: impl Into<String>,
        cells: &[(usize, usize)],
    ) -> Result<Self, BoardError> {
        let moves = cells
            .iter()
            .map(|&(row, col)| Move::new(row, col))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, moves))
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoveSource {
    #[instrument(skip(self, board), fields(source = %self.name))]
    fn produce_move(&mut self, board: &Board) -> Result<Move, RoundError> {
        let mv = self.moves.pop_front().ok_or(InputError::Closed)?;
        if !board.is_empty(mv) {
            return Err(BoardError::cell_occupied(mv.row(), mv.col()).into());
        }
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
