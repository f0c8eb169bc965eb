//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // P C P / P C C / C P P
        let layout = [
            Mark::Player,
            Mark::Computer,
            Mark::Player,
            Mark::Player,
            Mark::Computer,
            Mark::Computer,
            Mark::Computer,
            Mark::Player,
            Mark::Player,
        ];
        for (i, mark) in layout.into_iter().enumerate() {
            board.place(i / 3, i % 3, mark).unwrap();
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(0, col, Mark::Player).unwrap();
        }
        for (row, col) in [(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            let mark = if (row + col) % 2 == 0 {
                Mark::Computer
            } else {
                Mark::Player
            };
            board.place(row, col, mark).unwrap();
        }

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
