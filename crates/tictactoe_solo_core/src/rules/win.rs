//! Win detection over the 8 lines of the board.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Every line as flat row-major indices, in evaluation order:
/// rows 0-2, columns 0-2, main diagonal, anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark filling the first complete line in [`LINES`] order,
/// or `None` if no line holds three identical marks.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[a] == cells[b] && cells[b] == cells[c] => Some(mark),
        _ => None,
    })
}

/// Checks whether `mark` fills any line, regardless of the other side.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let mark = match ch {
                'P' => Mark::Player,
                'C' => Mark::Computer,
                _ => continue,
            };
            board.place(i / 3, i % 3, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for idx in line {
                board.place(idx / 3, idx % 3, Mark::Computer).unwrap();
            }
            assert_eq!(check_winner(&board), Some(Mark::Computer), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from("P P C . . . . . .");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from("P P . . C . . . C");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        let board = board_from("P C P P C C C P P");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_unreachable_board_reports_first_line() {
        // Both sides hold a row; row 0 is evaluated first.
        let board = board_from("C C C P P P . . .");
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_has_won_ignores_evaluation_order() {
        let board = board_from("C C C P P P . . .");
        assert!(has_won(&board, Mark::Player));
        assert!(has_won(&board, Mark::Computer));
        assert!(!has_won(&board_from("P P C . . . . . ."), Mark::Player));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_from(". . P . P . P . .");
        assert_eq!(check_winner(&board), Some(Mark::Player));
    }
}
