//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. They hold no state and accept any
//! board, including ones no alternating game could reach.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_won};
