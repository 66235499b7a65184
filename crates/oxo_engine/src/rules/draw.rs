//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().is_empty()
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_win(board).is_none()
}
