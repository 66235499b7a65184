//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Player};
use tracing::instrument;

/// Winning lines in scan order: rows, columns, then diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first line (in [`LINES`] order) holding
/// three identical marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    })
}
