//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use oxo_engine::{Coord, SIZE};

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells in reading order.
pub fn digit_cell(key: KeyCode) -> Option<Coord> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Coord::from_index(d as usize - 1)),
        _ => None,
    }
}
