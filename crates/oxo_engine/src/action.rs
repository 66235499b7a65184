//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated
//! against a state before they are applied, and recorded for replay.

use super::{Coord, Phase, Player};
use serde::{Deserialize, Serialize};

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the mark.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord.label())
    }
}

/// Reason a move was rejected. The game state is never changed by a rejected move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Moves are only accepted while the game is in progress.
    #[display("Game is not in progress ({})", _0)]
    GameNotInProgress(Phase),

    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The mover is not the player whose turn it is.
    #[display("It's {}'s turn, not {}'s", expected, got)]
    WrongPlayer {
        /// Player whose turn it is.
        expected: Player,
        /// Player who tried to move.
        got: Player,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
