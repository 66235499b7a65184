//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, move)} apply {Q(before, after)}`.

use super::action::{Move, MoveError};
use super::invariants::check_invariants;
use super::state::GameState;
use super::Coord;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must be in progress.
pub struct PhaseIsInProgress;

impl PhaseIsInProgress {
    /// Fails with [`MoveError::GameNotInProgress`] outside `InProgress`.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.phase().is_in_progress() {
            Ok(())
        } else {
            Err(MoveError::GameNotInProgress(state.phase()))
        }
    }
}

/// Precondition: the requested cell must be on the board.
pub struct InBounds;

impl InBounds {
    /// Converts raw indices into a [`Coord`].
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Coord, MoveError> {
        Coord::new(row, col).ok_or(MoveError::OutOfRange { row, col })
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(action.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(action.coord))
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] if someone else is to move.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        if action.player == state.current_player() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer {
                expected: state.current_player(),
                got: action.player,
            })
        }
    }
}

/// Composite precondition: game running, cell empty, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        PhaseIsInProgress::check(state)?;
        CellIsEmpty::check(action, state)?;
        PlayersTurn::check(action, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Postconditions:
/// - mark counts stay balanced
/// - history agrees with the board
/// - players alternate
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state).inspect_err(|e| warn!(%action, error = %e, "Move rejected"))
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move must be recorded".to_string(),
            ));
        }
        check_invariants(after).map_err(|violations| {
            warn!(?violations, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", violations.join("; ")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Phase, Player};

    fn center(player: Player) -> Move {
        Move::new(player, Coord::at(1, 1))
    }

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameState::start(Player::X);
        assert!(MoveContract::pre(&state, &center(Player::X)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = GameState::start(Player::X).apply_move(1, 1, Player::X).unwrap();
        assert!(matches!(
            MoveContract::pre(&state, &center(Player::O)),
            Err(MoveError::CellOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = GameState::start(Player::X);
        assert!(matches!(
            MoveContract::pre(&state, &center(Player::O)),
            Err(MoveError::WrongPlayer { .. })
        ));
    }

    #[test]
    fn test_precondition_terminal_phase() {
        let mut state = GameState::start(Player::X);
        state.phase = Phase::Draw;
        assert_eq!(
            MoveContract::pre(&state, &center(Player::X)),
            Err(MoveError::GameNotInProgress(Phase::Draw))
        );
    }

    #[test]
    fn test_in_bounds() {
        assert_eq!(InBounds::check(2, 1), Ok(Coord::at(2, 1)));
        assert_eq!(InBounds::check(0, 3), Err(MoveError::OutOfRange { row: 0, col: 3 }));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::start(Player::X);
        let after = before.apply_move(1, 1, Player::X).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::start(Player::X);
        let mut after = before.apply_move(1, 1, Player::X).unwrap();
        after.board.set(Coord::at(0, 0), Cell::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
