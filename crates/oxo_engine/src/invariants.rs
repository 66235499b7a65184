//! State invariants checked after every accepted move in debug builds.

use super::state::GameState;
use super::Player;

/// A property that must hold for every reachable state.
pub trait Invariant<S> {
    /// Returns true if the invariant holds.
    fn holds(state: &S) -> bool;

    /// Describes the invariant.
    fn description() -> &'static str;
}

/// The first mover has as many marks as the opponent, or one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let first = state
            .history()
            .first()
            .map_or(state.current_player(), |m| m.player);
        let board = state.board();
        matches!(board.count(first).checked_sub(board.count(first.opponent())), Some(0 | 1))
    }

    fn description() -> &'static str {
        "First mover leads the opponent by zero or one marks"
    }
}

/// Every recorded move is on the board and every mark was recorded.
pub struct HistoryMatchesBoard;

impl Invariant<GameState> for HistoryMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.board().filled_count()
            && state
                .history()
                .iter()
                .all(|m| state.board().get(m.coord).player() == Some(m.player))
    }

    fn description() -> &'static str {
        "History is consistent with the board"
    }
}

/// Players alternate, and the player to move follows the last mover.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let alternates = history.windows(2).all(|w| w[0].player != w[1].player);
        let next_ok = match history.last() {
            Some(last) if state.phase().is_in_progress() => {
                state.current_player() == last.player.opponent()
            }
            _ => true,
        };
        alternates && next_ok
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// Runs every invariant, collecting descriptions of the ones that fail.
pub fn check_invariants(state: &GameState) -> Result<(), Vec<&'static str>> {
    let mut violations = Vec::new();
    if !BalancedMarks::holds(state) {
        violations.push(BalancedMarks::description());
    }
    if !HistoryMatchesBoard::holds(state) {
        violations.push(HistoryMatchesBoard::description());
    }
    if !AlternatingTurns::holds(state) {
        violations.push(AlternatingTurns::description());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
