//! Game state and the pure move transition.

use super::action::{Move, MoveError};
use super::contracts::{Contract, InBounds, MoveContract, PhaseIsInProgress};
use super::rules::{check_win, is_full};
use super::{Board, Cell, Phase, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Values are never mutated in place by the rules: [`GameState::apply_move`]
/// returns the next state and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// A state before any game has been started. Every move is rejected.
    pub fn not_started() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::NotStarted,
            history: Vec::new(),
        }
    }

    /// A fresh game with `first_mover` to play.
    #[instrument]
    pub fn start(first_mover: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_mover,
            phase: Phase::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `player`'s mark at (`row`, `col`) and evaluates the result.
    ///
    /// Checks run in order: phase, bounds, occupancy, turn. The first
    /// failure is returned and `self` is unchanged.
    #[instrument(skip(self), fields(phase = %self.phase, to_move = %self.current_player))]
    pub fn apply_move(&self, row: usize, col: usize, player: Player) -> Result<GameState, MoveError> {
        PhaseIsInProgress::check(self)?;
        let coord = InBounds::check(row, col)?;
        let action = Move::new(player, coord);
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board.set(coord, Cell::Occupied(player));
        next.history.push(action);

        if let Some(winner) = check_win(&next.board) {
            info!(%winner, "Game won");
            next.phase = Phase::Won(winner);
        } else if is_full(&next.board) {
            info!("Game drawn");
            next.phase = Phase::Draw;
        } else {
            next.current_player = player.opponent();
            debug!(next = %next.current_player, "Turn passes");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Replays `moves` from a fresh game started by `first_mover`.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_mover: Player, moves: &[Move]) -> Result<GameState, MoveError> {
        moves.iter().try_fold(GameState::start(first_mover), |state, action| {
            state.apply_move(action.coord.row(), action.coord.col(), action.player)
        })
    }

    /// One-line description for display: whose turn it is or the result.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::NotStarted => "Choose settings and start a new game".to_string(),
            Phase::InProgress if self.history.is_empty() => {
                format!("First to move: {}", self.current_player)
            }
            Phase::InProgress => format!("To move: {}", self.current_player),
            Phase::Won(_) | Phase::Draw => self.phase.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::not_started()
    }
}

/// Applies a move to `state`, returning the next state or the rejection.
pub fn apply_move(state: &GameState, row: usize, col: usize, player: Player) -> Result<GameState, MoveError> {
    state.apply_move(row, col, player)
}
