//! oxo engine - pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, cells, coordinates, players
//! - **Rules**: pure win/draw evaluation
//! - **State**: immutable transitions guarded by contracts
//! - **Bot**: uniform random moves from an injectable source
//! - **Engine**: message-passing owner of a single game
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Engine, GameConfig, Mode, Phase, Player};
//!
//! let mut engine = Engine::seeded(7);
//! engine.start_game(GameConfig::new(Player::X, Mode::HumanVsHuman));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, col).unwrap();
//! }
//! assert_eq!(engine.snapshot().state().phase(), Phase::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod random;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use bot::{BotError, bot_move, is_bots_turn};
pub use contracts::{CellIsEmpty, Contract, InBounds, LegalMove, MoveContract, PhaseIsInProgress, PlayersTurn};
pub use engine::{Command, Engine, EngineError, Snapshot};
pub use invariants::{AlternatingTurns, BalancedMarks, HistoryMatchesBoard, Invariant, check_invariants};
pub use phases::{GameConfig, Mode, Phase};
pub use random::{RandomSource, ScriptedSource, SeededSource};
pub use rules::{check_win, is_draw, is_full};
pub use state::{GameState, apply_move};
pub use types::{Board, BoardParseError, Cell, Coord, Player, SIZE};
