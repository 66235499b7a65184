//! oxo - tic-tac-toe against a friend or a random bot.
//!
//! The game rules live in [`oxo_engine`]; this crate holds the
//! front ends that drive it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Text**: line-oriented front end for pipes and scripts
//! - **TUI**: ratatui front end with settings screen and timed bot
//!
//! # Example
//!
//! ```
//! use oxo::{AppConfig, TextFrontEnd};
//!
//! let config = AppConfig::default();
//! let mut front = TextFrontEnd::new(config.engine(), config.game_config());
//! let mut out = Vec::new();
//! front.run("start\n1 1\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("To move: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod text;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ConfigOverrides};

// Crate-level exports - Text front end
pub use text::{TextCommand, TextFrontEnd, parse_line};

// Crate-level exports - Engine types
pub use oxo_engine::{
    Board, Cell, Command, Coord, Engine, EngineError, GameConfig, GameState, Mode, Move,
    MoveError, Phase, Player, Snapshot,
};
