//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from state
//! so they can be reused by contracts and the bot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_win};
