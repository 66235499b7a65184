//! Game phases and mode configuration.

use super::Player;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled with no winner.
    Draw,
}

impl Phase {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }

    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "Not started"),
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won(player) => write!(f, "{} won", player),
            Phase::Draw => write!(f, "Draw"),
        }
    }
}

/// Who sits opposite the human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(alias = "friend")]
    #[strum(to_string = "friend", serialize = "hvh", serialize = "HumanVsHuman")]
    HumanVsHuman,
    /// A human plays the random bot.
    #[serde(alias = "bot")]
    #[strum(to_string = "bot", serialize = "hvb", serialize = "HumanVsBot")]
    HumanVsBot,
}

/// Settings chosen before a game starts; fixed for the duration of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    first_mover: Player,
    mode: Mode,
    bot_player: Player,
}

impl GameConfig {
    /// Creates a configuration. In bot mode the bot plays `O`.
    pub fn new(first_mover: Player, mode: Mode) -> Self {
        Self {
            first_mover,
            mode,
            bot_player: Player::O,
        }
    }

    /// Sets who moves first.
    pub fn with_first_mover(mut self, first_mover: Player) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Sets the mode, keeping the bot's symbol for bot games.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets which symbol the bot plays.
    pub fn with_bot_player(mut self, bot_player: Player) -> Self {
        self.bot_player = bot_player;
        self
    }

    /// Player who moves first.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Symbol the bot plays, if this is a bot game.
    pub fn bot_player(&self) -> Option<Player> {
        match self.mode {
            Mode::HumanVsBot => Some(self.bot_player),
            Mode::HumanVsHuman => None,
        }
    }

    /// Returns true if `player` is controlled by the bot.
    pub fn is_bot(&self, player: Player) -> bool {
        self.bot_player() == Some(player)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Player::X, Mode::HumanVsHuman)
    }
}
