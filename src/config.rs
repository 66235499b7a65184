//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::{Engine, GameConfig, Mode, Player, SeededSource};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session. Every field has a default, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Player who moves first.
    first_mover: Player,

    /// Friend or bot.
    mode: Mode,

    /// Symbol the bot plays in bot mode.
    bot_player: Player,

    /// Pause before the bot moves, in milliseconds.
    bot_delay_ms: u64,

    /// Seed for the bot; random when absent.
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_mover: Player::X,
            mode: Mode::HumanVsHuman,
            bot_player: Player::O,
            bot_delay_ms: 500,
            seed: None,
        }
    }
}

/// Per-run values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Player who moves first.
    pub first_mover: Option<Player>,
    /// Friend or bot.
    pub mode: Option<Mode>,
    /// Symbol the bot plays.
    pub bot_player: Option<Player>,
    /// Bot delay in milliseconds.
    pub bot_delay_ms: Option<u64>,
    /// Bot seed.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, first = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(first_mover) = overrides.first_mover {
            self.first_mover = first_mover;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(bot_player) = overrides.bot_player {
            self.bot_player = bot_player;
        }
        if let Some(bot_delay_ms) = overrides.bot_delay_ms {
            self.bot_delay_ms = bot_delay_ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Game settings derived from this configuration.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.first_mover, self.mode).with_bot_player(self.bot_player)
    }

    /// Bot delay as a duration.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Builds an engine seeded from the configuration.
    #[instrument(skip(self))]
    pub fn engine(&self) -> Engine<SeededSource> {
        let engine = match self.seed {
            Some(seed) => Engine::seeded(seed),
            None => Engine::from_entropy(),
        };
        info!(seed = engine.rng().seed(), "Bot random source ready");
        engine
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("mode = \"bot\"\nfirst_mover = \"O\"\nseed = 9\n").unwrap();
        assert_eq!(*config.mode(), Mode::HumanVsBot);
        assert_eq!(*config.first_mover(), Player::O);
        assert_eq!(*config.bot_player(), Player::O);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.bot_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_lowercase_players() {
        let config = AppConfig::from_toml("first_mover = \"o\"\nbot_player = \"x\"\n").unwrap();
        assert_eq!(*config.first_mover(), Player::O);
        assert_eq!(*config.bot_player(), Player::X);
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = AppConfig::from_toml("mode = \"solitaire\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            mode: Some(Mode::HumanVsBot),
            bot_player: Some(Player::X),
            bot_delay_ms: Some(0),
            ..Default::default()
        };
        let config = AppConfig::default().with_overrides(&overrides);
        assert_eq!(config.game_config().bot_player(), Some(Player::X));
        assert_eq!(config.bot_delay(), Duration::ZERO);
        assert_eq!(*config.first_mover(), Player::X);
    }
}
