//! Message-passing game engine.
//!
//! Front ends send discrete [`Command`]s and receive immutable
//! [`Snapshot`]s back. The engine exclusively owns the game state
//! and the bot's random source; nothing outside can mutate either.

use super::bot::{BotError, bot_move, is_bots_turn};
use super::random::{RandomSource, SeededSource};
use super::state::GameState;
use super::{GameConfig, MoveError, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Requests a front end can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a fresh game with the given settings.
    Start(GameConfig),
    /// Place the current player's mark.
    Move {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Let the bot take its turn.
    BotMove,
    /// Start a fresh game with the last settings.
    Restart,
}

/// Immutable view of the engine handed to front ends for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Settings of the current game, if one was ever started.
    config: Option<GameConfig>,
    /// The game state.
    state: GameState,
    /// Whose turn it is or the result, ready to display.
    status: String,
    #[getter(skip)]
    bot_to_move: bool,
}

impl Snapshot {
    /// True when the front end should schedule a bot move.
    pub fn bot_to_move(&self) -> bool {
        self.bot_to_move
    }
}

/// Reason an engine command was rejected. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The move itself was illegal.
    #[display("{}", _0)]
    Move(MoveError),
    /// The bot could not move.
    #[display("{}", _0)]
    Bot(BotError),
    /// Restart requested before any game was started.
    #[display("No game has been configured yet")]
    NotConfigured,
    /// A human tried to move while the bot is to play.
    #[display("It's the bot's turn ({})", _0)]
    NotHumansTurn(Player),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Move(e) => Some(e),
            EngineError::Bot(e) => Some(e),
            EngineError::NotConfigured | EngineError::NotHumansTurn(_) => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(err: MoveError) -> Self {
        EngineError::Move(err)
    }
}

impl From<BotError> for EngineError {
    fn from(err: BotError) -> Self {
        EngineError::Bot(err)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct Engine<R = SeededSource> {
    config: Option<GameConfig>,
    state: GameState,
    rng: R,
}

impl Engine<SeededSource> {
    /// Creates an engine whose bot is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSource::new(seed))
    }

    /// Creates an engine with a randomly seeded bot.
    pub fn from_entropy() -> Self {
        Self::new(SeededSource::from_entropy())
    }
}

impl<R: RandomSource> Engine<R> {
    /// Creates an engine with no game started.
    pub fn new(rng: R) -> Self {
        Self {
            config: None,
            state: GameState::not_started(),
            rng,
        }
    }

    /// Returns the bot's random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let bot_to_move = self
            .config
            .as_ref()
            .is_some_and(|config| is_bots_turn(&self.state, config));
        Snapshot {
            config: self.config,
            state: self.state.clone(),
            status: self.state.status_line(),
            bot_to_move,
        }
    }

    /// Dispatches a command.
    pub fn handle(&mut self, command: Command) -> Result<Snapshot, EngineError> {
        match command {
            Command::Start(config) => Ok(self.start_game(config)),
            Command::Move { row, col } => self.apply_move(row, col),
            Command::BotMove => self.play_bot(),
            Command::Restart => self.restart(),
        }
    }

    /// Starts a fresh game, discarding any game in progress.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, config: GameConfig) -> Snapshot {
        info!(first = %config.first_mover(), mode = %config.mode(), "Starting game");
        self.config = Some(config);
        self.state = GameState::start(config.first_mover());
        self.snapshot()
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// In bot mode a human cannot move for the bot.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Snapshot, EngineError> {
        if let Some(config) = &self.config
            && is_bots_turn(&self.state, config)
        {
            warn!("Human move while bot is to play");
            return Err(EngineError::NotHumansTurn(self.state.current_player()));
        }

        let player = self.state.current_player();
        self.state = self.state.apply_move(row, col, player)?;
        info!(%player, row, col, phase = %self.state.phase(), "Move accepted");
        Ok(self.snapshot())
    }

    /// Lets the bot choose and play its move.
    #[instrument(skip(self))]
    pub fn play_bot(&mut self) -> Result<Snapshot, EngineError> {
        let config = self
            .config
            .ok_or(BotError::GameNotInProgress(self.state.phase()))?;
        let coord = bot_move(&self.state, &config, &mut self.rng)?;
        let player = self.state.current_player();
        self.state = self.state.apply_move(coord.row(), coord.col(), player)?;
        info!(%player, %coord, phase = %self.state.phase(), "Bot moved");
        Ok(self.snapshot())
    }

    /// Starts a fresh game with the last settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<Snapshot, EngineError> {
        let config = self.config.ok_or(EngineError::NotConfigured)?;
        Ok(self.start_game(config))
    }
}
