//! Application state and key handling.
//!
//! The app never touches game state directly: it sends commands to the
//! engine and keeps the latest snapshot for rendering.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use oxo_engine::{Coord, Engine, EngineError, GameConfig, Mode, Player, RandomSource, Snapshot};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest wait between redraws when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Text shown by the About toggle.
pub const ABOUT: &str = "oxo: tic-tac-toe against a friend or a random bot";

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choose first mover and opponent.
    Settings,
    /// The board.
    Game,
}

/// Main application state.
pub struct App<R> {
    engine: Engine<R>,
    snapshot: Snapshot,
    screen: Screen,
    draft: GameConfig,
    cursor: Coord,
    message: Option<String>,
    bot_due: Option<Instant>,
    bot_delay: Duration,
    show_about: bool,
    should_quit: bool,
}

impl<R: RandomSource> App<R> {
    /// Creates the app on the settings screen with `draft` preselected.
    pub fn new(engine: Engine<R>, draft: GameConfig, bot_delay: Duration) -> Self {
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            screen: Screen::Settings,
            draft,
            cursor: Coord::ALL[4],
            message: None,
            bot_due: None,
            bot_delay,
            show_about: false,
            should_quit: false,
        }
    }
}

impl<R> App<R> {
    /// Latest engine snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Settings being edited.
    pub fn draft(&self) -> &GameConfig {
        &self.draft
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Transient message, e.g. why a move was rejected.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// When the pending bot move fires.
    pub fn bot_due(&self) -> Option<Instant> {
        self.bot_due
    }

    /// Whether the About line is visible.
    pub fn show_about(&self) -> bool {
        self.show_about
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long the event loop may block before the next scheduled action.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.bot_due
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now).min(IDLE_POLL))
    }
}

impl<R: RandomSource> App<R> {
    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        debug!(?key, screen = ?self.screen, "Key pressed");
        match self.screen {
            Screen::Settings => self.handle_settings_key(key, now),
            Screen::Game => self.handle_game_key(key, now),
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('x') | KeyCode::Char('X') => self.draft = self.draft.with_first_mover(Player::X),
            KeyCode::Char('o') | KeyCode::Char('O') => self.draft = self.draft.with_first_mover(Player::O),
            KeyCode::Char('f') => self.draft = self.draft.with_mode(Mode::HumanVsHuman),
            KeyCode::Char('b') => self.draft = self.draft.with_mode(Mode::HumanVsBot),
            KeyCode::Enter => {
                info!(config = ?self.draft, "Starting game from settings");
                self.screen = Screen::Game;
                self.cursor = Coord::ALL[4];
                let snapshot = self.engine.start_game(self.draft);
                self.accept(Ok(snapshot), now);
            }
            KeyCode::Esc if self.snapshot.config().is_some() => {
                self.screen = Screen::Game;
                self.bot_due = self.snapshot.bot_to_move().then(|| now + self.bot_delay);
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode, now: Instant) {
        let finished = self.snapshot.state().phase().is_terminal();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => self.show_about = !self.show_about,
            KeyCode::Char('s') => {
                self.bot_due = None;
                self.screen = Screen::Settings;
            }
            KeyCode::Char('n') => self.restart(now),
            KeyCode::Enter | KeyCode::Char(' ') if finished => self.restart(now),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, now),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(coord) = digit_cell(other) {
                    self.cursor = coord;
                    self.place(coord, now);
                }
            }
        }
    }

    fn place(&mut self, coord: Coord, now: Instant) {
        let result = self.engine.apply_move(coord.row(), coord.col());
        self.accept(result, now);
    }

    fn restart(&mut self, now: Instant) {
        let result = self.engine.restart();
        self.accept(result, now);
    }

    /// Runs the bot if its move is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.bot_due
            && now >= due
        {
            self.bot_due = None;
            let result = self.engine.play_bot();
            self.accept(result, now);
        }
    }

    fn accept(&mut self, result: Result<Snapshot, EngineError>, now: Instant) {
        match result {
            Ok(snapshot) => {
                self.bot_due = snapshot.bot_to_move().then(|| now + self.bot_delay);
                self.message = None;
                self.snapshot = snapshot;
            }
            Err(err) => {
                warn!(error = %err, "Command rejected");
                self.message = Some(err.to_string());
            }
        }
    }
}
