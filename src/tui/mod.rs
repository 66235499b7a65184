//! Terminal UI front end.

mod app;
mod input;
mod ui;

pub use app::{ABOUT, App, Screen};
pub use input::{digit_cell, move_cursor};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use oxo_engine::RandomSource;
use ratatui::DefaultTerminal;
use std::time::Instant;
use tracing::{info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting oxo TUI");

    let mut app = App::new(config.engine(), config.game_config(), config.bot_delay());

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app);
    ratatui::restore();

    info!("TUI closed");
    result
}

/// Draws, waits for a key or the next scheduled bot move, repeats.
fn run_loop<R: RandomSource>(terminal: &mut DefaultTerminal, app: &mut App<R>) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }

        app.tick(Instant::now());
    }
}
