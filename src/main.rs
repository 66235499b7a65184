//! oxo - tic-tac-toe CLI
//!
//! Plays in a terminal UI or over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use oxo::{AppConfig, ConfigOverrides, TextFrontEnd};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { game } => run_tui(cli.config.as_deref(), game),
        Command::Text { game } => run_text(cli.config.as_deref(), game),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn load_config(path: Option<&Path>, game: GameArgs) -> Result<AppConfig> {
    let overrides = ConfigOverrides::from(game);
    let config = AppConfig::load(path).context("Failed to load configuration")?;
    Ok(config.with_overrides(&overrides))
}

/// Run the terminal UI
fn run_tui(path: Option<&Path>, game: GameArgs) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create("oxo_tui.log").context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = load_config(path, game)?;
    info!(?config, "Configuration ready");
    oxo::tui::run_tui(&config)
}

/// Run the line-oriented front end
fn run_text(path: Option<&Path>, game: GameArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(path, game)?;
    info!(?config, "Configuration ready");

    let mut front = TextFrontEnd::new(config.engine(), config.game_config());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    front.run(stdin.lock(), &mut stdout)
}
