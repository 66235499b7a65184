//! Command-line interface for oxo.

use clap::{Args, Parser, Subcommand};
use oxo::{ConfigOverrides, Mode, Player};
use std::path::PathBuf;

/// oxo - tic-tac-toe against a friend or a random bot
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe against a friend or a random bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play by typing commands on stdin
    Text {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Settings that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Who moves first (x or o)
    #[arg(long)]
    pub first: Option<Player>,

    /// Opponent (friend or bot)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Symbol the bot plays (x or o)
    #[arg(long)]
    pub bot_as: Option<Player>,

    /// Pause before the bot moves, in milliseconds
    #[arg(long)]
    pub bot_delay_ms: Option<u64>,

    /// Seed for the bot's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<GameArgs> for ConfigOverrides {
    fn from(args: GameArgs) -> Self {
        Self {
            first_mover: args.first,
            mode: args.mode,
            bot_player: args.bot_as,
            bot_delay_ms: args.bot_delay_ms,
            seed: args.seed,
        }
    }
}
