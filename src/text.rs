//! Line-oriented front end.
//!
//! Reads one command per line and prints the board after every change.
//! The bot answers immediately; the engine behaves the same with or
//! without a delay.

use anyhow::{Context, Result};
use oxo_engine::{Engine, EngineError, GameConfig, Mode, Player, RandomSource, Snapshot};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
commands:
  start [x|o] [friend|bot]  start a new game
  move <row> <col>          place a mark (rows and columns are 0-2)
  <row> <col>               same as move
  restart                   new game with the same settings
  board                     show the board
  state                     print the game as JSON
  help                      show this help
  quit                      leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    /// Start with optional first mover and mode; omitted values use defaults.
    Start {
        /// Player to move first.
        first: Option<Player>,
        /// Friend or bot.
        mode: Option<Mode>,
    },
    /// Place the current player's mark.
    Move {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// New game with the same settings.
    Restart,
    /// Print the board.
    Board,
    /// Print the snapshot as JSON.
    State,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
#[instrument]
pub fn parse_line(line: &str) -> Result<Option<TextCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "start" | "new" => {
            let mut first = None;
            let mut mode = None;
            for word in rest {
                if let Ok(player) = word.parse::<Player>() {
                    first = Some(player);
                } else if let Ok(parsed) = word.parse::<Mode>() {
                    mode = Some(parsed);
                } else {
                    return Err(format!("unknown start option '{}'", word));
                }
            }
            TextCommand::Start { first, mode }
        }
        "move" | "m" => parse_coords(rest)?,
        "restart" => TextCommand::Restart,
        "board" => TextCommand::Board,
        "state" => TextCommand::State,
        "help" | "?" => TextCommand::Help,
        "quit" | "exit" | "q" => TextCommand::Quit,
        _ if head.parse::<usize>().is_ok() => parse_coords(&words)?,
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(Some(command))
}

fn parse_coords(words: &[&str]) -> Result<TextCommand, String> {
    match words {
        [row, col] => {
            let row = row.parse().map_err(|_| format!("bad row '{}'", row))?;
            let col = col.parse().map_err(|_| format!("bad column '{}'", col))?;
            Ok(TextCommand::Move { row, col })
        }
        _ => Err("expected: move <row> <col>".to_string()),
    }
}

/// Text front end driving one engine.
pub struct TextFrontEnd<R> {
    engine: Engine<R>,
    defaults: GameConfig,
}

impl<R: RandomSource> TextFrontEnd<R> {
    /// Creates a front end; `defaults` fill in options `start` omits.
    pub fn new(engine: Engine<R>, defaults: GameConfig) -> Self {
        Self { engine, defaults }
    }

    /// Returns the engine's current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Runs commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, output: &mut W) -> Result<()> {
        info!("Starting text front end");
        writeln!(output, "{}", HELP)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(TextCommand::Quit)) => {
                    info!("User quit");
                    break;
                }
                Ok(Some(command)) => self.execute(command, output)?,
                Err(reason) => writeln!(output, "error: {}", reason)?,
            }
        }
        Ok(())
    }

    /// Executes one command, writing results to `output`.
    #[instrument(skip(self, output))]
    pub fn execute<W: Write>(&mut self, command: TextCommand, output: &mut W) -> Result<()> {
        let result = match command {
            TextCommand::Start { first, mode } => {
                let config = self
                    .defaults
                    .with_first_mover(first.unwrap_or(self.defaults.first_mover()))
                    .with_mode(mode.unwrap_or(self.defaults.mode()));
                Ok(self.engine.start_game(config))
            }
            TextCommand::Move { row, col } => self.engine.apply_move(row, col),
            TextCommand::Restart => self.engine.restart(),
            TextCommand::Board => Ok(self.engine.snapshot()),
            TextCommand::State => {
                let json = serde_json::to_string(&self.engine.snapshot())
                    .context("Failed to serialize snapshot")?;
                writeln!(output, "{}", json)?;
                return Ok(());
            }
            TextCommand::Help => {
                writeln!(output, "{}", HELP)?;
                return Ok(());
            }
            TextCommand::Quit => return Ok(()),
        };

        match result {
            Ok(snapshot) => {
                render(&snapshot, output)?;
                self.answer_bot(snapshot, output)
            }
            Err(err) => {
                warn!(error = %err, "Command rejected");
                report(&err, output)
            }
        }
    }

    /// Lets the bot move for as long as it is due.
    fn answer_bot<W: Write>(&mut self, mut snapshot: Snapshot, output: &mut W) -> Result<()> {
        while snapshot.bot_to_move() {
            snapshot = match self.engine.play_bot() {
                Ok(next) => next,
                Err(err) => return report(&err, output),
            };
            if let Some(last) = snapshot.state().history().last() {
                debug!(%last, "Bot answered");
                writeln!(output, "bot plays {} {}", last.coord.row(), last.coord.col())?;
            }
            render(&snapshot, output)?;
        }
        Ok(())
    }
}

fn render<W: Write>(snapshot: &Snapshot, output: &mut W) -> Result<()> {
    writeln!(output, "{}", snapshot.state().board())?;
    writeln!(output, "{}", snapshot.status())?;
    if snapshot.state().phase().is_terminal() {
        writeln!(output, "type 'restart' to play again")?;
    }
    Ok(())
}

fn report<W: Write>(err: &EngineError, output: &mut W) -> Result<()> {
    match err {
        EngineError::Move(_) | EngineError::NotHumansTurn(_) => writeln!(output, "invalid move: {}", err)?,
        EngineError::Bot(_) | EngineError::NotConfigured => writeln!(output, "error: {}", err)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_line("move 1 2"), Ok(Some(TextCommand::Move { row: 1, col: 2 })));
        assert_eq!(parse_line("  2 0 "), Ok(Some(TextCommand::Move { row: 2, col: 0 })));
        assert_eq!(parse_line(""), Ok(None));
        assert!(parse_line("move 1").is_err());
        assert!(parse_line("move a b").is_err());
    }

    #[test]
    fn test_parse_start_options() {
        assert_eq!(
            parse_line("start o bot"),
            Ok(Some(TextCommand::Start { first: Some(Player::O), mode: Some(Mode::HumanVsBot) }))
        );
        assert_eq!(parse_line("start"), Ok(Some(TextCommand::Start { first: None, mode: None })));
        assert!(parse_line("start z").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_line("zip archive.tar"), Err("unknown command 'zip'".to_string()));
    }
}
