//! Uniformly random bot.
//!
//! The bot has no strategy: it picks any empty cell with equal probability.

use super::random::RandomSource;
use super::state::GameState;
use super::{Coord, GameConfig, Phase};
use tracing::{debug, instrument};

/// Reason the bot could not choose a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BotError {
    /// The game is not accepting moves.
    #[display("Game is not in progress ({})", _0)]
    GameNotInProgress(Phase),
    /// Not a bot game, or the human is to move.
    #[display("It is not the bot's turn")]
    NotBotsTurn,
    /// No empty cell is left.
    #[display("No empty cells remain")]
    NoEmptyCells,
}

impl std::error::Error for BotError {}

/// Returns true if `config` gives the current turn to the bot.
pub fn is_bots_turn(state: &GameState, config: &GameConfig) -> bool {
    state.phase().is_in_progress() && config.is_bot(state.current_player())
}

/// Chooses the bot's next cell uniformly among the empty cells.
///
/// Candidates are listed in row-major order and indexed by `rng`, so a
/// fixed seed or script always yields the same choice.
#[instrument(skip(state, rng), fields(to_move = %state.current_player()))]
pub fn bot_move<R: RandomSource + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Coord, BotError> {
    if !state.phase().is_in_progress() {
        return Err(BotError::GameNotInProgress(state.phase()));
    }
    if !config.is_bot(state.current_player()) {
        return Err(BotError::NotBotsTurn);
    }

    let candidates = state.board().empty_cells();
    if candidates.is_empty() {
        return Err(BotError::NoEmptyCells);
    }

    let coord = candidates[rng.pick(candidates.len()) % candidates.len()];
    debug!(%coord, candidates = candidates.len(), "Bot chose cell");
    Ok(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, SeededSource};
    use crate::{Mode, Player};

    fn bot_config() -> GameConfig {
        GameConfig::new(Player::X, Mode::HumanVsBot)
    }

    #[test]
    fn test_rejects_humans_turn() {
        let state = GameState::start(Player::X);
        let mut rng = SeededSource::new(1);
        assert_eq!(bot_move(&state, &bot_config(), &mut rng), Err(BotError::NotBotsTurn));
    }

    #[test]
    fn test_rejects_friend_mode() {
        let state = GameState::start(Player::O);
        let config = GameConfig::new(Player::O, Mode::HumanVsHuman);
        let mut rng = SeededSource::new(1);
        assert_eq!(bot_move(&state, &config, &mut rng), Err(BotError::NotBotsTurn));
    }

    #[test]
    fn test_rejects_not_started() {
        let mut rng = SeededSource::new(1);
        assert_eq!(
            bot_move(&GameState::not_started(), &bot_config(), &mut rng),
            Err(BotError::GameNotInProgress(Phase::NotStarted))
        );
    }

    #[test]
    fn test_scripted_pick_indexes_empty_cells() {
        let state = GameState::start(Player::X).apply_move(0, 0, Player::X).unwrap();
        let mut rng = ScriptedSource::new([2]);
        // Empty cells: (0,1), (0,2), (1,0), ... so index 2 is (1,0).
        assert_eq!(bot_move(&state, &bot_config(), &mut rng), Ok(Coord::at(1, 0)));
    }

    #[test]
    fn test_choice_is_always_empty() {
        let state = GameState::start(Player::X)
            .apply_move(1, 1, Player::X)
            .unwrap();
        let mut rng = SeededSource::new(7);
        for _ in 0..50 {
            let coord = bot_move(&state, &bot_config(), &mut rng).unwrap();
            assert!(state.board().is_empty(coord));
        }
    }
}
