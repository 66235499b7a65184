//! Bot selection and engine-driven bot games.

use oxo_engine::{
    BotError, Coord, Engine, EngineError, GameConfig, GameState, Mode, Phase, Player,
    ScriptedSource, SeededSource, bot_move,
};

fn eight_moves() -> GameState {
    [(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1)]
        .into_iter()
        .fold(GameState::start(Player::X), |state, (row, col)| {
            let player = state.current_player();
            state.apply_move(row, col, player).expect("legal move")
        })
}

#[test]
fn test_single_empty_cell_is_forced() {
    let state = eight_moves();
    let config = GameConfig::new(Player::X, Mode::HumanVsBot).with_bot_player(Player::X);
    let last = Coord::new(2, 2).unwrap();

    for seed in 0..20 {
        let mut rng = SeededSource::new(seed);
        assert_eq!(bot_move(&state, &config, &mut rng), Ok(last));
    }
    let mut scripted = ScriptedSource::new([5]);
    assert_eq!(bot_move(&state, &config, &mut scripted), Ok(last));
}

#[test]
fn test_bot_rejected_after_game_over() {
    let state = eight_moves().apply_move(2, 2, Player::X).unwrap();
    assert_eq!(state.phase(), Phase::Draw);

    let config = GameConfig::new(Player::X, Mode::HumanVsBot).with_bot_player(Player::X);
    let mut rng = SeededSource::new(0);
    assert_eq!(
        bot_move(&state, &config, &mut rng),
        Err(BotError::GameNotInProgress(Phase::Draw))
    );
}

/// Plays a human that always takes the first empty cell against the bot.
fn bot_game<R: oxo_engine::RandomSource>(engine: &mut Engine<R>, config: GameConfig) -> GameState {
    let mut snapshot = engine.start_game(config);
    while snapshot.state().phase().is_in_progress() {
        snapshot = if snapshot.bot_to_move() {
            engine.play_bot().expect("bot move")
        } else {
            let coord = snapshot.state().board().empty_cells()[0];
            engine.apply_move(coord.row(), coord.col()).expect("human move")
        };
    }
    snapshot.state().clone()
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig::new(Player::O, Mode::HumanVsBot);
    let a = bot_game(&mut Engine::seeded(1234), config);
    let b = bot_game(&mut Engine::seeded(1234), config);
    assert_eq!(a.history(), b.history());
    assert!(a.phase().is_terminal());
}

#[test]
fn test_bot_alternates_with_human() {
    let config = GameConfig::new(Player::X, Mode::HumanVsBot);
    let state = bot_game(&mut Engine::seeded(99), config);
    for (i, mv) in state.history().iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mv.player, expected);
    }
}

#[test]
fn test_scripted_bot_game() {
    // Human X takes first empty cell; bot O takes the last empty cell each time.
    let mut engine = Engine::new(ScriptedSource::new([7, 5, 3, 1]));
    let state = bot_game(&mut engine, GameConfig::new(Player::X, Mode::HumanVsBot));
    // X: (0,0) (0,1) (0,2) wins before the bot can block the top row.
    assert_eq!(state.phase(), Phase::Won(Player::X));
    let o_moves: Vec<Coord> = state
        .history()
        .iter()
        .filter(|m| m.player == Player::O)
        .map(|m| m.coord)
        .collect();
    assert_eq!(o_moves, vec![Coord::new(2, 2).unwrap(), Coord::new(2, 1).unwrap()]);
}

#[test]
fn test_human_cannot_move_for_bot() {
    let mut engine = Engine::seeded(5);
    engine.start_game(GameConfig::new(Player::O, Mode::HumanVsBot));
    let before = engine.snapshot();
    assert_eq!(engine.apply_move(1, 1), Err(EngineError::NotHumansTurn(Player::O)));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_restart_keeps_config_and_clears_board() {
    let mut engine = Engine::seeded(5);
    let config = GameConfig::new(Player::O, Mode::HumanVsHuman);
    engine.start_game(config);
    engine.apply_move(0, 0).unwrap();

    let snapshot = engine.restart().unwrap();

    assert_eq!(snapshot.config(), &Some(config));
    assert_eq!(snapshot.state(), &GameState::start(Player::O));
    assert_eq!(snapshot.status(), "First to move: O");
}
