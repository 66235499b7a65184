//! Scripted sessions through the text front end.

use oxo::{GameConfig, Mode, Phase, Player, TextFrontEnd};
use oxo_engine::{Engine, ScriptedSource};

fn run(script: &str, config: GameConfig, picks: Vec<usize>) -> (String, TextFrontEnd<ScriptedSource>) {
    let mut front = TextFrontEnd::new(Engine::new(ScriptedSource::new(picks)), config);
    let mut out = Vec::new();
    front.run(script.as_bytes(), &mut out).expect("session runs");
    (String::from_utf8(out).expect("utf8 output"), front)
}

#[test]
fn test_friend_game_to_win() {
    let (out, front) = run(
        "start x friend\n0 0\n1 1\n0 1\n1 0\nmove 0 2\nquit\n",
        GameConfig::default(),
        vec![],
    );
    assert!(out.contains("First to move: X"));
    assert!(out.contains("X won"));
    assert!(out.contains("type 'restart' to play again"));
    assert_eq!(front.snapshot().state().phase(), Phase::Won(Player::X));
}

#[test]
fn test_invalid_moves_are_reported() {
    let (out, front) = run("0 0\nstart\n0 0\n0 0\n3 3\n", GameConfig::default(), vec![]);
    assert!(out.contains("invalid move: Game is not in progress (Not started)"));
    assert!(out.contains("invalid move: Cell (0, 0) is already occupied"));
    assert!(out.contains("invalid move: Cell (3, 3) is off the board"));
    assert_eq!(front.snapshot().state().history().len(), 1);
}

#[test]
fn test_bot_answers_immediately() {
    let config = GameConfig::new(Player::X, Mode::HumanVsBot);
    let (out, front) = run("start\n1 1\n", config, vec![0]);
    // Bot O takes the first empty cell.
    assert!(out.contains("bot plays 0 0"));
    let state = front.snapshot().state().clone();
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.current_player(), Player::X);
}

#[test]
fn test_bot_opens_when_it_moves_first() {
    let (out, front) = run("start o bot\n", GameConfig::default(), vec![8]);
    assert!(out.contains("bot plays 2 2"));
    assert_eq!(front.snapshot().state().current_player(), Player::X);
}

#[test]
fn test_restart_and_state_json() {
    let (out, front) = run("start\n0 0\nrestart\nstate\n", GameConfig::default(), vec![]);
    assert!(front.snapshot().state().history().is_empty());
    let json_line = out
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("state prints JSON");
    let value: serde_json::Value = serde_json::from_str(json_line).expect("valid JSON");
    assert_eq!(value["status"], "First to move: X");
    assert_eq!(value["state"]["phase"], "InProgress");
}

#[test]
fn test_restart_before_start_is_error() {
    let (out, _) = run("restart\nzip files\n", GameConfig::default(), vec![]);
    assert!(out.contains("error: No game has been configured yet"));
    assert!(out.contains("error: unknown command 'zip'"));
}
