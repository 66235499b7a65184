//! Loading configuration files from disk.

use oxo::{AppConfig, ConfigOverrides, Mode, Player};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_mover = \"O\"\nmode = \"HumanVsBot\"\nbot_player = \"X\"\nbot_delay_ms = 0\nseed = 11").unwrap();

    let config = AppConfig::load(Some(file.path())).expect("config loads");

    let game = config.game_config();
    assert_eq!(game.first_mover(), Player::O);
    assert_eq!(game.mode(), Mode::HumanVsBot);
    assert_eq!(game.bot_player(), Some(Player::X));
    assert_eq!(config.bot_delay(), Duration::ZERO);

    let snapshot = config.engine().start_game(game);
    assert!(!snapshot.bot_to_move());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_no_path_uses_defaults_and_overrides_apply() {
    let overrides = ConfigOverrides {
        first_mover: Some(Player::O),
        seed: Some(3),
        ..Default::default()
    };
    let config = AppConfig::load(None).unwrap().with_overrides(&overrides);
    assert_eq!(*config.first_mover(), Player::O);
    assert_eq!(*config.seed(), Some(3));
    assert_eq!(config.engine().rng().seed(), 3);
}
