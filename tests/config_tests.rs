//! Configuration loading tests.
//!
//! Configs are plain serde data; these tests load them from JSON the way a
//! host application would and check that validation guards `Game::new`.

use card_adventure::core::{Action, ActionMode, GameConfig, Phase};
use card_adventure::error::ConfigError;
use card_adventure::game::Game;

#[test]
fn test_config_json_roundtrip() {
    let config = GameConfig::default().with_action_mode(ActionMode::EventButtons);
    let json = serde_json::to_string_pretty(&config).unwrap();
    let loaded: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_edited_config_drives_game() {
    let mut value = serde_json::to_value(GameConfig::default()).unwrap();
    value["monster"]["base_health"] = serde_json::json!(80);
    value["monster"]["health_per_kill"] = serde_json::json!(0);
    value["scratch_cards"] = serde_json::json!(1);
    let config: GameConfig = serde_json::from_value(value).unwrap();

    let mut game = Game::new(config).unwrap();
    game.apply(Action::SelectCharacter(1)).unwrap();
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.monster().unwrap().max_health(), 80);
    assert_eq!(game.battle().unwrap().hidden_scratch_count(), 1);
    assert_eq!(game.player().unwrap().character(), "法师");
}

#[test]
fn test_invalid_loaded_config_rejected() {
    let mut value = serde_json::to_value(GameConfig::default()).unwrap();
    value["monster"]["base_health"] = serde_json::json!(0);
    let config: GameConfig = serde_json::from_value(value).unwrap();
    assert_eq!(
        Game::new(config).unwrap_err(),
        ConfigError::ZeroMonsterHealth("哥布林".to_string())
    );

    let mut value = serde_json::to_value(GameConfig::default()).unwrap();
    value["roster"] = serde_json::json!([]);
    let config: GameConfig = serde_json::from_value(value).unwrap();
    assert_eq!(Game::new(config).unwrap_err(), ConfigError::EmptyRoster);
}

#[test]
fn test_classic_preset_is_valid() {
    let config = GameConfig::classic();
    assert!(config.validate().is_ok());
    assert_eq!(config.roster.len(), 3);
    assert_eq!(config.roster[1].max_health, 80);
    assert_eq!(config.monster.health_for(10), 50);
}
