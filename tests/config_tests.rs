//! Building games from TOML configuration

use codecookies::config::BackendType;
use codecookies::{GameBuilder, GameConfig, PuzzleId};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "id": 1,
    "title": "Two plus two",
    "type": "math",
    "difficulty": "easy",
    "correctAnswer": 4,
    "options": [3, 4, 5]
  },
  {
    "id": 2,
    "title": "Odd one out",
    "type": "logic",
    "difficulty": "hard",
    "correctAnswer": "cat",
    "options": ["dog", "cat", "wolf"],
    "cookiesReward": 5
  }
]"#;

#[test]
fn game_from_config_file() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("course.json");
    fs::write(&catalog_path, CATALOG).unwrap();

    let config_path = dir.path().join("codecookies.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[storage]
backend = "memory"

[session]
credit_delay = "0s"

[catalog]
path = "{}"
"#,
            catalog_path.display().to_string().replace('\\', "\\\\")
        ),
    )
    .unwrap();

    let config = GameConfig::load(&config_path).unwrap();
    assert_eq!(config.storage.backend, BackendType::Memory);
    assert_eq!(config.session.credit_delay, Duration::ZERO);

    let mut game = GameBuilder::from_config(&config).unwrap().build().unwrap();
    assert_eq!(game.catalog().len(), 2);

    assert!(game.submit_answer(4).unwrap().is_correct);
    assert_eq!(game.total_cookies(), 1);
    assert_eq!(game.current_puzzle_id(), PuzzleId::new(2));

    assert!(game.submit_answer("cat").unwrap().is_correct);
    assert_eq!(game.total_cookies(), 6);
    assert!(game.progress_summary().finished);
}

#[test]
fn missing_config_uses_builtin_course() {
    let dir = TempDir::new().unwrap();
    let mut config = GameConfig::load(&dir.path().join("absent.toml")).unwrap();
    config.storage.backend = BackendType::Memory;

    let game = GameBuilder::from_config(&config).unwrap().build().unwrap();
    assert_eq!(game.catalog().len(), 30);
    assert_eq!(game.current_puzzle().unwrap().cookies_reward, 1);
}

#[test]
fn invalid_catalog_is_rejected() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("broken.json");
    fs::write(
        &catalog_path,
        r#"[{"id": 1, "title": "x", "type": "math", "difficulty": "easy", "correctAnswer": 9, "options": [1, 2]}]"#,
    )
    .unwrap();

    let mut config = GameConfig::default();
    config.storage.backend = BackendType::Memory;
    config.catalog.path = Some(catalog_path);

    let err = GameBuilder::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("Catalog error"));
}
