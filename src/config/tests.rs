use super::*;
use std::fs;
use tempfile::TempDir;

fn write_test_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("codecookies.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();

    assert_eq!(config.storage.backend, BackendType::File);
    assert!(config.storage.dir.is_none());
    assert_eq!(config.session.credit_delay, Duration::from_millis(500));
    assert_eq!(config.catalog.order, CatalogOrdering::Stable);
    assert!(config.catalog.path.is_none());
    assert_eq!(config.logging.log_level(), "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_config() {
    let config = GameConfig::from_toml_str(
        r#"
[storage]
backend = "memory"
dir = "/tmp/cookies"

[session]
credit_delay = "250ms"

[catalog]
order = "shuffled"
path = "course.json"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    assert_eq!(config.storage.backend, BackendType::Memory);
    assert_eq!(config.storage.resolved_dir(), PathBuf::from("/tmp/cookies"));
    assert_eq!(config.session.credit_delay, Duration::from_millis(250));
    assert_eq!(config.catalog.order, CatalogOrdering::Shuffled);
    assert_eq!(config.catalog.path, Some(PathBuf::from("course.json")));
    assert_eq!(config.logging.log_level(), "warn");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = GameConfig::from_toml_str("[session]\ncredit_delay = \"0s\"\n").unwrap();

    assert_eq!(config.session.credit_delay, Duration::ZERO);
    assert_eq!(config.storage, StorageConfig::default());
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_invalid_values_rejected() {
    assert!(matches!(
        GameConfig::from_toml_str("[storage]\nbackend = \"redis\"\n"),
        Err(Error::Toml(_))
    ));
    assert!(matches!(
        GameConfig::from_toml_str("[session]\ncredit_delay = \"5m\"\n"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        GameConfig::from_toml_str("[logging]\nlevel = \"  \"\n"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_verbosity_overrides_level() {
    let mut logging = LoggingConfig::default();
    logging.verbose = 1;
    assert_eq!(logging.log_level(), "debug");
    logging.verbose = 3;
    assert_eq!(logging.log_level(), "trace");
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_test_config(&temp_dir, "[catalog]\norder = \"shuffled\"\n");

    let config = load_config(&path).unwrap();
    assert_eq!(config.catalog.order, CatalogOrdering::Shuffled);
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    assert!(load_config(&path).is_err());
    assert_eq!(load_config_or_default(&path).unwrap(), GameConfig::default());
}

#[test]
fn test_load_error_mentions_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_test_config(&temp_dir, "[session]\ncredit_delay = 12\n");

    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("codecookies.toml"));
}
