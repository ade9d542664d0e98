use super::GameConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = GameConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load configuration, using defaults when the file does not exist
pub fn load_config_or_default(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(GameConfig::default());
    }
    load_config(path)
}
