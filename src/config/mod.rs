//! Engine configuration
//!
//! Configuration is read from TOML. Every section is optional and falls back
//! to the defaults used by the web front-end:
//!
//! ```toml
//! [storage]
//! backend = "file"
//! dir = "/home/learner/.local/share/codecookies"
//!
//! [session]
//! credit_delay = "500ms"
//!
//! [catalog]
//! order = "shuffled"
//!
//! [logging]
//! level = "info"
//! verbose = 0
//! ```

pub mod loader;

pub use loader::{load_config, load_config_or_default};

use crate::error::{Error, Result};
use anyhow::anyhow;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default pause between a correct answer and the credit transition
pub const DEFAULT_CREDIT_DELAY: Duration = Duration::from_millis(500);

/// Get the per-user data directory for persisted records
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    ProjectDirs::from("com", "codecookies", "codecookies")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine home directory"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        load_config_or_default(path)
    }

    /// Reject settings that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.session.credit_delay > Duration::from_secs(60) {
            return Err(Error::Config(format!(
                "credit_delay of {:?} is longer than one minute",
                self.session.credit_delay
            )));
        }
        if let Some(dir) = &self.storage.dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Config("storage dir must not be empty".to_string()));
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// One JSON file per record (default)
    #[default]
    File,
    /// Volatile storage; progress is lost when the process exits
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: BackendType,
    /// Directory for file records; the per-user data directory when unset
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Directory the file backend writes to
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => get_data_dir().unwrap_or_else(|_| PathBuf::from(".codecookies")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(with = "humantime_serde")]
    pub credit_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credit_delay: DEFAULT_CREDIT_DELAY,
        }
    }
}

/// Catalog arrangement requested by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrdering {
    #[default]
    Stable,
    /// Shuffled within difficulty groups; the seed is persisted per learner
    Shuffled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub order: CatalogOrdering,
    /// Catalog JSON file; the bundled course when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub verbose: u8,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: 0,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for the subscriber; verbosity overrides the level
    pub fn log_level(&self) -> &str {
        match self.verbose {
            0 => self.level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests;
