//! File-based storage backend

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::storage::traits::KeyValueStore;

/// Stores each key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store, creating the root directory if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(Error::Storage(format!("invalid storage key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        match String::from_utf8(fs::read(&path)?) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                // Not text at all; keep the bytes aside before a save replaces them
                warn!("Record {} is not valid UTF-8: {}", key, e);
                self.discard_corrupted(key)?;
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key)?;
        let temp_file = self.root.join(format!("{key}.json.tmp"));

        // Write to temp file, then rename over the record
        fs::write(&temp_file, value)?;
        fs::rename(&temp_file, &path)?;

        debug!("Saved record {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn discard_corrupted(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;
        if !path.exists() {
            return Ok(());
        }
        let backup = self
            .root
            .join(format!("{key}.json.corrupted.{}", Utc::now().timestamp()));
        fs::rename(&path, &backup)?;
        warn!("Record {} was corrupted, backed up to {:?}", key, backup);
        Ok(())
    }
}
