//! Storage factory for creating backends from configuration

use std::sync::Arc;
use tracing::{debug, warn};

use super::backends::{FileStore, MemoryStore};
use super::traits::KeyValueStore;
use crate::config::{BackendType, StorageConfig};
use crate::error::Result;

/// Open the configured backend
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend {
        BackendType::File => {
            let dir = config.resolved_dir();
            let store = FileStore::new(&dir)?;
            debug!("Using file storage at {}", dir.display());
            Ok(Arc::new(store))
        }
        BackendType::Memory => {
            warn!("Using memory storage; progress will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
