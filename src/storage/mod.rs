//! Storage layer for persisted game records
//!
//! Each store keeps a single JSON record under a stable key, the way the web
//! front-end keeps them in browser local storage. Writes are fire-and-forget:
//! a failed write is logged and the caller carries on with its in-memory
//! state.

pub mod backends;
pub mod factory;
pub mod traits;

pub use backends::{FileStore, MemoryStore};
pub use factory::open_store;
pub use traits::KeyValueStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{trace, warn};

/// Load and decode a record.
///
/// Returns `None` when the key is missing, unreadable or corrupted. Corrupted
/// records are discarded so the next save starts clean.
pub fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Cannot read record {}: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Record {} is corrupted: {}", key, e);
            if let Err(e) = store.discard_corrupted(key) {
                warn!("Failed to discard corrupted record {}: {}", key, e);
            }
            None
        }
    }
}

/// Encode and write a record, returning whether the write landed
pub fn save_record<T: Serialize>(store: &dyn KeyValueStore, key: &str, record: &T) -> bool {
    let json = match serde_json::to_string(record) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize record {}: {}", key, e);
            return false;
        }
    };

    match store.set(key, &json) {
        Ok(()) => {
            trace!("Persisted {} = {}", key, json);
            true
        }
        Err(e) => {
            warn!("Failed to persist record {}, keeping in-memory state: {}", key, e);
            false
        }
    }
}
