//! Core trait definitions for the key-value storage layer

use crate::error::Result;

/// Local key-value storage holding one JSON record per key.
///
/// This mirrors browser local storage: string keys, string values, and
/// last-write-wins semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under a key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under a key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Move an unreadable record out of the way so a fresh one can be written
    fn discard_corrupted(&self, key: &str) -> Result<()> {
        self.remove(key)
    }
}
