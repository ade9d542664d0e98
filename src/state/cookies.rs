//! Cookie store: the learner's cookie total

use std::sync::Arc;
use tracing::debug;

use super::types::{CookieRecord, COOKIE_KEY};
use crate::storage::{load_record, save_record, KeyValueStore, MemoryStore};

/// Write-through cookie accumulator. The total never goes below zero and
/// negative amounts are ignored.
pub struct CookieStore {
    backend: Arc<dyn KeyValueStore>,
    record: CookieRecord,
}

impl CookieStore {
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let record = load_record::<CookieRecord>(backend.as_ref(), COOKIE_KEY)
            .unwrap_or_default();
        debug!("Loaded cookie total {}", record.total_cookies);
        Self { backend, record }
    }

    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemoryStore::new()))
    }

    pub fn total(&self) -> u64 {
        self.record.total_cookies
    }

    pub fn add(&mut self, amount: i64) {
        let Some(amount) = non_negative(amount, "add") else {
            return;
        };
        self.update(self.record.total_cookies.saturating_add(amount));
    }

    pub fn remove(&mut self, amount: i64) {
        let Some(amount) = non_negative(amount, "remove") else {
            return;
        };
        self.update(self.record.total_cookies.saturating_sub(amount));
    }

    pub fn set(&mut self, amount: i64) {
        let Some(amount) = non_negative(amount, "set") else {
            return;
        };
        self.update(amount);
    }

    pub fn reset(&mut self) {
        self.update(0);
    }

    fn update(&mut self, total: u64) {
        self.record.total_cookies = total;
        save_record(self.backend.as_ref(), COOKIE_KEY, &self.record);
    }
}

fn non_negative(amount: i64, operation: &str) -> Option<u64> {
    match u64::try_from(amount) {
        Ok(amount) => Some(amount),
        Err(_) => {
            debug!("Ignoring cookie {} with negative amount {}", operation, amount);
            None
        }
    }
}

impl std::fmt::Debug for CookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieStore")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}
