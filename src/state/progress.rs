//! Progress store: current puzzle pointer and completion set

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{ProgressRecord, PROGRESS_KEY};
use crate::puzzle::{Catalog, PuzzleId};
use crate::storage::{load_record, save_record, KeyValueStore, MemoryStore};

/// Write-through store for learner progress
pub struct ProgressStore {
    backend: Arc<dyn KeyValueStore>,
    record: ProgressRecord,
}

impl ProgressStore {
    /// Load persisted progress, or start a fresh course
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let record = load_record::<ProgressRecord>(backend.as_ref(), PROGRESS_KEY)
            .unwrap_or_default();
        debug!(
            "Loaded progress: current {}, {} completed",
            record.current_puzzle_id,
            record.completed_puzzle_ids.len()
        );
        Self { backend, record }
    }

    /// Progress that is never written anywhere
    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemoryStore::new()))
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn current(&self) -> PuzzleId {
        self.record.current_puzzle_id
    }

    pub fn completed(&self) -> &BTreeSet<PuzzleId> {
        &self.record.completed_puzzle_ids
    }

    pub fn completed_count(&self) -> usize {
        self.record.completed_puzzle_ids.len()
    }

    /// Point at a puzzle. Ids outside the catalog are accepted and simply
    /// resolve to no puzzle when read.
    pub fn set_current(&mut self, id: PuzzleId) {
        if self.record.current_puzzle_id == id {
            return;
        }
        debug!("Current puzzle {} -> {}", self.record.current_puzzle_id, id);
        self.record.current_puzzle_id = id;
        self.persist();
    }

    /// Add a puzzle to the completion set. Returns `false` when it was
    /// already there.
    pub fn mark_completed(&mut self, id: PuzzleId) -> bool {
        if !self.record.completed_puzzle_ids.insert(id) {
            return false;
        }
        info!("Puzzle {} completed", id);
        self.persist();
        true
    }

    pub fn is_completed(&self, id: PuzzleId) -> bool {
        self.record.completed_puzzle_ids.contains(&id)
    }

    /// Drop completed ids the catalog does not know about
    pub fn retain_known(&mut self, catalog: &Catalog) {
        let before = self.record.completed_puzzle_ids.len();
        self.record
            .completed_puzzle_ids
            .retain(|id| catalog.contains(*id));
        let dropped = before - self.record.completed_puzzle_ids.len();
        if dropped > 0 {
            warn!("Dropped {} completed ids missing from the catalog", dropped);
            self.persist();
        }
    }

    pub fn reset(&mut self) {
        self.record = ProgressRecord::default();
        info!("Progress reset");
        self.persist();
    }

    fn persist(&self) {
        save_record(self.backend.as_ref(), PROGRESS_KEY, &self.record);
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}
