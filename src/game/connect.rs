//! Completion guard for the connect grid
//!
//! The grid reports pairs as they are joined or broken. The tracker turns
//! those reports into a single completion signal per puzzle attempt.

use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectTracker {
    expected: BTreeSet<String>,
    connected: BTreeSet<String>,
    fired: bool,
}

impl ConnectTracker {
    /// Tracker for a connect puzzle that carries a layout
    pub fn for_puzzle(puzzle: &Puzzle) -> Option<Self> {
        if !puzzle.is_connect() {
            return None;
        }
        let layout = puzzle.connect.as_ref()?;
        Some(Self::new(layout.pairs.iter().map(|pair| pair.id.clone())))
    }

    pub fn new(pair_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            expected: pair_ids.into_iter().collect(),
            connected: BTreeSet::new(),
            fired: false,
        }
    }

    /// Record a joined pair. Returns `true` exactly once, when the last
    /// missing pair is joined.
    pub fn connect(&mut self, pair_id: &str) -> bool {
        if !self.expected.contains(pair_id) {
            debug!("Ignoring unknown connect pair {}", pair_id);
            return false;
        }
        self.connected.insert(pair_id.to_string());
        trace!(
            "Connected {}/{} pairs",
            self.connected.len(),
            self.expected.len()
        );
        if self.fired || !self.is_complete() {
            return false;
        }
        self.fired = true;
        true
    }

    /// Record a broken pair. A completed grid stays completed.
    pub fn disconnect(&mut self, pair_id: &str) {
        self.connected.remove(pair_id);
    }

    pub fn is_complete(&self) -> bool {
        !self.expected.is_empty() && self.connected == self.expected
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn reset(&mut self) {
        self.connected.clear();
        self.fired = false;
    }
}
