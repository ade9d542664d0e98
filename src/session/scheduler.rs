//! Deferred credit scheduling
//!
//! A correct answer is credited after a short delay. Each pending credit is
//! keyed by its puzzle id so it can be cancelled when the learner moves on.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::puzzle::PuzzleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCredit {
    pub puzzle_id: PuzzleId,
    pub reward: u32,
    pub due_at: Instant,
}

#[derive(Debug, Default)]
pub struct CreditScheduler {
    pending: BTreeMap<PuzzleId, PendingCredit>,
}

impl CreditScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a credit, replacing any earlier one for the same puzzle
    pub fn schedule(&mut self, credit: PendingCredit) -> Option<PendingCredit> {
        self.pending.insert(credit.puzzle_id, credit)
    }

    pub fn cancel(&mut self, puzzle_id: PuzzleId) -> Option<PendingCredit> {
        self.pending.remove(&puzzle_id)
    }

    /// Remove every credit that does not belong to the active puzzle
    pub fn cancel_stale(&mut self, active: Option<PuzzleId>) -> Vec<PendingCredit> {
        let stale: Vec<PuzzleId> = self
            .pending
            .keys()
            .copied()
            .filter(|id| Some(*id) != active)
            .collect();
        stale
            .into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .collect()
    }

    /// Remove and return the credits due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingCredit> {
        let due: Vec<PuzzleId> = self
            .pending
            .values()
            .filter(|credit| credit.due_at <= now)
            .map(|credit| credit.puzzle_id)
            .collect();
        let mut credits: Vec<PendingCredit> = due
            .into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .collect();
        credits.sort_by_key(|credit| credit.due_at);
        credits
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.values().map(|credit| credit.due_at).min()
    }

    pub fn clear(&mut self) -> Vec<PendingCredit> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
