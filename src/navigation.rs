//! Navigation over the catalog
//!
//! Moving forward always lands on the first puzzle that is still incomplete,
//! wherever it sits in the catalog. Moving back scans strictly below the
//! current puzzle and, when nothing is left there, falls forward again.

use std::collections::BTreeSet;
use tracing::debug;

use crate::puzzle::{Catalog, PuzzleId};
use crate::state::ProgressStore;

/// Where a navigation request ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved(PuzzleId),
    /// Every catalog puzzle is completed
    Finished,
}

impl NavigationOutcome {
    pub fn puzzle_id(self) -> Option<PuzzleId> {
        match self {
            NavigationOutcome::Moved(id) => Some(id),
            NavigationOutcome::Finished => None,
        }
    }
}

/// First catalog id, in catalog order, that is not completed
pub fn next_incomplete(catalog: &Catalog, completed: &BTreeSet<PuzzleId>) -> Option<PuzzleId> {
    catalog.ids().find(|id| !completed.contains(id))
}

/// Closest incomplete id strictly below `current`
pub fn previous_incomplete(
    catalog: &Catalog,
    current: PuzzleId,
    completed: &BTreeSet<PuzzleId>,
) -> Option<PuzzleId> {
    catalog
        .ids()
        .rev()
        .filter(|id| *id < current)
        .find(|id| !completed.contains(id))
}

/// Navigation actions bound to a catalog and the learner's progress
pub struct Navigator<'a> {
    catalog: &'a Catalog,
    progress: &'a mut ProgressStore,
}

impl<'a> Navigator<'a> {
    pub fn new(catalog: &'a Catalog, progress: &'a mut ProgressStore) -> Self {
        Self { catalog, progress }
    }

    pub fn next_incomplete(&self) -> Option<PuzzleId> {
        next_incomplete(self.catalog, self.progress.completed())
    }

    pub fn previous_incomplete(&self) -> Option<PuzzleId> {
        previous_incomplete(self.catalog, self.progress.current(), self.progress.completed())
    }

    /// Move to the first incomplete puzzle. The current pointer is left alone
    /// when the course is finished.
    pub fn advance(&mut self) -> NavigationOutcome {
        match self.next_incomplete() {
            Some(id) => {
                self.progress.set_current(id);
                NavigationOutcome::Moved(id)
            }
            None => {
                debug!("No incomplete puzzle left");
                NavigationOutcome::Finished
            }
        }
    }

    /// Move to the previous incomplete puzzle, or forward when there is none
    pub fn retreat(&mut self) -> NavigationOutcome {
        match self.previous_incomplete() {
            Some(id) => {
                self.progress.set_current(id);
                NavigationOutcome::Moved(id)
            }
            None => {
                debug!(
                    "Nothing incomplete before {}, moving forward instead",
                    self.progress.current()
                );
                self.advance()
            }
        }
    }

    /// Jump to a puzzle. Completed puzzles are locked and cannot be selected.
    pub fn select_puzzle(&mut self, id: PuzzleId) -> bool {
        if self.progress.is_completed(id) {
            debug!("Puzzle {} is completed, selection ignored", id);
            return false;
        }
        self.progress.set_current(id);
        true
    }

    /// Advance when the current puzzle is a completed catalog puzzle
    pub fn auto_advance_if_current_complete(&mut self) -> Option<NavigationOutcome> {
        let current = self.progress.current();
        if !self.catalog.contains(current) || !self.progress.is_completed(current) {
            return None;
        }
        Some(self.advance())
    }
}
