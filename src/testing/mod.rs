//! Testing utilities and fixtures
//!
//! Deterministic clocks, recording observers and small catalogs used by the
//! unit and integration tests.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::game::{GameEvent, GameObserver};
use crate::puzzle::{Answer, Catalog, Difficulty, Puzzle, PuzzleKind};
use crate::storage::KeyValueStore;

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Observer keeping every event it receives
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events matching a predicate
    pub fn matching(&self, predicate: impl Fn(&GameEvent) -> bool) -> Vec<GameEvent> {
        self.events()
            .into_iter()
            .filter(|event| predicate(event))
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl GameObserver for RecordingObserver {
    fn on_event(&self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Storage whose every operation fails, like a full or blocked local storage
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(Error::storage(format!("cannot read {key}")))
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(Error::storage(format!("cannot write {key}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Err(Error::storage(format!("cannot remove {key}")))
    }
}

/// Correct answer of every [`sample_catalog`] puzzle
pub fn sample_answer(id: u32) -> Answer {
    Answer::from(i64::from(id))
}

/// Catalog of `len` multiple-choice puzzles with ids `1..=len`.
///
/// Difficulty cycles easy, medium, hard, so rewards cycle 1, 2, 3. Puzzle `n`
/// is solved by [`sample_answer`]`(n)`; `0` is always a wrong option.
///
/// # Panics
///
/// Never in practice: the generated ids are dense and every correct answer is
/// one of its options, so [`Catalog::new`] accepts it for any `len`.
pub fn sample_catalog(len: u32) -> Catalog {
    let puzzles = (1..=len)
        .map(|id| {
            let difficulty = Difficulty::ALL[(id as usize - 1) % Difficulty::ALL.len()];
            Puzzle::choice(
                id,
                format!("Puzzle {id}"),
                PuzzleKind::Math,
                difficulty,
                sample_answer(id),
                vec![Answer::from(0), sample_answer(id)],
            )
        })
        .collect();
    Catalog::new(puzzles).expect("sample catalog is well formed")
}
