//! Game facade
//!
//! [`CookieGame`] wires the catalog, the two persisted stores, navigation and
//! the session controller together. It is the only type the presentation
//! layer needs: every action returns plain data and everything noteworthy is
//! also reported to registered [`GameObserver`]s.
//!
//! Time only moves when the game is asked to do something. Pending credits
//! are resolved at the start and end of every action and on [`CookieGame::tick`],
//! which the host calls on its own schedule (for instance when
//! [`CookieGame::pending_credit_due`] passes).

pub mod connect;
pub mod events;

#[cfg(test)]
mod tests;

pub use connect::ConnectTracker;
pub use events::{GameEvent, GameObserver};

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{CatalogOrdering, GameConfig, DEFAULT_CREDIT_DELAY};
use crate::error::Result;
use crate::navigation::{NavigationOutcome, Navigator};
use crate::puzzle::{total_for, Answer, Catalog, CatalogOrder, Puzzle, PuzzleId, ValidationResult};
use crate::session::{CreditResolution, SessionController, SessionSnapshot};
use crate::state::{catalog_seed, CookieStore, ProgressStore};
use crate::storage::{open_store, KeyValueStore, MemoryStore};

/// Course progress as shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent
    pub percent: u8,
    pub finished: bool,
    /// The learner is on the last catalog puzzle, where a full reset is offered
    pub on_last_puzzle: bool,
}

/// Builder for [`CookieGame`]
pub struct GameBuilder {
    catalog: Option<Catalog>,
    storage: Option<Arc<dyn KeyValueStore>>,
    credit_delay: Duration,
    clock: Arc<dyn Clock>,
    observers: Vec<Arc<dyn GameObserver>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            storage: None,
            credit_delay: DEFAULT_CREDIT_DELAY,
            clock: Arc::new(SystemClock),
            observers: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for the configured storage, catalog and timing.
    ///
    /// A shuffled catalog reuses the seed stored with the learner's records.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let storage = open_store(&config.storage)?;
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let order = match config.catalog.order {
            CatalogOrdering::Stable => CatalogOrder::Stable,
            CatalogOrdering::Shuffled => CatalogOrder::Shuffled {
                seed: catalog_seed(storage.as_ref()),
            },
        };

        Ok(Self::new()
            .catalog(catalog.arranged(order))
            .storage(storage)
            .credit_delay(config.session.credit_delay))
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn credit_delay(mut self, credit_delay: Duration) -> Self {
        self.credit_delay = credit_delay;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> Result<CookieGame> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::builtin()?,
        };
        let storage: Arc<dyn KeyValueStore> = match self.storage {
            Some(storage) => storage,
            None => Arc::new(MemoryStore::new()),
        };

        let mut progress = ProgressStore::load(storage.clone());
        progress.retain_known(&catalog);
        let cookies = CookieStore::load(storage);

        let mut game = CookieGame {
            catalog,
            progress,
            cookies,
            controller: SessionController::new(self.credit_delay),
            connect: None,
            clock: self.clock,
            observers: self.observers,
            finished_announced: false,
        };
        info!(
            "Game ready: {} puzzles, current {}, {} completed, {} cookies",
            game.catalog.len(),
            game.progress.current(),
            game.progress.completed_count(),
            game.cookies.total()
        );
        game.settle();
        Ok(game)
    }
}

/// The puzzle progression and reward engine for one learner
pub struct CookieGame {
    catalog: Catalog,
    progress: ProgressStore,
    cookies: CookieStore,
    controller: SessionController,
    connect: Option<ConnectTracker>,
    clock: Arc<dyn Clock>,
    observers: Vec<Arc<dyn GameObserver>>,
    finished_announced: bool,
}

impl CookieGame {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_puzzle_id(&self) -> PuzzleId {
        self.progress.current()
    }

    /// The puzzle on screen, `None` when the current id is not in the catalog
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.catalog.get(self.progress.current())
    }

    pub fn session_state(&self) -> SessionSnapshot {
        self.controller.snapshot()
    }

    pub fn total_cookies(&self) -> u64 {
        self.cookies.total()
    }

    pub fn completed_ids(&self) -> &BTreeSet<PuzzleId> {
        self.progress.completed()
    }

    pub fn is_completed(&self, id: PuzzleId) -> bool {
        self.progress.is_completed(id)
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let total = self.catalog.len();
        let completed = self
            .catalog
            .ids()
            .filter(|id| self.progress.is_completed(*id))
            .count();
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((completed * 100 + total / 2) / total).unwrap_or(100)
        };

        ProgressSummary {
            completed,
            total,
            percent,
            finished: completed == total,
            on_last_puzzle: self.catalog.last_id() == Some(self.progress.current()),
        }
    }

    /// When the pending credit, if any, comes due
    pub fn pending_credit_due(&self) -> Option<Instant> {
        self.controller.next_due()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Answer the current puzzle.
    ///
    /// Returns `None` when nothing was checked: the current puzzle is missing,
    /// already completed, or already solved in this session.
    pub fn submit_answer(&mut self, answer: impl Into<Answer>) -> Option<ValidationResult> {
        self.settle();

        let answer = answer.into();
        let id = self.progress.current();
        let Some(puzzle) = self.catalog.get(id) else {
            debug!("Puzzle {} not found, answer ignored", id);
            return None;
        };
        let reward = puzzle.cookies_reward;
        let already_completed = self.progress.is_completed(id);
        let now = self.clock.now();
        let result = self
            .controller
            .submit(puzzle, answer.clone(), already_completed, now)?;

        self.emit(&GameEvent::AnswerChecked {
            puzzle_id: id,
            answer,
            result,
        });
        if result.is_correct {
            self.emit(&GameEvent::PuzzleSolved {
                puzzle_id: id,
                reward,
            });
        }

        self.settle();
        Some(result)
    }

    /// Completion callback of the connect grid
    pub fn connect_completed(&mut self) -> Option<ValidationResult> {
        self.submit_answer(Answer::completed())
    }

    /// Forward a pair report from the connect grid. Completion is submitted
    /// the first time every pair is joined.
    pub fn report_connected_pair(
        &mut self,
        pair_id: &str,
        connected: bool,
    ) -> Option<ValidationResult> {
        self.settle();

        let tracker = self.connect.as_mut()?;
        if !connected {
            tracker.disconnect(pair_id);
            return None;
        }
        if tracker.connect(pair_id) {
            self.connect_completed()
        } else {
            None
        }
    }

    /// Resolve due credits and follow up on completed puzzles
    pub fn tick(&mut self) {
        self.settle();
    }

    pub fn go_next(&mut self) -> NavigationOutcome {
        self.settle();
        let outcome = Navigator::new(&self.catalog, &mut self.progress).advance();
        if outcome == NavigationOutcome::Finished {
            self.announce_finished();
        }
        self.settle();
        outcome
    }

    pub fn go_previous(&mut self) -> NavigationOutcome {
        self.settle();
        let outcome = Navigator::new(&self.catalog, &mut self.progress).retreat();
        if outcome == NavigationOutcome::Finished {
            self.announce_finished();
        }
        self.settle();
        outcome
    }

    /// Jump to a puzzle; completed puzzles cannot be selected
    pub fn select_puzzle(&mut self, id: PuzzleId) -> bool {
        self.settle();
        let selected = Navigator::new(&self.catalog, &mut self.progress).select_puzzle(id);
        self.settle();
        selected
    }

    /// Forget all progress and cookies and start over from the first puzzle
    pub fn reset_all(&mut self) {
        for credit in self.controller.reset() {
            self.emit(&GameEvent::CreditDiscarded {
                puzzle_id: credit.puzzle_id,
            });
        }
        self.progress.reset();
        self.cookies.reset();
        if let Some(tracker) = self.connect.as_mut() {
            tracker.reset();
        }
        self.finished_announced = false;
        info!("All progress reset");
        self.emit(&GameEvent::ProgressReset);
        self.settle();
    }

    /// Make the cookie total match the rewards of the completed puzzles
    pub fn reconcile_cookies(&mut self) -> u64 {
        self.settle();
        let expected = total_for(&self.catalog, self.progress.completed());
        if expected != self.cookies.total() {
            info!(
                "Reconciling cookie total {} -> {}",
                self.cookies.total(),
                expected
            );
            self.cookies.set(i64::try_from(expected).unwrap_or(i64::MAX));
        }
        self.cookies.total()
    }

    fn settle(&mut self) {
        let now = self.clock.now();
        let resolutions = self
            .controller
            .resolve_due(now, &mut self.cookies, &mut self.progress);
        for resolution in resolutions {
            let event = match resolution {
                CreditResolution::Applied { puzzle_id, reward } => GameEvent::CookiesEarned {
                    puzzle_id,
                    amount: reward,
                    total: self.cookies.total(),
                },
                CreditResolution::Discarded { puzzle_id } => {
                    GameEvent::CreditDiscarded { puzzle_id }
                }
            };
            self.emit(&event);
        }

        let advanced =
            Navigator::new(&self.catalog, &mut self.progress).auto_advance_if_current_complete();
        if advanced == Some(NavigationOutcome::Finished) {
            self.announce_finished();
        }

        self.sync_session();
    }

    fn sync_session(&mut self) {
        let current = self.progress.current();
        let previous = self.controller.session().puzzle_id();
        if previous == Some(current) {
            return;
        }

        for credit in self.controller.sync_identity(Some(current)) {
            self.emit(&GameEvent::CreditDiscarded {
                puzzle_id: credit.puzzle_id,
            });
        }
        self.connect = self.catalog.get(current).and_then(ConnectTracker::for_puzzle);
        self.emit(&GameEvent::PuzzleChanged {
            from: previous,
            to: current,
        });
    }

    fn announce_finished(&mut self) {
        if self.finished_announced {
            return;
        }
        self.finished_announced = true;
        info!("Course finished with {} cookies", self.cookies.total());
        self.emit(&GameEvent::CourseFinished {
            total_cookies: self.cookies.total(),
        });
    }

    fn emit(&self, event: &GameEvent) {
        debug!("{}", event.description());
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for CookieGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieGame")
            .field("puzzles", &self.catalog.len())
            .field("progress", &self.progress)
            .field("cookies", &self.cookies)
            .field("session", &self.controller.session())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
