//! Session controller: answer handling and the deferred credit

use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::scheduler::{CreditScheduler, PendingCredit};
use super::state::{PuzzleSession, SessionPhase, SessionSnapshot};
use crate::config::DEFAULT_CREDIT_DELAY;
use crate::puzzle::{validate, Answer, Puzzle, PuzzleId, ValidationResult};
use crate::state::{CookieStore, ProgressStore};

/// Result of a deferred credit coming due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditResolution {
    Applied { puzzle_id: PuzzleId, reward: u32 },
    /// The learner had already left the puzzle
    Discarded { puzzle_id: PuzzleId },
}

/// Drives one puzzle attempt from first answer to credit
#[derive(Debug)]
pub struct SessionController {
    pub(super) session: PuzzleSession,
    credits: CreditScheduler,
    credit_delay: Duration,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(DEFAULT_CREDIT_DELAY)
    }
}

impl SessionController {
    pub fn new(credit_delay: Duration) -> Self {
        Self {
            session: PuzzleSession::default(),
            credits: CreditScheduler::new(),
            credit_delay,
        }
    }

    pub fn credit_delay(&self) -> Duration {
        self.credit_delay
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Follow the puzzle identity shown to the learner.
    ///
    /// A new identity starts a fresh attempt and cancels credits scheduled
    /// for any other puzzle. Returns the cancelled credits.
    pub fn sync_identity(&mut self, current: Option<PuzzleId>) -> Vec<PendingCredit> {
        if self.session.puzzle_id == current {
            return Vec::new();
        }
        debug!(
            "Session identity {:?} -> {:?}",
            self.session.puzzle_id, current
        );
        self.session = PuzzleSession::for_puzzle(current);
        self.credits.cancel_stale(current)
    }

    /// Submit an answer for `puzzle`.
    ///
    /// Returns `None` without touching anything when the attempt is already
    /// solved or the puzzle was completed earlier.
    pub fn submit(
        &mut self,
        puzzle: &Puzzle,
        answer: Answer,
        already_completed: bool,
        now: Instant,
    ) -> Option<ValidationResult> {
        if self.session.puzzle_id != Some(puzzle.id) {
            self.sync_identity(Some(puzzle.id));
        }
        if already_completed {
            debug!("Puzzle {} already completed, answer ignored", puzzle.id);
            return None;
        }
        if !self.session.phase.accepts_answers() {
            debug!("Puzzle {} already solved, answer ignored", puzzle.id);
            return None;
        }

        let result = validate(puzzle, &answer);
        debug!(
            "Puzzle {} answer {} -> {}",
            puzzle.id, answer, result.message
        );
        self.session.selected_answer = Some(answer);
        self.session.last_result = Some(result);

        if result.is_correct {
            let reward = puzzle.cookies_reward;
            self.session.phase = SessionPhase::Solved { reward };
            self.credits.schedule(PendingCredit {
                puzzle_id: puzzle.id,
                reward,
                due_at: now + self.credit_delay,
            });
        }
        Some(result)
    }

    /// Run every credit due at `now`.
    ///
    /// A credit is applied only while its puzzle is still the active, solved
    /// session; otherwise it is discarded.
    pub fn resolve_due(
        &mut self,
        now: Instant,
        cookies: &mut CookieStore,
        progress: &mut ProgressStore,
    ) -> Vec<CreditResolution> {
        self.credits
            .take_due(now)
            .into_iter()
            .map(|credit| {
                let active = self.session.puzzle_id == Some(credit.puzzle_id)
                    && matches!(self.session.phase, SessionPhase::Solved { .. });
                if !active {
                    debug!("Discarding stale credit for puzzle {}", credit.puzzle_id);
                    return CreditResolution::Discarded {
                        puzzle_id: credit.puzzle_id,
                    };
                }

                cookies.add(i64::from(credit.reward));
                progress.mark_completed(credit.puzzle_id);
                self.session.phase = SessionPhase::Credited;
                info!(
                    "Credited {} cookies for puzzle {}",
                    credit.reward, credit.puzzle_id
                );
                CreditResolution::Applied {
                    puzzle_id: credit.puzzle_id,
                    reward: credit.reward,
                }
            })
            .collect()
    }

    /// Start the current attempt over. Pending credits are cancelled and
    /// returned.
    pub fn reset(&mut self) -> Vec<PendingCredit> {
        self.session.clear();
        self.credits.clear()
    }

    pub fn has_pending(&self) -> bool {
        !self.credits.is_empty()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.credits.next_due()
    }
}
