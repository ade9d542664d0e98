//! Per-puzzle session state

use crate::puzzle::{Answer, PuzzleId, ValidationResult};
use serde::Serialize;

/// Lifecycle of one puzzle attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum SessionPhase {
    /// Waiting for a correct answer
    #[default]
    Unanswered,
    /// Answered correctly, the credit is still pending
    Solved { reward: u32 },
    /// Cookies added and the puzzle marked completed
    Credited,
}

impl SessionPhase {
    pub fn accepts_answers(self) -> bool {
        matches!(self, SessionPhase::Unanswered)
    }

    pub fn is_solved(self) -> bool {
        !self.accepts_answers()
    }

    pub fn is_credited(self) -> bool {
        matches!(self, SessionPhase::Credited)
    }
}

/// Transient state of the puzzle on screen. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PuzzleSession {
    pub(crate) puzzle_id: Option<PuzzleId>,
    pub(crate) phase: SessionPhase,
    pub(crate) selected_answer: Option<Answer>,
    pub(crate) last_result: Option<ValidationResult>,
}

impl PuzzleSession {
    pub fn for_puzzle(puzzle_id: Option<PuzzleId>) -> Self {
        Self {
            puzzle_id,
            ..Self::default()
        }
    }

    pub fn puzzle_id(&self) -> Option<PuzzleId> {
        self.puzzle_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn selected_answer(&self) -> Option<&Answer> {
        self.selected_answer.as_ref()
    }

    /// Back to an unanswered attempt on the same puzzle
    pub fn clear(&mut self) {
        *self = Self::for_puzzle(self.puzzle_id);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            puzzle_id: self.puzzle_id,
            selected_answer: self.selected_answer.clone(),
            is_solved: self.phase.is_solved(),
            show_success: self.phase.is_credited(),
            last_result: self.last_result,
        }
    }
}

/// What the presentation layer renders for the current puzzle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub puzzle_id: Option<PuzzleId>,
    pub selected_answer: Option<Answer>,
    pub is_solved: bool,
    /// Set once the credit has landed and the success view may be shown
    pub show_success: bool,
    pub last_result: Option<ValidationResult>,
}
