//! Game events delivered to observers

use crate::puzzle::{Answer, PuzzleId, ValidationResult};

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The puzzle on screen changed
    PuzzleChanged {
        from: Option<PuzzleId>,
        to: PuzzleId,
    },
    AnswerChecked {
        puzzle_id: PuzzleId,
        answer: Answer,
        result: ValidationResult,
    },
    /// A correct answer was given; the credit follows after the delay
    PuzzleSolved { puzzle_id: PuzzleId, reward: u32 },
    CookiesEarned {
        puzzle_id: PuzzleId,
        amount: u32,
        total: u64,
    },
    /// A pending credit was dropped because the learner moved on
    CreditDiscarded { puzzle_id: PuzzleId },
    /// Every catalog puzzle is completed
    CourseFinished { total_cookies: u64 },
    ProgressReset,
}

impl GameEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            GameEvent::PuzzleChanged { from: Some(from), to } => {
                format!("Moved from puzzle {from} to puzzle {to}")
            }
            GameEvent::PuzzleChanged { from: None, to } => format!("Opened puzzle {to}"),
            GameEvent::AnswerChecked {
                puzzle_id,
                answer,
                result,
            } => format!("Puzzle {puzzle_id}: answer {answer}: {}", result.message),
            GameEvent::PuzzleSolved { puzzle_id, reward } => {
                format!("Puzzle {puzzle_id} solved, {reward} cookies pending")
            }
            GameEvent::CookiesEarned {
                puzzle_id,
                amount,
                total,
            } => format!("Earned {amount} cookies for puzzle {puzzle_id} ({total} total)"),
            GameEvent::CreditDiscarded { puzzle_id } => {
                format!("Pending credit for puzzle {puzzle_id} discarded")
            }
            GameEvent::CourseFinished { total_cookies } => {
                format!("All puzzles completed with {total_cookies} cookies")
            }
            GameEvent::ProgressReset => "Progress reset".to_string(),
        }
    }
}

/// Receives game events synchronously, in the order they happen
pub trait GameObserver: Send + Sync {
    fn on_event(&self, event: &GameEvent);
}
