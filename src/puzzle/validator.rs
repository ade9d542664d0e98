//! Pure answer validation

use super::{Answer, Puzzle};
use serde::Serialize;

pub const MESSAGE_CORRECT: &str = "Correct! Great job!";
pub const MESSAGE_CONNECTED: &str = "Correct! All paths connected!";
pub const MESSAGE_INCORRECT: &str = "Not quite! Try again.";
pub const MESSAGE_INVALID_OPTION: &str = "Invalid option selected";

/// Outcome of checking one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid_option: bool,
    pub is_correct: bool,
    pub message: &'static str,
}

impl ValidationResult {
    fn invalid_option() -> Self {
        Self {
            is_valid_option: false,
            is_correct: false,
            message: MESSAGE_INVALID_OPTION,
        }
    }
}

/// Check whether the answer is one of the puzzle's offered options.
///
/// Connect puzzles have no options; any report from the grid is a valid
/// submission.
pub fn is_valid_option(puzzle: &Puzzle, answer: &Answer) -> bool {
    puzzle.is_connect() || puzzle.options.contains(answer)
}

/// Validate a submitted answer against a puzzle.
///
/// A number is never equal to text, even when they read the same, so a
/// submission of the wrong type is reported as an invalid option.
pub fn validate(puzzle: &Puzzle, answer: &Answer) -> ValidationResult {
    if puzzle.is_connect() {
        let is_correct = answer.is_completed_sentinel();
        return ValidationResult {
            is_valid_option: true,
            is_correct,
            message: if is_correct {
                MESSAGE_CONNECTED
            } else {
                MESSAGE_INCORRECT
            },
        };
    }

    if !is_valid_option(puzzle, answer) {
        return ValidationResult::invalid_option();
    }

    let is_correct = *answer == puzzle.correct_answer;
    ValidationResult {
        is_valid_option: true,
        is_correct,
        message: if is_correct {
            MESSAGE_CORRECT
        } else {
            MESSAGE_INCORRECT
        },
    }
}
