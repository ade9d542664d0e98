//! Answer values submitted by the learner

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sentinel reported by the connect grid once every pair is joined
pub const CONNECT_COMPLETED: &str = "completed";

/// A submitted or expected answer.
///
/// Numbers compare numerically, so `8` and `8.0` are the same answer. Numbers
/// and text never compare equal to each other: `Number(8.0)` and `Text("8")`
/// are different answers.
///
/// JSON numbers are always finite; a `NaN` built by hand equals nothing,
/// itself included.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Text(String),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    /// The answer a connect puzzle accepts
    pub fn completed() -> Self {
        Answer::Text(CONNECT_COMPLETED.to_string())
    }

    pub fn is_completed_sentinel(&self) -> bool {
        matches!(self, Answer::Text(text) if text == CONNECT_COMPLETED)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(value) => Some(value),
            Answer::Number(_) => None,
        }
    }
}

/// The value as an integer when it has no fractional part
fn as_whole(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Answer::Number(a), Answer::Number(b)) => a == b,
            (Answer::Text(a), Answer::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Answer {}

impl Hash for Answer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Answer::Number(value) => {
                0u8.hash(state);
                // -0.0 == 0.0, so both hash as 0.0
                let value = if *value == 0.0 { 0.0 } else { *value };
                value.to_bits().hash(state);
            }
            Answer::Text(value) => {
                1u8.hash(state);
                value.hash(state);
            }
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::Number(value) => match as_whole(*value) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(*value),
            },
            Answer::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Number(value)
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Number(value as f64)
    }
}

impl From<i32> for Answer {
    fn from(value: i32) -> Self {
        Answer::Number(f64::from(value))
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(value) => match as_whole(*value) {
                Some(whole) => write!(f, "{whole}"),
                None => write!(f, "{value}"),
            },
            Answer::Text(value) => write!(f, "{value}"),
        }
    }
}
