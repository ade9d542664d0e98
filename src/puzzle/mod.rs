//! Puzzle domain types
//!
//! A [`Puzzle`] is an immutable record supplied by the content catalog. The
//! engine never edits puzzles; it only reads them to validate answers, derive
//! rewards and decide where the learner goes next.
//!
//! # Modules
//!
//! - [`answer`] - Tagged answer values with exact per-variant equality
//! - [`catalog`] - Ordered, validated puzzle collection
//! - [`validator`] - Pure answer validation
//! - [`reward`] - Cookie reward defaults and reconciliation totals

pub mod answer;
pub mod catalog;
pub mod reward;
pub mod validator;

pub use answer::{Answer, CONNECT_COMPLETED};
pub use catalog::{Catalog, CatalogOrder};
pub use reward::{reward_for, total_for};
pub use validator::{validate, ValidationResult};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a puzzle within the current catalog ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(u32);

impl PuzzleId {
    /// The first puzzle of every course
    pub const FIRST: PuzzleId = PuzzleId(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PuzzleId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for PuzzleId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of puzzle, which decides how answers are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    Pattern,
    Logic,
    Math,
    Sequence,
    /// Interactive grid; solved only through the completion sentinel
    Connect,
}

impl PuzzleKind {
    pub fn is_connect(self) -> bool {
        matches!(self, PuzzleKind::Connect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulties in course order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// A dot pair on the connect grid, given as `[row, col]` coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectPair {
    pub id: String,
    pub color: String,
    pub start: [u8; 2],
    pub end: [u8; 2],
}

/// Layout handed to the interactive grid collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectLayout {
    pub grid_size: u8,
    pub pairs: Vec<ConnectPair>,
}

impl ConnectLayout {
    /// Check that every dot sits inside the grid and pair ids are unique
    pub fn is_well_formed(&self) -> bool {
        let inside = |cell: [u8; 2]| cell[0] < self.grid_size && cell[1] < self.grid_size;
        let mut seen = std::collections::HashSet::new();
        !self.pairs.is_empty()
            && self
                .pairs
                .iter()
                .all(|pair| inside(pair.start) && inside(pair.end) && seen.insert(pair.id.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: PuzzleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PuzzleKind,
    pub difficulty: Difficulty,
    pub correct_answer: Answer,
    #[serde(default)]
    pub options: Vec<Answer>,
    pub cookies_reward: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<ConnectLayout>,
}

impl Puzzle {
    /// Build a multiple-choice puzzle rewarded with the difficulty default
    pub fn choice(
        id: u32,
        title: impl Into<String>,
        kind: PuzzleKind,
        difficulty: Difficulty,
        correct_answer: impl Into<Answer>,
        options: Vec<Answer>,
    ) -> Self {
        Self {
            id: PuzzleId::new(id),
            title: title.into(),
            description: String::new(),
            kind,
            difficulty,
            correct_answer: correct_answer.into(),
            options,
            cookies_reward: reward_for(difficulty),
            connect: None,
        }
    }

    /// Build a connect puzzle solved by the grid collaborator
    pub fn connect(
        id: u32,
        title: impl Into<String>,
        difficulty: Difficulty,
        layout: Option<ConnectLayout>,
    ) -> Self {
        Self {
            id: PuzzleId::new(id),
            title: title.into(),
            description: String::new(),
            kind: PuzzleKind::Connect,
            difficulty,
            correct_answer: Answer::completed(),
            options: Vec::new(),
            cookies_reward: reward_for(difficulty),
            connect: layout,
        }
    }

    #[must_use]
    pub fn with_reward(mut self, cookies_reward: u32) -> Self {
        self.cookies_reward = cookies_reward;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_connect(&self) -> bool {
        self.kind.is_connect()
    }
}
