//! Ordered puzzle catalog
//!
//! The catalog is the externally supplied course content. It is validated once
//! on construction and is immutable afterwards. Ids are dense: the puzzle at
//! position `n` of the catalog always has id `n + 1`.

use super::{reward_for, Answer, ConnectLayout, Difficulty, Puzzle, PuzzleId, PuzzleKind};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../data/puzzles.json");

/// How the catalog is arranged for a learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogOrder {
    /// Keep the authored order
    #[default]
    Stable,
    /// Easy, then medium, then hard; each group shuffled with the seed
    Shuffled { seed: u64 },
}

/// Puzzle as written by content authors; the reward may be omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleRecord {
    id: PuzzleId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    kind: PuzzleKind,
    difficulty: Difficulty,
    correct_answer: Answer,
    #[serde(default)]
    options: Vec<Answer>,
    #[serde(default)]
    cookies_reward: Option<u32>,
    #[serde(default)]
    connect: Option<ConnectLayout>,
}

impl From<PuzzleRecord> for Puzzle {
    fn from(record: PuzzleRecord) -> Self {
        Puzzle {
            id: record.id,
            title: record.title,
            description: record.description,
            kind: record.kind,
            difficulty: record.difficulty,
            correct_answer: record.correct_answer,
            options: record.options,
            cookies_reward: record
                .cookies_reward
                .unwrap_or_else(|| reward_for(record.difficulty)),
            connect: record.connect,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Create a catalog, checking every schema invariant
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, puzzle) in puzzles.iter().enumerate() {
            let expected = PuzzleId::new(index as u32 + 1);
            if !seen.insert(puzzle.id) {
                return Err(Error::catalog(format!("duplicate puzzle id {}", puzzle.id)));
            }
            if puzzle.id != expected {
                return Err(Error::catalog(format!(
                    "puzzle at position {} has id {}, expected {}",
                    index + 1,
                    puzzle.id,
                    expected
                )));
            }
            validate_puzzle(puzzle)?;
        }
        Ok(Self { puzzles })
    }

    /// Parse the JSON array format used by the front-end content
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<PuzzleRecord> = serde_json::from_str(json)?;
        Self::new(records.into_iter().map(Puzzle::from).collect())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!(
            "Loaded catalog with {} puzzles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The bundled CodeCookies course
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Rearrange the catalog and renumber ids from 1
    pub fn arranged(self, order: CatalogOrder) -> Self {
        match order {
            CatalogOrder::Stable => self,
            CatalogOrder::Shuffled { seed } => self.shuffled_by_difficulty(seed),
        }
    }

    fn shuffled_by_difficulty(self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut groups: Vec<Vec<Puzzle>> = Difficulty::ALL.iter().map(|_| Vec::new()).collect();
        for puzzle in self.puzzles {
            let slot = Difficulty::ALL
                .iter()
                .position(|difficulty| *difficulty == puzzle.difficulty)
                .unwrap_or(0);
            groups[slot].push(puzzle);
        }

        let puzzles = groups
            .into_iter()
            .flat_map(|mut group| {
                group.shuffle(&mut rng);
                group
            })
            .enumerate()
            .map(|(index, mut puzzle)| {
                puzzle.id = PuzzleId::new(index as u32 + 1);
                puzzle
            })
            .collect();

        debug!("Shuffled catalog by difficulty with seed {}", seed);
        Self { puzzles }
    }

    pub fn get(&self, id: PuzzleId) -> Option<&Puzzle> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.puzzles.get(index)
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    /// Ids in catalog order
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = PuzzleId> + '_ {
        self.puzzles.iter().map(|puzzle| puzzle.id)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn last_id(&self) -> Option<PuzzleId> {
        self.puzzles.last().map(|puzzle| puzzle.id)
    }
}

fn validate_puzzle(puzzle: &Puzzle) -> Result<()> {
    if puzzle.cookies_reward == 0 {
        return Err(Error::catalog(format!(
            "puzzle {} must reward at least one cookie",
            puzzle.id
        )));
    }

    if puzzle.is_connect() {
        if !puzzle.correct_answer.is_completed_sentinel() {
            return Err(Error::catalog(format!(
                "connect puzzle {} must expect the completion sentinel",
                puzzle.id
            )));
        }
        if let Some(layout) = &puzzle.connect {
            if !layout.is_well_formed() {
                return Err(Error::catalog(format!(
                    "connect puzzle {} has a malformed grid layout",
                    puzzle.id
                )));
            }
        }
        return Ok(());
    }

    if !puzzle.options.contains(&puzzle.correct_answer) {
        return Err(Error::catalog(format!(
            "puzzle {} correct answer '{}' is not one of its options",
            puzzle.id, puzzle.correct_answer
        )));
    }
    Ok(())
}
