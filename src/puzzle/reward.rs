//! Cookie reward calculation

use super::{Catalog, Difficulty, PuzzleId};
use std::collections::BTreeSet;

/// Default reward for authoring a puzzle of the given difficulty.
///
/// Crediting always uses the puzzle's own `cookies_reward`.
pub fn reward_for(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
    }
}

/// Sum of rewards over the completed puzzles present in the catalog
pub fn total_for(catalog: &Catalog, completed: &BTreeSet<PuzzleId>) -> u64 {
    catalog
        .iter()
        .filter(|puzzle| completed.contains(&puzzle.id))
        .map(|puzzle| u64::from(puzzle.cookies_reward))
        .sum()
}
