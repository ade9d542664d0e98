//! Persisted record layouts

use crate::puzzle::PuzzleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const COOKIE_KEY: &str = "cookie-storage";
pub const PROGRESS_KEY: &str = "puzzle-storage";
pub const ORDER_KEY: &str = "catalog-order";

/// `{ "totalCookies": n }`
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub total_cookies: u64,
}

/// `{ "currentPuzzleId": n, "completedPuzzleIds": [..] }`
///
/// The completed ids are a set; the stored array order carries no meaning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_puzzle_id: PuzzleId,
    #[serde(default)]
    pub completed_puzzle_ids: BTreeSet<PuzzleId>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            current_puzzle_id: PuzzleId::FIRST,
            completed_puzzle_ids: BTreeSet::new(),
        }
    }
}

/// Seed of a shuffled catalog, kept so persisted ids stay meaningful
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRecord {
    pub seed: u64,
}
