//! Puzzle session management
//!
//! A session covers one attempt at the puzzle on screen:
//! `Unanswered -> Solved -> Credited`. Moving to another puzzle starts a new
//! session; a credit still pending for the old one is dropped.

pub mod controller;
pub mod scheduler;
pub mod state;


pub use controller::{CreditResolution, SessionController};
pub use scheduler::{CreditScheduler, PendingCredit};
pub use state::{PuzzleSession, SessionPhase, SessionSnapshot};
