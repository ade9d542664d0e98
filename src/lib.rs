//! # CodeCookies
//!
//! Puzzle progression and reward engine for the CodeCookies learning game.
//! Learners walk an ordered catalog of small puzzles, earn cookies for correct
//! answers and keep their progress between visits.
//!
//! ## Usage
//!
//! ```no_run
//! use codecookies::{CookieGame, GameBuilder, GameConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GameConfig::load("codecookies.toml".as_ref())?;
//! let mut game: CookieGame = GameBuilder::from_config(&config)?.build()?;
//!
//! if let Some(result) = game.submit_answer(8) {
//!     println!("{}", result.message);
//! }
//! game.tick();
//! println!("{} cookies", game.total_cookies());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `puzzle` - Puzzle records, the catalog, answer validation and rewards
//! - `state` - Persisted progress and cookie stores
//! - `storage` - Key-value backends the stores write through to
//! - `navigation` - Next/previous incomplete puzzle policy
//! - `session` - Per-puzzle attempt state and the deferred credit
//! - `game` - The `CookieGame` facade and its events
//! - `config` - TOML configuration
//! - `logging` - Tracing subscriber setup
//! - `testing` - Deterministic clocks, observers and fixtures for tests

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod navigation;
pub mod puzzle;
pub mod session;
pub mod state;
pub mod storage;

pub mod testing;

pub use clock::{Clock, SystemClock};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{CookieGame, GameBuilder, GameEvent, GameObserver, ProgressSummary};
pub use navigation::NavigationOutcome;
pub use puzzle::{Answer, Catalog, CatalogOrder, Puzzle, PuzzleId, ValidationResult};
pub use session::SessionSnapshot;
