//! Persisted learner state
//!
//! Two write-through stores back the whole game:
//! - [`ProgressStore`] - current puzzle pointer and the completion set
//! - [`CookieStore`] - total cookies earned
//!
//! Both are plain service objects. They are built once per learner session
//! and handed to the engine, so tests can construct fresh ones at will.

pub mod cookies;
pub mod order;
pub mod progress;
pub mod types;


pub use cookies::CookieStore;
pub use order::catalog_seed;
pub use progress::ProgressStore;
pub use types::*;
