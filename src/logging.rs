//! Logging configuration and initialization

use crate::config::LoggingConfig;
use tracing::debug;

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed, which is the
/// normal case when several tests or an embedding host set one up first.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_target(config.verbose >= 2)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging started at {}", config.log_level());
    }
    installed
}
