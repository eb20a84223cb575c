//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging for the inspector
///
/// `default_level` applies when `RUST_LOG` is not set. Calling this more
/// than once keeps the first logger.
pub fn setup_logging(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    if let Err(e) = Builder::from_env(env).format_timestamp_millis().try_init() {
        eprintln!("Logger already initialized: {}", e);
    }
}
