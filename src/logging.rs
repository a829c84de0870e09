//! Structured logging setup for the binary.
//!
//! The library only emits `tracing` events and spans; installing a subscriber
//! is left to whoever embeds it.

use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Environment variable consulted when `RUST_LOG` is not set.
pub const LOG_ENV: &str = "CAMPUS_SEARCH_LOG";

fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("campus_search={level}"),
        (true, None) => "campus_search=debug".to_string(),
        (false, None) => "campus_search=warn".to_string(),
    }
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG`, then [`LOG_ENV`], take precedence over the CLI flags.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
