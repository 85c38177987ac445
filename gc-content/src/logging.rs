// src/logging.rs
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

/// Maps the `-v` count to a log level. Warnings are always shown.
#[inline]
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber. Stdout is reserved for results.
#[inline]
pub fn init_logging(verbosity: u8) {
    // A subscriber may already be installed, e.g. when called from tests.
    let _ = fmt()
        .with_max_level(level_for_verbosity(verbosity))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
