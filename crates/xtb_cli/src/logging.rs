//! tracing-subscriber setup for the CLI.

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Initialize the global subscriber.
///
/// Log output goes to stderr so stdout stays clean for the final counts.
pub fn setup(verbosity: u8, quiet: bool) {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .init();
}
