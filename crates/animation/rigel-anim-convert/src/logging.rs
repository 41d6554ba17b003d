//! stderr logging for the converter binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a subscriber that prints bare messages to stderr, filtered by
/// `RUST_LOG` (default `info`). Safe to call more than once.
pub fn enable_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = fmt::format()
        .without_time()
        .with_target(false)
        .with_level(false)
        .compact();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .with_writer(std::io::stderr)
        .try_init();
}
