//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset. Kept quiet so logs stay out of the way
/// of the interactive shell.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs on stderr, configurable via RUST_LOG. Stdout belongs to the shell.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
