//! Development-time tracing for debugging validators and the harness.
//!
//! Library code only emits `tracing` events (conflicting signals, content
//! faults); it never installs a subscriber. Harness binaries call [`init`]
//! once at startup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, so content defects
/// (duplicate signals, validator panics) surface without extra flags.
/// Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
