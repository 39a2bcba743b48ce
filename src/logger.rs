//! Logging utilities

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Honors `RUST_LOG`, defaults to `info`.
/// Call once from the consuming binary.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
