//! # Telemetry
//!
//! Installs the process-wide tracing subscriber. The span example and the
//! factory switch only emit through the `tracing` facade; nothing is printed
//! until a subscriber is installed here (or by the embedding program).
//!
//! The filter comes from `RUST_LOG`, falling back to `info`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `RUST_LOG`, or [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Returns `false` when a global subscriber was already set, in which case
/// nothing changes.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install the global subscriber, ignoring repeat calls
pub fn init() {
    let _ = try_init();
}
