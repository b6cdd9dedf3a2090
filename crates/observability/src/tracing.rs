//! Tracing setup for the prediction service.
//!
//! One JSON line per event so the dispatch logs can be shipped as-is;
//! per-stage prediction events come through the pipeline's trace seam and
//! land here like any other span.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON events, `RUST_LOG`-driven filtering,
/// `info` when no filter is set.
///
/// Losing the race for the global subscriber is fine; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
