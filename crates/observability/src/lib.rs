//! Shared observability setup for the railcast binaries.

pub mod tracing;

/// Initialize process-wide observability. Call once, early in `main`;
/// repeated calls are harmless.
pub fn init() {
    tracing::init();
}
