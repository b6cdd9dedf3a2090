use thiserror::Error;

use railcast_model::ModelError;
use railcast_reference::ReferenceError;

/// Pipeline failure taxonomy.
///
/// Transient reference-data failures never appear here: the providers
/// resolve them to the documented defaults. What remains is what the caller
/// must act on.
#[derive(Debug, Error)]
pub enum PredictError {
    /// One or more input violations; the full accumulated list, verbatim.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The hard reference-data case (unknown stockyard).
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Model boundary failure during inference or projection.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Anything unexpected; carries the message, never a backtrace.
    #[error("internal error: {0}")]
    Internal(String),
}
