use thiserror::Error;

/// Failures at the model boundary.
///
/// `Artifact`/`Parse`/`SchemaMismatch` are configuration errors: they occur
/// at startup and mark the service unavailable. The rest occur per request
/// and surface as internal errors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Artifact {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model/schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("feature missing from derived vector: {0}")]
    MissingFeature(String),

    #[error("model produced a non-finite prediction")]
    NonFinite,
}
