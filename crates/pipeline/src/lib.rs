//! `railcast-pipeline`: the decision pipeline between a raw prediction
//! request and an actionable wagon order.
//!
//! Stages, in request order:
//! 1. [`validate`]: accumulate every input violation (two backends).
//! 2. [`features`]: expand the four-field request into the full training
//!    feature vector, deterministically.
//! 3. model inference (external capability, see `railcast-model`).
//! 4. [`rules`]: clamp, quantize, and minimum-enforce the raw tonnage with
//!    an ordered audit trail.
//!
//! [`orchestrator::Orchestrator`] sequences the stages and owns the error
//! taxonomy surfaced to the API layer.

pub mod error;
pub mod features;
pub mod orchestrator;
pub mod rules;
pub mod validate;

pub use error::PredictError;
pub use features::{derive, training_schema, FEATURE_COLUMNS};
pub use orchestrator::{Orchestrator, Prediction, PredictionTrace, TracingTrace};
pub use rules::{apply_rules, ConstraintEngine};
pub use validate::{LocalValidator, RemoteValidator, Validator};
