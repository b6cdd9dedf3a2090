//! `railcast-core`: domain foundation for the wagon-allocation pipeline.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no model
//! runtime): identifiers, the prediction request, reference data, the
//! derived feature vector, and the constraint-engine result.

pub mod constraint;
pub mod features;
pub mod id;
pub mod reference;
pub mod request;

pub use constraint::{ConstraintResult, Rule};
pub use features::FeatureVector;
pub use id::{ProductId, StockyardId};
pub use reference::{ReferenceData, WagonType};
pub use request::{PredictionDraft, PredictionRequest};
