//! `railcast-model`
//!
//! **Responsibility:** the ML model boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not apply business constraints (that is the pipeline's job).
//! - It emits a raw, unconstrained tonnage prediction, nothing else.
//!
//! The trained artifact is opaque to the rest of the system: anything
//! implementing [`SupplyModel`] can sit behind the orchestrator. The shipped
//! implementation is a linear model loaded from a JSON artifact, validated
//! against the feature schema at startup.

pub mod error;
pub mod schema;
pub mod supply;

pub use error::ModelError;
pub use schema::FeatureSchema;
pub use supply::{LinearSupplyModel, SupplyModel};
