//! The opaque prediction capability and the shipped linear implementation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::FeatureSchema;

/// Raw tonnage predictor.
///
/// Treated as a pure function by the pipeline: no interior mutability, safe
/// to share across concurrent requests behind an `Arc`.
pub trait SupplyModel: Send + Sync + 'static {
    /// Predict raw 7-day supply tonnage from a schema-ordered input vector.
    fn predict(&self, input: &[f64]) -> Result<f64, ModelError>;
}

/// Linear model loaded from a JSON artifact: `intercept + weights · input`.
///
/// The shipped artifact format is deliberately simple; anything smarter only
/// has to implement [`SupplyModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSupplyModel {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearSupplyModel {
    pub fn new(intercept: f64, weights: Vec<f64>) -> Self {
        Self { intercept, weights }
    }

    /// Load the artifact and check its width against the feature schema.
    ///
    /// Fails fast: a width mismatch at startup means the artifact and schema
    /// come from different training runs.
    pub fn from_path(path: impl AsRef<Path>, schema: &FeatureSchema) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Artifact {
            path: path.display().to_string(),
            source,
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        if model.weights.len() != schema.width() {
            return Err(ModelError::SchemaMismatch(format!(
                "model carries {} weights but the schema declares {} columns",
                model.weights.len(),
                schema.width()
            )));
        }
        Ok(model)
    }
}

impl SupplyModel for LinearSupplyModel {
    fn predict(&self, input: &[f64]) -> Result<f64, ModelError> {
        if input.len() != self.weights.len() {
            return Err(ModelError::SchemaMismatch(format!(
                "input vector has {} values, model expects {}",
                input.len(),
                self.weights.len()
            )));
        }
        let prediction = self.intercept
            + self
                .weights
                .iter()
                .zip(input)
                .map(|(weight, value)| weight * value)
                .sum::<f64>();
        if !prediction.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(prediction)
    }
}
