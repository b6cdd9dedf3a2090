//! Inbound prediction request, raw and validated forms.

use serde::{Deserialize, Serialize};

use crate::id::{ProductId, StockyardId};

/// Raw prediction payload as received from the wire.
///
/// Every field is optional so that "missing required field" is a validation
/// outcome reported alongside the other violations, not a deserialization
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionDraft {
    #[serde(default)]
    pub stockyard_id: Option<StockyardId>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub current_inventory: Option<f64>,
    #[serde(default)]
    pub next_7day_demand: Option<f64>,
}

impl PredictionDraft {
    /// Promote a fully-populated draft into a request.
    ///
    /// Returns `None` if any field is absent; callers run the validator
    /// first, which reports the missing fields by name.
    pub fn build(&self) -> Option<PredictionRequest> {
        Some(PredictionRequest {
            stockyard_id: self.stockyard_id.clone()?,
            product_id: self.product_id.clone()?,
            current_inventory: self.current_inventory?,
            next_7day_demand: self.next_7day_demand?,
        })
    }
}

/// A validated prediction request. Immutable once built.
///
/// Tonnage fields are in tonnes; `next_7day_demand` is the forecast demand
/// over the next seven days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub stockyard_id: StockyardId,
    pub product_id: ProductId,
    pub current_inventory: f64,
    pub next_7day_demand: f64,
}
