use async_trait::async_trait;
use thiserror::Error;

use railcast_core::{ProductId, ReferenceData, StockyardId};

/// Wagon count assumed for a stockyard with no availability record.
pub const DEFAULT_AVAILABLE_WAGONS: u32 = 30;

/// Hard reference-data failures.
///
/// Deliberately a one-variant enum: everything else a provider can run into
/// (missing rows, unreachable service, bad payloads) degrades to defaults
/// instead of erroring. Only an unknown stockyard stops a request, because a
/// prediction for a location that does not exist is meaningless.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("stockyard {0} not found in reference data")]
    UnknownStockyard(StockyardId),
}

/// Source of static stockyard × product attributes and wagon availability.
///
/// Attributes are fetched fresh per request; implementations make no caching
/// promises across calls.
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync + 'static {
    /// Attributes for the combination, falling back per the backend's
    /// documented default semantics.
    async fn lookup(
        &self,
        stockyard_id: &StockyardId,
        product_id: &ProductId,
    ) -> Result<ReferenceData, ReferenceError>;

    /// Wagons currently available at the stockyard.
    ///
    /// Infallible by contract: unknown stockyards and lookup failures report
    /// [`DEFAULT_AVAILABLE_WAGONS`].
    async fn available_wagons(&self, stockyard_id: &StockyardId) -> u32;
}
