//! Dataset-service backed reference data with fallback semantics.

use async_trait::async_trait;
use tracing::warn;

use railcast_core::{ProductId, ReferenceData, StockyardId, WagonType};

use crate::client::{CompatibilityRow, DatasetClient, StockyardProductRow, StockyardRow};
use crate::provider::{ReferenceDataProvider, ReferenceError, DEFAULT_AVAILABLE_WAGONS};

/// Remote reference backend.
///
/// Failure semantics are deliberately asymmetric and must stay that way:
/// - the dataset service answered but the stockyard does not exist →
///   hard failure, the request cannot proceed;
/// - a relation or compatibility row is missing → per-field defaults, the
///   lookup still succeeds;
/// - the service call itself fails (timeout, non-2xx, bad payload) → the
///   whole lookup degrades to [`ReferenceData::default_record`].
#[derive(Debug, Clone)]
pub struct RemoteReferenceProvider {
    client: DatasetClient,
}

impl RemoteReferenceProvider {
    pub fn new(client: DatasetClient) -> Self {
        Self { client }
    }

    async fn fetch_all(
        &self,
    ) -> Result<
        (
            Vec<StockyardRow>,
            Vec<StockyardProductRow>,
            Vec<CompatibilityRow>,
        ),
        crate::client::DatasetError,
    > {
        let stockyards = self.client.stockyards().await?;
        let relations = self.client.stockyard_products().await?;
        let compatibility = self.client.product_wagon_compatibility().await?;
        Ok((stockyards, relations, compatibility))
    }
}

/// Assemble a reference record from dataset rows, per-field defaulting.
///
/// Split out of the provider so the fallback matrix is testable without a
/// live dataset service.
fn assemble(
    stockyard_id: &StockyardId,
    product_id: &ProductId,
    stockyards: &[StockyardRow],
    relations: &[StockyardProductRow],
    compatibility: &[CompatibilityRow],
) -> Result<ReferenceData, ReferenceError> {
    let defaults = ReferenceData::default_record();

    let stockyard = stockyards
        .iter()
        .find(|row| row.stockyard_id == stockyard_id.as_str())
        .ok_or_else(|| ReferenceError::UnknownStockyard(stockyard_id.clone()))?;

    let relation = relations.iter().find(|row| {
        row.stockyard_id == stockyard_id.as_str() && row.product_id == product_id.as_str()
    });
    let compat = compatibility
        .iter()
        .find(|row| row.product_id == product_id.as_str());

    Ok(ReferenceData {
        wagon_capacity_tonnes: compat
            .and_then(|row| row.wagon_capacity_tonnes)
            .unwrap_or(defaults.wagon_capacity_tonnes),
        wagon_type: compat
            .and_then(|row| row.preferred_wagon_type.as_deref())
            .map(WagonType::parse_or_default)
            .unwrap_or(defaults.wagon_type),
        loading_cost: relation
            .and_then(|row| row.loading_cost)
            .unwrap_or(defaults.loading_cost),
        distance_km: stockyard
            .distance_from_plant_km
            .unwrap_or(defaults.distance_km),
        max_storage_capacity_tonnes: stockyard
            .max_capacity_tonnes
            .unwrap_or(defaults.max_storage_capacity_tonnes),
    })
}

#[async_trait]
impl ReferenceDataProvider for RemoteReferenceProvider {
    async fn lookup(
        &self,
        stockyard_id: &StockyardId,
        product_id: &ProductId,
    ) -> Result<ReferenceData, ReferenceError> {
        match self.fetch_all().await {
            Ok((stockyards, relations, compatibility)) => assemble(
                stockyard_id,
                product_id,
                &stockyards,
                &relations,
                &compatibility,
            ),
            Err(error) => {
                warn!(%stockyard_id, %error, "dataset lookup failed, using default reference record");
                Ok(ReferenceData::default_record())
            }
        }
    }

    async fn available_wagons(&self, stockyard_id: &StockyardId) -> u32 {
        match self.client.stockyard_wagons().await {
            Ok(rows) => rows
                .iter()
                .find(|row| row.stockyard_id == stockyard_id.as_str())
                .and_then(|row| row.available_wagons)
                .unwrap_or(DEFAULT_AVAILABLE_WAGONS),
            Err(error) => {
                warn!(%stockyard_id, %error, "wagon availability lookup failed, using default count");
                DEFAULT_AVAILABLE_WAGONS
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Client pointed at the discard port: every request fails fast.
    fn unroutable_provider() -> RemoteReferenceProvider {
        let client = DatasetClient::new("http://127.0.0.1:9", Duration::from_millis(200))
            .expect("client should build");
        RemoteReferenceProvider::new(client)
    }

    fn rows() -> (
        Vec<StockyardRow>,
        Vec<StockyardProductRow>,
        Vec<CompatibilityRow>,
    ) {
        (
            vec![StockyardRow {
                stockyard_id: "CMO_LOC_001".to_string(),
                distance_from_plant_km: Some(1617.27),
                max_capacity_tonnes: Some(5000.0),
            }],
            vec![StockyardProductRow {
                stockyard_id: "CMO_LOC_001".to_string(),
                product_id: "PROD_HRP_001".to_string(),
                loading_cost: Some(1500.0),
            }],
            vec![CompatibilityRow {
                product_id: "PROD_HRP_001".to_string(),
                wagon_capacity_tonnes: Some(54.79),
                preferred_wagon_type: Some("BOY".to_string()),
            }],
        )
    }

    #[test]
    fn assemble_reads_all_three_sources() {
        let (stockyards, relations, compatibility) = rows();
        let data = assemble(
            &StockyardId::new("CMO_LOC_001"),
            &ProductId::new("PROD_HRP_001"),
            &stockyards,
            &relations,
            &compatibility,
        )
        .unwrap();
        assert_eq!(data.wagon_capacity_tonnes, 54.79);
        assert_eq!(data.wagon_type, WagonType::Boy);
        assert_eq!(data.loading_cost, 1500.0);
        assert_eq!(data.distance_km, 1617.27);
    }

    #[test]
    fn unknown_stockyard_is_a_hard_failure() {
        let (stockyards, relations, compatibility) = rows();
        let result = assemble(
            &StockyardId::new("CMO_LOC_404"),
            &ProductId::new("PROD_HRP_001"),
            &stockyards,
            &relations,
            &compatibility,
        );
        assert!(matches!(result, Err(ReferenceError::UnknownStockyard(_))));
    }

    #[test]
    fn missing_relation_and_compatibility_use_per_field_defaults() {
        let (stockyards, _, _) = rows();
        let data = assemble(
            &StockyardId::new("CMO_LOC_001"),
            &ProductId::new("PROD_NEW_001"),
            &stockyards,
            &[],
            &[],
        )
        .unwrap();
        // Stockyard fields survive, the rest falls back.
        assert_eq!(data.distance_km, 1617.27);
        assert_eq!(data.wagon_capacity_tonnes, 50.0);
        assert_eq!(data.wagon_type, WagonType::Boy);
        assert_eq!(data.loading_cost, 1500.0);
    }

    #[tokio::test]
    async fn transport_failure_degrades_lookup_to_default_record() {
        let data = unroutable_provider()
            .lookup(
                &StockyardId::new("CMO_LOC_001"),
                &ProductId::new("PROD_HRP_001"),
            )
            .await
            .unwrap();
        assert_eq!(data, ReferenceData::default_record());
    }

    #[tokio::test]
    async fn transport_failure_degrades_availability_to_default_count() {
        let count = unroutable_provider()
            .available_wagons(&StockyardId::new("CMO_LOC_001"))
            .await;
        assert_eq!(count, DEFAULT_AVAILABLE_WAGONS);
    }
}
