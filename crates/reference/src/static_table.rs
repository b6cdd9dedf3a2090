//! In-process reference table for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;

use railcast_core::{ProductId, ReferenceData, StockyardId, WagonType};

use crate::provider::{ReferenceDataProvider, ReferenceError, DEFAULT_AVAILABLE_WAGONS};

/// Fixed reference table mirroring the master-data extract.
///
/// Unknown combinations resolve to [`ReferenceData::default_record`];
/// unknown stockyards report [`DEFAULT_AVAILABLE_WAGONS`]. This backend
/// never fails.
#[derive(Debug)]
pub struct StaticReferenceProvider {
    attributes: HashMap<(StockyardId, ProductId), ReferenceData>,
    wagons: HashMap<StockyardId, u32>,
}

impl StaticReferenceProvider {
    pub fn new() -> Self {
        let mut attributes = HashMap::new();
        for (stockyard, product, capacity, wagon_type, cost, distance) in [
            ("CMO_LOC_001", "PROD_HRP_001", 54.79, WagonType::Boy, 1500.0, 1617.27),
            ("CMO_LOC_001", "PROD_HRC_001", 51.69, WagonType::Boxn, 1200.0, 1617.27),
            ("CMO_LOC_002", "PROD_HRC_001", 54.17, WagonType::Boy, 1200.0, 1200.50),
            ("CMO_LOC_002", "PROD_CRS_001", 51.68, WagonType::Boxn, 1300.0, 1200.50),
        ] {
            attributes.insert(
                (StockyardId::new(stockyard), ProductId::new(product)),
                ReferenceData {
                    wagon_capacity_tonnes: capacity,
                    wagon_type,
                    loading_cost: cost,
                    distance_km: distance,
                    max_storage_capacity_tonnes: 5000.0,
                },
            );
        }

        let wagons = [
            ("CMO_LOC_001", 45),
            ("CMO_LOC_002", 35),
            ("CMO_LOC_003", 40),
            ("CMO_LOC_004", 30),
            ("CMO_LOC_005", 25),
            ("CMO_LOC_006", 50),
            ("CMO_LOC_007", 38),
            ("CMO_LOC_008", 42),
        ]
        .into_iter()
        .map(|(stockyard, count)| (StockyardId::new(stockyard), count))
        .collect();

        Self { attributes, wagons }
    }
}

impl Default for StaticReferenceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferenceDataProvider for StaticReferenceProvider {
    async fn lookup(
        &self,
        stockyard_id: &StockyardId,
        product_id: &ProductId,
    ) -> Result<ReferenceData, ReferenceError> {
        Ok(self
            .attributes
            .get(&(stockyard_id.clone(), product_id.clone()))
            .cloned()
            .unwrap_or_else(ReferenceData::default_record))
    }

    async fn available_wagons(&self, stockyard_id: &StockyardId) -> u32 {
        self.wagons
            .get(stockyard_id)
            .copied()
            .unwrap_or(DEFAULT_AVAILABLE_WAGONS)
    }
}
