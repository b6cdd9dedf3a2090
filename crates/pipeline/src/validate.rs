//! Input validation, local and dataset-backed.
//!
//! Both backends accumulate every violation instead of short-circuiting; the
//! caller rejects the request with the full list.

use async_trait::async_trait;
use tracing::warn;

use railcast_core::PredictionDraft;
use railcast_reference::DatasetClient;

const MAX_INVENTORY_TONNES: f64 = 10_000.0;
const MAX_DEMAND_TONNES: f64 = 5_000.0;

/// Input validation capability (two selectable backends).
#[async_trait]
pub trait Validator: Send + Sync + 'static {
    /// Check a raw draft; an empty list means valid.
    async fn validate(&self, draft: &PredictionDraft) -> Vec<String>;
}

fn check_presence(draft: &PredictionDraft, errors: &mut Vec<String>) {
    if draft.stockyard_id.is_none() {
        errors.push("Missing required field: stockyard_id".to_string());
    }
    if draft.product_id.is_none() {
        errors.push("Missing required field: product_id".to_string());
    }
    if draft.current_inventory.is_none() {
        errors.push("Missing required field: current_inventory".to_string());
    }
    if draft.next_7day_demand.is_none() {
        errors.push("Missing required field: next_7day_demand".to_string());
    }
}

// Bounds are inclusive: exactly 10000 / 5000 passes.
fn check_ranges(draft: &PredictionDraft, errors: &mut Vec<String>) {
    if let Some(inventory) = draft.current_inventory {
        if inventory < 0.0 {
            errors.push("Inventory cannot be negative".to_string());
        }
        if inventory > MAX_INVENTORY_TONNES {
            errors.push("Inventory value too high (max 10000)".to_string());
        }
    }
    if let Some(demand) = draft.next_7day_demand {
        if demand < 0.0 {
            errors.push("Demand cannot be negative".to_string());
        }
        if demand > MAX_DEMAND_TONNES {
            errors.push("Demand value too high (max 5000)".to_string());
        }
    }
}

/// Format/range validation against the recognized id namespaces. No IO.
#[derive(Debug, Default)]
pub struct LocalValidator;

#[async_trait]
impl Validator for LocalValidator {
    async fn validate(&self, draft: &PredictionDraft) -> Vec<String> {
        let mut errors = Vec::new();
        check_presence(draft, &mut errors);
        if let Some(stockyard_id) = &draft.stockyard_id {
            if !stockyard_id.has_valid_prefix() {
                errors.push("Invalid stockyard ID format".to_string());
            }
        }
        if let Some(product_id) = &draft.product_id {
            if !product_id.has_valid_prefix() {
                errors.push("Invalid product ID format".to_string());
            }
        }
        check_ranges(draft, &mut errors);
        errors
    }
}

/// Existence/compatibility validation against the live dataset service.
///
/// A service failure appends a distinct "unable to verify" violation rather
/// than silently passing: unverifiable input is rejected input.
#[derive(Debug, Clone)]
pub struct RemoteValidator {
    client: DatasetClient,
}

impl RemoteValidator {
    pub fn new(client: DatasetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Validator for RemoteValidator {
    async fn validate(&self, draft: &PredictionDraft) -> Vec<String> {
        let mut errors = Vec::new();
        check_presence(draft, &mut errors);

        if let Some(stockyard_id) = &draft.stockyard_id {
            match self.client.stockyards().await {
                Ok(rows) => {
                    let known = rows
                        .iter()
                        .any(|row| row.stockyard_id == stockyard_id.as_str());
                    if !known {
                        errors.push(format!("Stockyard ID not found: {stockyard_id}"));
                    }
                }
                Err(error) => {
                    warn!(%error, "stockyard validation lookup failed");
                    errors.push(
                        "Validation unavailable: could not verify stockyard id".to_string(),
                    );
                }
            }
        }

        if let (Some(stockyard_id), Some(product_id)) = (&draft.stockyard_id, &draft.product_id) {
            match self.client.stockyard_products().await {
                Ok(rows) => {
                    let compatible = rows.iter().any(|row| {
                        row.stockyard_id == stockyard_id.as_str()
                            && row.product_id == product_id.as_str()
                    });
                    if !compatible {
                        errors.push(format!(
                            "Product {product_id} not available at stockyard {stockyard_id}"
                        ));
                    }
                }
                Err(error) => {
                    warn!(%error, "stockyard/product validation lookup failed");
                    errors.push(
                        "Validation unavailable: could not verify stockyard/product compatibility"
                            .to_string(),
                    );
                }
            }
        }

        check_ranges(draft, &mut errors);
        errors
    }
}
