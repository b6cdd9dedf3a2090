//! HTTP client for the external dataset service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Transport-level dataset failures.
///
/// These never reach the prediction caller: the remote provider and the
/// remote validator both translate them into fallback behavior.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("dataset service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Row of `/datasets/stockyards`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockyardRow {
    pub stockyard_id: String,
    #[serde(default)]
    pub distance_from_plant_km: Option<f64>,
    #[serde(default)]
    pub max_capacity_tonnes: Option<f64>,
}

/// Row of `/datasets/stockyard_products`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockyardProductRow {
    pub stockyard_id: String,
    pub product_id: String,
    #[serde(default)]
    pub loading_cost: Option<f64>,
}

/// Row of `/datasets/product_wagon_compatibility`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompatibilityRow {
    pub product_id: String,
    #[serde(default)]
    pub wagon_capacity_tonnes: Option<f64>,
    #[serde(default)]
    pub preferred_wagon_type: Option<String>,
}

/// Row of `/datasets/stockyard_wagons`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockyardWagonRow {
    pub stockyard_id: String,
    #[serde(default)]
    pub available_wagons: Option<u32>,
}

/// Thin JSON client over the dataset service's read endpoints.
///
/// Every request carries the configured timeout; there are no retries. The
/// callers' fallback semantics are the availability story.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    base_url: String,
}

impl DatasetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn stockyards(&self) -> Result<Vec<StockyardRow>, DatasetError> {
        self.fetch("/datasets/stockyards").await
    }

    pub async fn stockyard_products(&self) -> Result<Vec<StockyardProductRow>, DatasetError> {
        self.fetch("/datasets/stockyard_products").await
    }

    pub async fn product_wagon_compatibility(&self) -> Result<Vec<CompatibilityRow>, DatasetError> {
        self.fetch("/datasets/product_wagon_compatibility").await
    }

    pub async fn stockyard_wagons(&self) -> Result<Vec<StockyardWagonRow>, DatasetError> {
        self.fetch("/datasets/stockyard_wagons").await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, DatasetError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DatasetError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
