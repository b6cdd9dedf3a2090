//! Environment-driven configuration for the API binary.

use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub model_path: String,
    pub schema_path: String,
    /// When set, validation and reference data go through the dataset
    /// service; when unset, the in-process static backends are used.
    pub dataset_service_url: Option<String>,
    pub dataset_timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let bind = std::env::var("RAILCAST_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let model_path = std::env::var("MODEL_PATH")
            .unwrap_or_else(|_| "models/supply_model.json".to_string());
        let schema_path = std::env::var("FEATURE_SCHEMA_PATH")
            .unwrap_or_else(|_| "models/feature_schema.json".to_string());

        let dataset_service_url = std::env::var("DATASET_SERVICE_URL").ok();
        if dataset_service_url.is_none() {
            tracing::info!("DATASET_SERVICE_URL not set; using static reference backends");
        }

        let dataset_timeout = std::env::var("DATASET_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(5));

        Self {
            bind,
            model_path,
            schema_path,
            dataset_service_url,
            dataset_timeout,
        }
    }
}
