//! Process-wide service state, built once at startup.

use std::sync::Arc;

use tracing::{error, warn};

use railcast_model::{FeatureSchema, LinearSupplyModel};
use railcast_pipeline::{LocalValidator, Orchestrator, RemoteValidator, Validator};
use railcast_reference::{
    DatasetClient, ReferenceDataProvider, RemoteReferenceProvider, StaticReferenceProvider,
};

use crate::config::ApiConfig;

/// Immutable service context shared by all requests.
///
/// `Unavailable` is the fail-fast outcome of a bad startup: the process
/// serves health/diagnostics but rejects predictions until restarted with a
/// loadable model and schema.
pub enum ServiceState {
    Ready { orchestrator: Arc<Orchestrator> },
    Unavailable { reason: String, features_loaded: bool },
}

impl ServiceState {
    pub fn model_loaded(&self) -> bool {
        matches!(self, ServiceState::Ready { .. })
    }

    pub fn features_loaded(&self) -> bool {
        match self {
            ServiceState::Ready { .. } => true,
            ServiceState::Unavailable {
                features_loaded, ..
            } => *features_loaded,
        }
    }
}

/// Load artifacts and wire the pipeline backends.
pub fn build_state(config: &ApiConfig) -> Arc<ServiceState> {
    let schema = match FeatureSchema::from_path(&config.schema_path) {
        Ok(schema) => Arc::new(schema),
        Err(err) => {
            error!(error = %err, path = %config.schema_path, "feature schema failed to load; service unavailable");
            return Arc::new(ServiceState::Unavailable {
                reason: err.to_string(),
                features_loaded: false,
            });
        }
    };

    let model = match LinearSupplyModel::from_path(&config.model_path, &schema) {
        Ok(model) => Arc::new(model),
        Err(err) => {
            error!(error = %err, path = %config.model_path, "model failed to load; service unavailable");
            return Arc::new(ServiceState::Unavailable {
                reason: err.to_string(),
                features_loaded: true,
            });
        }
    };

    let (validator, provider) = build_backends(config);
    let orchestrator = Arc::new(Orchestrator::new(validator, provider, model, schema));
    Arc::new(ServiceState::Ready { orchestrator })
}

fn build_backends(config: &ApiConfig) -> (Arc<dyn Validator>, Arc<dyn ReferenceDataProvider>) {
    if let Some(url) = &config.dataset_service_url {
        match DatasetClient::new(url.clone(), config.dataset_timeout) {
            Ok(client) => {
                return (
                    Arc::new(RemoteValidator::new(client.clone())),
                    Arc::new(RemoteReferenceProvider::new(client)),
                );
            }
            Err(err) => {
                warn!(error = %err, "dataset client failed to build; falling back to static backends");
            }
        }
    }
    let provider = Arc::new(StaticReferenceProvider::new());
    (Arc::new(LocalValidator), provider)
}
