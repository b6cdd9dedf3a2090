//! Request orchestration: validator → deriver → model → constraint engine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use railcast_core::{ConstraintResult, PredictionDraft};
use railcast_model::{FeatureSchema, SupplyModel};
use railcast_reference::ReferenceDataProvider;

use crate::error::PredictError;
use crate::features::derive;
use crate::rules::ConstraintEngine;
use crate::validate::Validator;

/// Per-stage trace seam.
///
/// Observability side channel, not part of the response contract: the
/// default implementation emits `tracing` events, tests can swap in a
/// recording sink.
pub trait PredictionTrace: Send + Sync + 'static {
    fn validated(&self, request_id: Uuid, violations: &[String]);
    fn raw_prediction(&self, request_id: Uuid, tonnes: f64);
    fn rules_applied(&self, request_id: Uuid, result: &ConstraintResult);
}

/// Default trace sink backed by `tracing`.
#[derive(Debug, Default)]
pub struct TracingTrace;

impl PredictionTrace for TracingTrace {
    fn validated(&self, request_id: Uuid, violations: &[String]) {
        if violations.is_empty() {
            info!(%request_id, "prediction request validated");
        } else {
            warn!(%request_id, ?violations, "prediction request rejected");
        }
    }

    fn raw_prediction(&self, request_id: Uuid, tonnes: f64) {
        info!(%request_id, raw_tonnes = tonnes, "raw model prediction");
    }

    fn rules_applied(&self, request_id: Uuid, result: &ConstraintResult) {
        info!(
            %request_id,
            final_supply = result.final_supply,
            wagons = result.wagons_required,
            rules = ?result.rule_names(),
            "business rules applied"
        );
    }
}

/// Outcome of one orchestrated prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub request_id: Uuid,
    pub raw_prediction: f64,
    pub result: ConstraintResult,
}

/// Sequences the pipeline stages for one request.
///
/// Holds only immutable shared state (model, schema, backends); concurrent
/// predictions need no coordination.
pub struct Orchestrator {
    validator: Arc<dyn Validator>,
    provider: Arc<dyn ReferenceDataProvider>,
    engine: ConstraintEngine,
    model: Arc<dyn SupplyModel>,
    schema: Arc<FeatureSchema>,
    trace: Arc<dyn PredictionTrace>,
}

impl Orchestrator {
    pub fn new(
        validator: Arc<dyn Validator>,
        provider: Arc<dyn ReferenceDataProvider>,
        model: Arc<dyn SupplyModel>,
        schema: Arc<FeatureSchema>,
    ) -> Self {
        Self {
            validator,
            engine: ConstraintEngine::new(provider.clone()),
            provider,
            model,
            schema,
            trace: Arc::new(TracingTrace),
        }
    }

    pub fn with_trace(mut self, trace: Arc<dyn PredictionTrace>) -> Self {
        self.trace = trace;
        self
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run the full pipeline for one draft request.
    pub async fn predict(&self, draft: &PredictionDraft) -> Result<Prediction, PredictError> {
        let request_id = Uuid::now_v7();

        let violations = self.validator.validate(draft).await;
        self.trace.validated(request_id, &violations);
        if !violations.is_empty() {
            return Err(PredictError::Validation(violations));
        }

        let request = draft.build().ok_or_else(|| {
            // Unreachable with a correct validator; surfaced, not swallowed.
            PredictError::Internal("draft passed validation but is incomplete".to_string())
        })?;

        let reference = self
            .provider
            .lookup(&request.stockyard_id, &request.product_id)
            .await?;

        let features = derive(&request, &reference, Utc::now());
        let input = self.schema.project(&features)?;
        let raw_prediction = self.model.predict(&input)?;
        self.trace.raw_prediction(request_id, raw_prediction);

        let result = self
            .engine
            .apply(raw_prediction, &features, &request.stockyard_id)
            .await;
        self.trace.rules_applied(request_id, &result);

        Ok(Prediction {
            request_id,
            raw_prediction,
            result,
        })
    }
}
