use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;

use railcast_core::PredictionDraft;
use railcast_pipeline::{Prediction, PredictError};

use crate::state::ServiceState;

/// Wire response for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub raw_prediction: f64,
    pub final_prediction: f64,
    pub wagons_required: u32,
    pub wagon_type: String,
    pub wagon_capacity: f64,
    pub message: String,
    pub business_rules_applied: Vec<String>,
}

impl PredictionResponse {
    fn from_prediction(prediction: Prediction) -> Self {
        let result = prediction.result;
        Self {
            success: true,
            raw_prediction: round2(prediction.raw_prediction),
            final_prediction: round2(result.final_supply),
            wagons_required: result.wagons_required,
            wagon_type: result.wagon_type.as_str().to_string(),
            wagon_capacity: result.wagon_capacity,
            message: "Prediction successful".to_string(),
            business_rules_applied: result.rule_names(),
        }
    }
}

// Tonnage figures are rounded to 2 decimals at the wire boundary only.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn build_app(state: Arc<ServiceState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/features", get(features))
        .route("/predict", post(predict))
        .layer(Extension(state))
        .layer(ServiceBuilder::new())
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Railcast Supply Prediction API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health(Extension(state): Extension<Arc<ServiceState>>) -> impl IntoResponse {
    let status = if state.model_loaded() {
        "healthy"
    } else {
        "degraded"
    };
    Json(serde_json::json!({
        "status": status,
        "model_loaded": state.model_loaded(),
        "features_loaded": state.features_loaded(),
    }))
}

async fn features(Extension(state): Extension<Arc<ServiceState>>) -> axum::response::Response {
    match &*state {
        ServiceState::Ready { orchestrator } => {
            let schema = orchestrator.schema();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "total_features": schema.feature_columns.len(),
                    "numerical_features": schema.numerical_columns.len(),
                    "categorical_features": schema.categorical_columns.len(),
                    "feature_columns": schema.feature_columns,
                })),
            )
                .into_response()
        }
        ServiceState::Unavailable { reason, .. } => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", reason.clone())
        }
    }
}

async fn predict(
    Extension(state): Extension<Arc<ServiceState>>,
    Json(draft): Json<PredictionDraft>,
) -> axum::response::Response {
    let orchestrator = match &*state {
        ServiceState::Ready { orchestrator } => orchestrator,
        ServiceState::Unavailable { reason, .. } => {
            return json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                reason.clone(),
            );
        }
    };

    match orchestrator.predict(&draft).await {
        Ok(prediction) => {
            (StatusCode::OK, Json(PredictionResponse::from_prediction(prediction))).into_response()
        }
        Err(err) => predict_error_to_response(err),
    }
}

fn predict_error_to_response(err: PredictError) -> axum::response::Response {
    match err {
        PredictError::Validation(violations) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "validation_error",
                "message": violations.join("; "),
                "violations": violations,
            })),
        )
            .into_response(),
        PredictError::Reference(e) => {
            json_error(StatusCode::BAD_REQUEST, "unknown_stockyard", e.to_string())
        }
        PredictError::Model(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "model_error", e.to_string())
        }
        PredictError::Internal(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
    }
}

fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
