use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness message kept for the web client.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Placement Predictor API running" }))
}

/// GET /health
/// Returns a status object with service version and the loaded classifier.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "placement-api",
        "classifier": state.pipeline.classifier_backend(),
        "model_path": state.config.model_path,
    }))
}
