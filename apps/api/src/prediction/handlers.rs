//! Axum route handlers for the Prediction API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::prediction::pipeline::PredictionResponse;
use crate::state::AppState;

/// POST /predict
///
/// Scores a student profile. Any JSON body is accepted: fields that are missing or
/// malformed fall back to defaults, and a non-object body counts as an empty form.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let Json(body) = payload?;
    let fields = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let prediction = state.pipeline.predict(&fields);
    let breakdown = prediction.breakdown;
    debug!(
        base_probability = breakdown.base_probability,
        profile_score = breakdown.profile_score,
        adjusted_probability = breakdown.adjusted_probability,
        penalty = breakdown.penalty,
        hard_capped = breakdown.hard_capped,
        final_probability = breakdown.final_probability,
        "Scored profile"
    );

    let response = prediction.response;

    info!(
        probability = response.placement_probability,
        level = ?response.level,
        salary_min_lpa = response.expected_salary_min_lpa,
        salary_max_lpa = response.expected_salary_max_lpa,
        suggestions = response.suggestions.len(),
        "Prediction served"
    );

    Ok(Json(response))
}
