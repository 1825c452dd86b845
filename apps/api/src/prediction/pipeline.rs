//! Pipeline Orchestrator.
//!
//! normalize → feature vector → classifier → profile score → adjust + penalties
//! → risk level → salary band (+ cap) → suggestions → response.
//!
//! Pure function of the request fields and the injected classifier: no I/O, no shared
//! mutable state, and no failure path.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::prediction::classifier::{FeatureVector, PlacementClassifier};
use crate::prediction::normalize::ProfileInput;
use crate::prediction::probability::{adjust_probability, apply_penalties, is_no_workex_no_cp};
use crate::prediction::profile_score::compute_profile_score;
use crate::prediction::salary::{estimate_salary_band, round_to};
use crate::prediction::suggestions::generate_suggestions;

pub const HIGH_THRESHOLD: f64 = 0.75;
pub const MEDIUM_THRESHOLD: f64 = 0.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p >= HIGH_THRESHOLD => RiskLevel::High,
            p if p >= MEDIUM_THRESHOLD => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// Wire response for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    /// Final probability as a percentage, two decimals.
    pub placement_probability: f64,
    pub level: RiskLevel,
    pub expected_salary_min_lpa: f64,
    pub expected_salary_max_lpa: f64,
    pub expected_salary_min_inr: i64,
    pub expected_salary_max_inr: i64,
    pub suggestions: Vec<String>,
}

/// Intermediate values behind a response. Not serialized to clients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub base_probability: f64,
    pub profile_score: f64,
    /// After the smooth shift, before penalties.
    pub adjusted_probability: f64,
    pub penalty: f64,
    pub hard_capped: bool,
    /// The only probability ever surfaced, in [0.02, 0.98].
    pub final_probability: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub response: PredictionResponse,
    pub breakdown: ScoreBreakdown,
}

/// The scoring pipeline with its classifier injected. Cheap to clone.
#[derive(Clone)]
pub struct PlacementPipeline {
    classifier: Arc<dyn PlacementClassifier>,
}

impl PlacementPipeline {
    pub fn new(classifier: Arc<dyn PlacementClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier_backend(&self) -> &str {
        self.classifier.backend()
    }

    pub fn predict(&self, fields: &Map<String, Value>) -> Prediction {
        let input = ProfileInput::from_fields(fields);
        self.predict_profile(&input)
    }

    pub fn predict_profile(&self, input: &ProfileInput) -> Prediction {
        let features = FeatureVector::from_profile(input);
        let raw_probability = self.classifier.predict_probability(&features);
        let base_probability = if raw_probability.is_nan() {
            warn!(
                backend = self.classifier.backend(),
                "Classifier returned NaN, using 0.0"
            );
            0.0
        } else {
            raw_probability.clamp(0.0, 1.0)
        };

        let profile_score = compute_profile_score(input);
        let adjusted_probability = adjust_probability(base_probability, profile_score);
        let penalized = apply_penalties(adjusted_probability, input.workex, input.cp_level);
        let final_probability = penalized.probability;

        let level = RiskLevel::from_probability(final_probability);

        let mut band = estimate_salary_band(final_probability, profile_score);
        if is_no_workex_no_cp(input.workex, input.cp_level) {
            band = band.capped_for_no_workex_no_cp();
        }

        let suggestions = generate_suggestions(input);

        Prediction {
            response: PredictionResponse {
                placement_probability: round_to(final_probability * 100.0, 2),
                level,
                expected_salary_min_lpa: band.min_lpa,
                expected_salary_max_lpa: band.max_lpa,
                expected_salary_min_inr: band.min_inr(),
                expected_salary_max_inr: band.max_inr(),
                suggestions,
            },
            breakdown: ScoreBreakdown {
                base_probability,
                profile_score,
                adjusted_probability,
                penalty: penalized.penalty,
                hard_capped: penalized.hard_capped,
                final_probability,
            },
        }
    }
}
