//! Placement classifier: the one external collaborator of the scoring pipeline.
//!
//! The pipeline only sees `PlacementClassifier`. Production uses `LogisticClassifier`,
//! loaded once at startup from the JSON artifact exported by the offline trainer;
//! tests inject a fixed-probability stub.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::prediction::normalize::ProfileInput;

/// Feature order the classifier was trained on. Must never be reordered.
pub const FEATURE_NAMES: [&str; 5] = ["ssc_p", "hsc_p", "degree_p", "etest_p", "workex_bin"];

/// Classifier input in `FEATURE_NAMES` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; 5]);

impl FeatureVector {
    pub fn from_profile(input: &ProfileInput) -> Self {
        FeatureVector([
            input.ssc_p,
            input.hsc_p,
            input.degree_p,
            input.etest_p,
            f64::from(input.workex_bin()),
        ])
    }

    pub fn values(&self) -> &[f64; 5] {
        &self.0
    }
}

/// Maps a feature vector to the probability of being placed, in [0, 1].
///
/// Implementations are immutable after construction and shared across requests.
pub trait PlacementClassifier: Send + Sync {
    fn predict_probability(&self, features: &FeatureVector) -> f64;

    /// Short label for logs and `/health`.
    fn backend(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Failed to read classifier artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Classifier artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feature order mismatch: expected {expected:?}, artifact has {found:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Expected {expected} coefficients, artifact has {found}")]
    CoefficientCount { expected: usize, found: usize },

    #[error("Classifier artifact contains non-finite parameters")]
    NonFinite,
}

#[derive(Debug, Deserialize)]
struct LogisticArtifact {
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Binary logistic regression: `sigmoid(intercept + Σ coefficient_i × x_i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticClassifier {
    coefficients: [f64; 5],
    intercept: f64,
}

impl LogisticClassifier {
    pub fn new(coefficients: [f64; 5], intercept: f64) -> Result<Self, ClassifierError> {
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ClassifierError::NonFinite);
        }
        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ClassifierError> {
        let artifact: LogisticArtifact = serde_json::from_str(raw)?;

        if artifact.features.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ClassifierError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
                found: artifact.features,
            });
        }

        let found = artifact.coefficients.len();
        let coefficients: [f64; 5] = artifact.coefficients.try_into().map_err(|_| {
            ClassifierError::CoefficientCount {
                expected: FEATURE_NAMES.len(),
                found,
            }
        })?;

        Self::new(coefficients, artifact.intercept)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

impl PlacementClassifier for LogisticClassifier {
    fn predict_probability(&self, features: &FeatureVector) -> f64 {
        let logit = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(c, x)| c * x)
                .sum::<f64>();
        sigmoid(logit)
    }

    fn backend(&self) -> &str {
        "logistic"
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Deterministic stub that ignores its input.
    pub(crate) struct FixedClassifier(pub f64);

    impl PlacementClassifier for FixedClassifier {
        fn predict_probability(&self, _features: &FeatureVector) -> f64 {
            self.0
        }

        fn backend(&self) -> &str {
            "fixed"
        }
    }

    const VALID_ARTIFACT: &str = r#"{
        "features": ["ssc_p", "hsc_p", "degree_p", "etest_p", "workex_bin"],
        "coefficients": [0.1, 0.05, 0.04, 0.0, 1.2],
        "intercept": -12.0
    }"#;

    #[test]
    fn test_zero_logit_is_even_odds() {
        let clf = LogisticClassifier::new([0.0; 5], 0.0).unwrap();
        let p = clf.predict_probability(&FeatureVector([70.0, 70.0, 70.0, 70.0, 1.0]));
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_follows_linear_term() {
        let clf = LogisticClassifier::from_json(VALID_ARTIFACT).unwrap();
        // -12 + 8 + 4 + 2.8 + 0 + 1.2 = 4.0
        let p = clf.predict_probability(&FeatureVector([80.0, 80.0, 70.0, 60.0, 1.0]));
        let expected = 1.0 / (1.0 + (-4.0_f64).exp());
        assert!((p - expected).abs() < 1e-12, "p was {p}");
    }

    #[test]
    fn test_extreme_inputs_stay_in_unit_interval() {
        let clf = LogisticClassifier::from_json(VALID_ARTIFACT).unwrap();
        let high = clf.predict_probability(&FeatureVector([1e6, 1e6, 1e6, 1e6, 1.0]));
        let low = clf.predict_probability(&FeatureVector([-1e6, -1e6, -1e6, -1e6, 0.0]));
        assert!((0.0..=1.0).contains(&high));
        assert!((0.0..=1.0).contains(&low));
    }

    #[test]
    fn test_feature_order_must_match() {
        let raw = r#"{
            "features": ["hsc_p", "ssc_p", "degree_p", "etest_p", "workex_bin"],
            "coefficients": [0.1, 0.05, 0.04, 0.0, 1.2],
            "intercept": -12.0
        }"#;
        let err = LogisticClassifier::from_json(raw).unwrap_err();
        assert!(matches!(err, ClassifierError::FeatureMismatch { .. }));
    }

    #[test]
    fn test_coefficient_count_must_match() {
        let raw = r#"{
            "features": ["ssc_p", "hsc_p", "degree_p", "etest_p", "workex_bin"],
            "coefficients": [0.1, 0.05],
            "intercept": 0.0
        }"#;
        let err = LogisticClassifier::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::CoefficientCount {
                expected: 5,
                found: 2
            }
        ));
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let err = LogisticClassifier::new([f64::NAN, 0.0, 0.0, 0.0, 0.0], 0.0).unwrap_err();
        assert!(matches!(err, ClassifierError::NonFinite));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = LogisticClassifier::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ClassifierError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_ARTIFACT.as_bytes()).unwrap();

        let clf = LogisticClassifier::load(file.path()).unwrap();
        assert_eq!(clf.backend(), "logistic");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LogisticClassifier::load("/definitely/not/here/model.json").unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/model.json"));
    }

    #[test]
    fn test_feature_vector_order() {
        let input = ProfileInput {
            ssc_p: 1.0,
            hsc_p: 2.0,
            degree_p: 3.0,
            etest_p: 4.0,
            workex: true,
            cp_level: crate::prediction::normalize::CpLevel::None,
            skills: Default::default(),
            projects: 0,
            internships: 0,
            hackathons: 0,
            clubs: 0,
            mba_p: None,
        };
        assert_eq!(
            FeatureVector::from_profile(&input),
            FeatureVector([1.0, 2.0, 3.0, 4.0, 1.0])
        );
    }
}
