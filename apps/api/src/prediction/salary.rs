//! Salary Estimator: rule-based band in LPA (lakhs per annum).

pub const BASE_MIN_LPA: f64 = 4.0;
pub const BASE_MAX_LPA: f64 = 6.0;
pub const PROBABILITY_SCALE: f64 = 10.0;
pub const PROBABILITY_WEIGHT: f64 = 0.3;
pub const SCORE_WEIGHT: f64 = 0.6;
pub const SCORE_CENTER: f64 = 5.0;

pub const MIN_SPREAD_LPA: f64 = 1.5;
pub const FLOOR_LPA: f64 = 3.0;
pub const CEILING_LPA: f64 = 22.0;

pub const NO_WORKEX_NO_CP_MIN_CAP: f64 = 5.0;
pub const NO_WORKEX_NO_CP_MAX_CAP: f64 = 7.0;

pub const INR_PER_LPA: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub min_lpa: f64,
    pub max_lpa: f64,
}

impl SalaryBand {
    pub fn min_inr(&self) -> i64 {
        lpa_to_inr(self.min_lpa)
    }

    pub fn max_inr(&self) -> i64 {
        lpa_to_inr(self.max_lpa)
    }

    /// Pushes the band down for candidates with neither work experience nor CP.
    /// Each bound is capped independently, then the spread is restored.
    pub fn capped_for_no_workex_no_cp(self) -> SalaryBand {
        let min_lpa = self.min_lpa.min(NO_WORKEX_NO_CP_MIN_CAP);
        let max_lpa = self.max_lpa.min(NO_WORKEX_NO_CP_MAX_CAP);
        SalaryBand {
            min_lpa,
            max_lpa: round_to(max_lpa.max(min_lpa + MIN_SPREAD_LPA), 1),
        }
    }
}

/// Band from the final probability and the profile score.
///
/// The spread is restored after the lower clamp, so even the weakest profile
/// (min pinned at 3.0) gets `max >= min + 1.5`.
pub fn estimate_salary_band(probability: f64, profile_score: f64) -> SalaryBand {
    let prob_component = (probability - 0.5) * PROBABILITY_SCALE;
    let score_component = (profile_score - SCORE_CENTER) * SCORE_WEIGHT;
    let shift = prob_component * PROBABILITY_WEIGHT + score_component;

    let min_lpa = round_to(
        (BASE_MIN_LPA + shift).clamp(FLOOR_LPA, CEILING_LPA - MIN_SPREAD_LPA),
        1,
    );
    let max_lpa = round_to(
        (BASE_MAX_LPA + shift)
            .max(min_lpa + MIN_SPREAD_LPA)
            .min(CEILING_LPA),
        1,
    );

    SalaryBand { min_lpa, max_lpa }
}

/// Rounds the exact stored value to `digits` decimal places, ties to even.
///
/// Scaling by a power of ten first would round values stored just below a
/// tie (5.35 is 5.3499…) upwards, so the decimal expansion is used instead.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

fn lpa_to_inr(lpa: f64) -> i64 {
    (lpa * INR_PER_LPA).round() as i64
}
