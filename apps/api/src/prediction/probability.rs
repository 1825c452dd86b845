//! Probability Adjuster.
//!
//! Stage 1 shifts the classifier's probability by at most ±0.15 according to how far
//! the profile score sits from an average profile (5.0). Stage 2 subtracts discrete
//! penalties for missing work experience and weak competitive programming.

use crate::prediction::normalize::CpLevel;

pub const SCORE_CENTER: f64 = 5.0;
pub const SHIFT_PER_POINT: f64 = 0.02;
pub const MAX_SHIFT: f64 = 0.15;

pub const ADJUSTED_FLOOR: f64 = 0.05;
pub const PROBABILITY_CEILING: f64 = 0.98;
/// Lowest probability ever surfaced. Never zero.
pub const PENALIZED_FLOOR: f64 = 0.02;

pub const NO_WORKEX_PENALTY: f64 = 0.10;
pub const WEAK_CP_PENALTY: f64 = 0.10;
pub const NO_WORKEX_NO_CP_PENALTY: f64 = 0.20;
/// Ceiling applied before penalties when both work experience and CP are missing.
pub const NO_WORKEX_NO_CP_CAP: f64 = 0.40;

/// Result of the penalty stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyOutcome {
    pub probability: f64,
    pub penalty: f64,
    pub hard_capped: bool,
}

/// True when neither work experience nor any CP level is present.
/// An unrecognized CP string is not "none" here.
pub fn is_no_workex_no_cp(workex: bool, cp_level: CpLevel) -> bool {
    !workex && cp_level == CpLevel::None
}

/// Stage 1: `base + clamp(0.02 × (score − 5), ±0.15)`, clamped to [0.05, 0.98].
pub fn adjust_probability(base_probability: f64, profile_score: f64) -> f64 {
    let delta = (SHIFT_PER_POINT * (profile_score - SCORE_CENTER)).clamp(-MAX_SHIFT, MAX_SHIFT);
    (base_probability + delta).clamp(ADJUSTED_FLOOR, PROBABILITY_CEILING)
}

/// Stage 2: categorical penalties. The hard cap is applied before the combined
/// penalty is subtracted; the result is floored at 0.02.
pub fn apply_penalties(adjusted: f64, workex: bool, cp_level: CpLevel) -> PenaltyOutcome {
    let mut probability = adjusted;
    let mut penalty = 0.0;
    let mut hard_capped = false;

    if !workex {
        penalty += NO_WORKEX_PENALTY;
    }

    if cp_level.is_weak() {
        penalty += WEAK_CP_PENALTY;
    }

    if is_no_workex_no_cp(workex, cp_level) {
        penalty += NO_WORKEX_NO_CP_PENALTY;

        if probability > NO_WORKEX_NO_CP_CAP {
            probability = NO_WORKEX_NO_CP_CAP;
            hard_capped = true;
        }
    }

    if penalty > 0.0 {
        probability = (probability - penalty).max(PENALIZED_FLOOR);
    }

    PenaltyOutcome {
        probability,
        penalty,
        hard_capped,
    }
}
