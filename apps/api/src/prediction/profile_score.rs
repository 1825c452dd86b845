//! Profile Scorer: additive, tiered strength score from the non-ML profile signals.
//!
//! Each field contributes independently through a `(threshold, weight)` table. Tables
//! are ordered from the highest threshold down; the first tier the value reaches
//! (`>=`) wins, and a value below every tier contributes nothing.

use crate::prediction::normalize::{CpLevel, ProfileInput, SkillFlags};

pub const DEGREE_TIERS: &[(f64, f64)] = &[(75.0, 2.0), (65.0, 1.0)];
pub const PROJECT_TIERS: &[(i64, f64)] = &[(3, 2.0), (1, 1.0)];
pub const INTERNSHIP_TIERS: &[(i64, f64)] = &[(2, 2.0), (1, 1.5)];
pub const HACKATHON_TIERS: &[(i64, f64)] = &[(2, 1.5), (1, 1.0)];
pub const CLUB_TIERS: &[(i64, f64)] = &[(2, 1.0), (1, 0.5)];

pub const CP_LEVEL_WEIGHTS: &[(CpLevel, f64)] = &[
    (CpLevel::Strong, 2.0),
    (CpLevel::Good, 1.5),
    (CpLevel::Intermediate, 1.0),
    (CpLevel::Basic, 0.5),
];

pub const DSA_WEIGHT: f64 = 1.0;
pub const DEV_SKILL_WEIGHT: f64 = 0.8;
pub const WORKEX_WEIGHT: f64 = 1.0;

/// Weight of the first tier whose threshold `value` reaches.
pub fn tier_weight<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

pub fn cp_level_weight(level: CpLevel) -> f64 {
    CP_LEVEL_WEIGHTS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

pub fn skills_weight(skills: &SkillFlags) -> f64 {
    [
        (skills.dsa, DSA_WEIGHT),
        (skills.web, DEV_SKILL_WEIGHT),
        (skills.ml, DEV_SKILL_WEIGHT),
        (skills.app, DEV_SKILL_WEIGHT),
        (skills.cloud, DEV_SKILL_WEIGHT),
    ]
    .iter()
    .filter(|(has, _)| *has)
    .map(|(_, weight)| weight)
    .sum()
}

/// Non-negative profile strength. A perfect profile scores 15.7.
pub fn compute_profile_score(input: &ProfileInput) -> f64 {
    let mut score = 0.0;

    score += tier_weight(input.degree_p, DEGREE_TIERS);
    score += tier_weight(input.projects, PROJECT_TIERS);
    score += tier_weight(input.internships, INTERNSHIP_TIERS);
    score += tier_weight(input.hackathons, HACKATHON_TIERS);
    score += tier_weight(input.clubs, CLUB_TIERS);
    score += cp_level_weight(input.cp_level);
    score += skills_weight(&input.skills);

    if input.workex {
        score += WORKEX_WEIGHT;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_profile() -> ProfileInput {
        ProfileInput {
            ssc_p: 0.0,
            hsc_p: 0.0,
            degree_p: 0.0,
            etest_p: 0.0,
            workex: false,
            cp_level: CpLevel::None,
            skills: SkillFlags::default(),
            projects: 0,
            internships: 0,
            hackathons: 0,
            clubs: 0,
            mba_p: None,
        }
    }

    #[test]
    fn test_blank_profile_scores_zero() {
        assert_eq!(compute_profile_score(&blank_profile()), 0.0);
    }

    #[test]
    fn test_degree_boundaries_are_inclusive() {
        assert_eq!(tier_weight(75.0, DEGREE_TIERS), 2.0);
        assert_eq!(tier_weight(74.99, DEGREE_TIERS), 1.0);
        assert_eq!(tier_weight(65.0, DEGREE_TIERS), 1.0);
        assert_eq!(tier_weight(64.99, DEGREE_TIERS), 0.0);
    }

    #[test]
    fn test_count_tiers() {
        assert_eq!(tier_weight(0, PROJECT_TIERS), 0.0);
        assert_eq!(tier_weight(1, PROJECT_TIERS), 1.0);
        assert_eq!(tier_weight(2, PROJECT_TIERS), 1.0);
        assert_eq!(tier_weight(3, PROJECT_TIERS), 2.0);
        assert_eq!(tier_weight(1, INTERNSHIP_TIERS), 1.5);
        assert_eq!(tier_weight(5, INTERNSHIP_TIERS), 2.0);
        assert_eq!(tier_weight(1, HACKATHON_TIERS), 1.0);
        assert_eq!(tier_weight(2, HACKATHON_TIERS), 1.5);
        assert_eq!(tier_weight(1, CLUB_TIERS), 0.5);
        assert_eq!(tier_weight(2, CLUB_TIERS), 1.0);
    }

    #[test]
    fn test_negative_counts_contribute_nothing() {
        assert_eq!(tier_weight(-3, PROJECT_TIERS), 0.0);
    }

    #[test]
    fn test_cp_level_weights() {
        assert_eq!(cp_level_weight(CpLevel::Strong), 2.0);
        assert_eq!(cp_level_weight(CpLevel::Good), 1.5);
        assert_eq!(cp_level_weight(CpLevel::Intermediate), 1.0);
        assert_eq!(cp_level_weight(CpLevel::Basic), 0.5);
        assert_eq!(cp_level_weight(CpLevel::None), 0.0);
        assert_eq!(cp_level_weight(CpLevel::Unrecognized), 0.0);
    }

    #[test]
    fn test_skill_weights() {
        let only_dsa = SkillFlags {
            dsa: true,
            ..SkillFlags::default()
        };
        assert_eq!(skills_weight(&only_dsa), 1.0);

        let web_and_cloud = SkillFlags {
            web: true,
            cloud: true,
            ..SkillFlags::default()
        };
        assert!((skills_weight(&web_and_cloud) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_full_profile_scores_maximum() {
        let profile = ProfileInput {
            degree_p: 80.0,
            workex: true,
            cp_level: CpLevel::Strong,
            skills: SkillFlags {
                dsa: true,
                web: true,
                ml: true,
                app: true,
                cloud: true,
            },
            projects: 4,
            internships: 2,
            hackathons: 2,
            clubs: 2,
            ..blank_profile()
        };
        // 2 + 2 + 2 + 1.5 + 1 + 2 + (1 + 4*0.8) + 1
        let score = compute_profile_score(&profile);
        assert!((score - 15.7).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_workex_adds_one_point() {
        let with = ProfileInput {
            workex: true,
            ..blank_profile()
        };
        assert_eq!(compute_profile_score(&with), 1.0);
    }
}
