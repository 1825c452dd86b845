//! Suggestion Generator.
//!
//! Rules are evaluated in table order and are independent of each other: every rule
//! whose condition holds appends its message. The order is part of the response
//! contract (academics, work experience, projects/internships, hackathons/clubs,
//! CP, skills, cross-skill checks, secondary percentage).

use tracing::trace;

use crate::prediction::normalize::ProfileInput;

pub const FALLBACK_SUGGESTION: &str =
    "Your profile looks strong. Focus on mock interviews, company-specific preparation, and soft skills.";

pub const MIN_DEGREE_P: f64 = 65.0;
pub const MIN_SCHOOL_P: f64 = 60.0;
pub const MIN_ETEST_P: f64 = 60.0;
pub const MIN_MBA_P: f64 = 60.0;

pub struct SuggestionRule {
    pub id: &'static str,
    pub applies: fn(&ProfileInput) -> bool,
    pub message: &'static str,
}

pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    // Academics
    SuggestionRule {
        id: "low_degree",
        applies: |p| p.degree_p < MIN_DEGREE_P,
        message: "Try to keep your degree percentage above 65% to stay in most company criteria.",
    },
    SuggestionRule {
        id: "low_school",
        applies: |p| p.hsc_p < MIN_SCHOOL_P || p.ssc_p < MIN_SCHOOL_P,
        message: "Your 10th/12th scores are a bit low, so focus on strong projects and contests to compensate.",
    },
    SuggestionRule {
        id: "low_etest",
        applies: |p| p.etest_p < MIN_ETEST_P,
        message: "Improve your aptitude and logical reasoning by practicing e-test style questions regularly.",
    },
    // Work experience
    SuggestionRule {
        id: "no_workex",
        applies: |p| !p.workex,
        message: "Consider internships or part-time roles to gain practical work experience.",
    },
    // Projects & internships
    SuggestionRule {
        id: "few_projects",
        applies: |p| p.projects < 2,
        message: "Build at least 2 solid projects (e.g., full-stack, ML, or Android) to strengthen your profile.",
    },
    SuggestionRule {
        id: "no_internship",
        applies: |p| p.internships < 1,
        message: "Try to secure at least one internship before final placements.",
    },
    // Hackathons & clubs
    SuggestionRule {
        id: "no_hackathon",
        applies: |p| p.hackathons < 1,
        message: "Participate in hackathons to showcase problem-solving and teamwork.",
    },
    SuggestionRule {
        id: "no_club",
        applies: |p| p.clubs < 1,
        message: "Join or take active roles in clubs/communities to demonstrate leadership and collaboration.",
    },
    // Competitive programming
    SuggestionRule {
        id: "weak_cp",
        applies: |p| p.cp_level.is_weak(),
        message: "Improve competitive programming and DSA to clear online coding rounds.",
    },
    // Skills
    SuggestionRule {
        id: "no_dsa",
        applies: |p| !p.skills.dsa,
        message: "Strengthen Data Structures & Algorithms; most tech companies heavily test this.",
    },
    SuggestionRule {
        id: "no_dev_skill",
        applies: |p| !(p.skills.web || p.skills.ml || p.skills.app),
        message: "Add at least one development skill (Web, ML/AI, App Dev) with a real-world project.",
    },
    // Cross-skill
    SuggestionRule {
        id: "web_without_projects",
        applies: |p| p.skills.web && p.projects < 2,
        message: "Build a portfolio website or a full-stack app to showcase your web development skills.",
    },
    SuggestionRule {
        id: "ml_without_projects",
        applies: |p| p.skills.ml && p.projects < 1,
        message: "Implement at least one ML project with a clear problem statement and dataset.",
    },
    SuggestionRule {
        id: "cloud_without_internship",
        applies: |p| p.skills.cloud && p.internships < 1,
        message: "Try to get cloud-related internship or certifications (e.g., AWS) to leverage your cloud skills.",
    },
    // Secondary percentage, only when provided
    SuggestionRule {
        id: "low_mba",
        applies: |p| p.mba_p.map_or(false, |mba| mba < MIN_MBA_P),
        message: "Improve your MBA percentage above 60% or highlight your practical skills to balance academics.",
    },
];

/// Ordered, never-empty list of advice for this profile.
pub fn generate_suggestions(input: &ProfileInput) -> Vec<String> {
    let mut suggestions: Vec<String> = SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| {
            trace!(rule = rule.id, "Suggestion rule fired");
            rule.message.to_string()
        })
        .collect();

    if suggestions.is_empty() {
        suggestions.push(FALLBACK_SUGGESTION.to_string());
    }

    suggestions
}
