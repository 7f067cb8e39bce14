//! Candidate scoring: four component scores on a 0–100 scale combined into
//! one weighted, ranking score.
//!
//! Everything here is a pure function of the [`CandidateProfile`]; the same
//! profile always scores the same.

pub mod breakdown;

use crate::models::candidate::CandidateProfile;

/// Skills the internship targets; each contributes to the base skill score.
pub const TARGET_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "mongodb",
    "mysql",
    "git",
    "data structures",
    "algorithms",
    "rest",
];

/// High-value skills worth bonus points on top of the base score.
pub const BONUS_SKILLS: &[&str] = &[
    "docker",
    "kubernetes",
    "aws",
    "machine learning",
    "system design",
];

const SKILLS_BASE_MAX: f64 = 80.0;
const BONUS_PER_SKILL: f64 = 5.0;
const BONUS_MAX: f64 = 20.0;

/// Score used when no usable CGPA is present.
pub const NEUTRAL_CGPA_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub cgpa: f64,
    pub projects: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            cgpa: 0.25,
            projects: 0.20,
            experience: 0.15,
        }
    }
}

/// Number of `vocabulary` entries present in `skills`, compared case-insensitively.
pub fn count_matches(skills: &[String], vocabulary: &[&str]) -> usize {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    vocabulary
        .iter()
        .filter(|v| lowered.iter().any(|s| s == *v))
        .count()
}

/// Share of target skills scaled to 80, plus 5 per bonus skill up to 20.
pub fn skills_score(skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let matched = count_matches(skills, TARGET_SKILLS) as f64;
    let base = matched / TARGET_SKILLS.len() as f64 * SKILLS_BASE_MAX;
    let bonus = (count_matches(skills, BONUS_SKILLS) as f64 * BONUS_PER_SKILL).min(BONUS_MAX);
    (base + bonus).min(100.0)
}

/// Piecewise-linear in CGPA, continuous at 7.0, 8.0 and 9.0, never below 50.
pub fn cgpa_score(cgpa: Option<f64>) -> f64 {
    let cgpa = match cgpa {
        Some(c) if c > 0.0 => c,
        _ => return NEUTRAL_CGPA_SCORE,
    };

    if cgpa >= 9.0 {
        100.0
    } else if cgpa >= 8.0 {
        85.0 + (cgpa - 8.0) * 15.0
    } else if cgpa >= 7.0 {
        70.0 + (cgpa - 7.0) * 15.0
    } else {
        (50.0 + (cgpa - 6.0) * 20.0).max(50.0)
    }
}

pub fn projects_score(count: usize) -> f64 {
    match count {
        0 => 30.0,
        1 => 60.0,
        2 => 80.0,
        _ => 100.0,
    }
}

pub fn experience_score(count: usize) -> f64 {
    match count {
        0 => 50.0,
        1 => 75.0,
        _ => 100.0,
    }
}

/// Weighted score rounded to one decimal, using the default weights.
pub fn calculate_score(profile: &CandidateProfile) -> f64 {
    calculate_score_with(profile, &ScoringWeights::default())
}

pub fn calculate_score_with(profile: &CandidateProfile, weights: &ScoringWeights) -> f64 {
    let total = weights.skills * skills_score(&profile.skills)
        + weights.cgpa * cgpa_score(profile.cgpa)
        + weights.projects * projects_score(profile.projects.len())
        + weights.experience * experience_score(profile.experience.len());
    round_to(total.clamp(0.0, 100.0), 1)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
