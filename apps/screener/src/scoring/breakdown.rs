use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::scoring::{
    calculate_score_with, cgpa_score, count_matches, experience_score, projects_score,
    skills_score, ScoringWeights, TARGET_SKILLS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsComponent {
    pub score: f64,
    pub weight: String,
    /// Target skills present in the candidate's skill list.
    pub matched: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaComponent {
    pub score: f64,
    pub weight: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountComponent {
    pub score: f64,
    pub weight: String,
    pub count: usize,
}

/// Explains how a final score was reached. Read-only; recomputed per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: SkillsComponent,
    pub cgpa: CgpaComponent,
    pub projects: CountComponent,
    pub experience: CountComponent,
    pub final_score: f64,
}

pub fn get_score_breakdown(profile: &CandidateProfile) -> ScoreBreakdown {
    get_score_breakdown_with(profile, &ScoringWeights::default())
}

pub fn get_score_breakdown_with(
    profile: &CandidateProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        skills: SkillsComponent {
            score: skills_score(&profile.skills),
            weight: weight_label(weights.skills),
            matched: count_matches(&profile.skills, TARGET_SKILLS),
        },
        cgpa: CgpaComponent {
            score: cgpa_score(profile.cgpa),
            weight: weight_label(weights.cgpa),
            value: profile.cgpa,
        },
        projects: CountComponent {
            score: projects_score(profile.projects.len()),
            weight: weight_label(weights.projects),
            count: profile.projects.len(),
        },
        experience: CountComponent {
            score: experience_score(profile.experience.len()),
            weight: weight_label(weights.experience),
            count: profile.experience.len(),
        },
        final_score: calculate_score_with(profile, weights),
    }
}

/// 0.4 → "40%"
fn weight_label(weight: f64) -> String {
    format!("{}%", (weight * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weight_labels() {
        let b = get_score_breakdown(&CandidateProfile::default());
        assert_eq!(b.skills.weight, "40%");
        assert_eq!(b.cgpa.weight, "25%");
        assert_eq!(b.projects.weight, "20%");
        assert_eq!(b.experience.weight, "15%");
    }

    #[test]
    fn test_empty_profile_breakdown() {
        let b = get_score_breakdown(&CandidateProfile::default());
        assert_eq!(b.skills.score, 0.0);
        assert_eq!(b.skills.matched, 0);
        assert_eq!(b.cgpa.score, 50.0);
        assert_eq!(b.cgpa.value, None);
        assert_eq!(b.projects.score, 30.0);
        assert_eq!(b.experience.score, 50.0);
        assert_eq!(b.final_score, 26.0);
    }

    #[test]
    fn test_final_score_matches_calculate_score() {
        let profiles = [
            CandidateProfile::default(),
            CandidateProfile {
                skills: strings(&["Python", "React", "Kubernetes", "Rust"]),
                cgpa: Some(7.25),
                projects: strings(&["p1", "p2"]),
                experience: strings(&["e1", "e2", "e3"]),
            },
            CandidateProfile {
                skills: strings(TARGET_SKILLS),
                cgpa: Some(-2.0),
                projects: vec![],
                experience: strings(&["e1"]),
            },
        ];
        for profile in &profiles {
            assert_eq!(get_score_breakdown(profile).final_score, calculate_score(profile));
        }
    }

    #[test]
    fn test_supporting_counts() {
        let profile = CandidateProfile {
            skills: strings(&["Python", "python", "Git", "Docker"]),
            cgpa: Some(8.1),
            projects: strings(&["p1"]),
            experience: strings(&["e1", "e2"]),
        };
        let b = get_score_breakdown(&profile);
        assert_eq!(b.skills.matched, 2);
        assert_eq!(b.cgpa.value, Some(8.1));
        assert_eq!(b.projects.count, 1);
        assert_eq!(b.experience.count, 2);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(get_score_breakdown(&CandidateProfile::default())).unwrap();
        assert!(json["skills"]["score"].is_number());
        assert!(json["skills"]["matched"].is_number());
        assert!(json["cgpa"]["value"].is_null());
        assert_eq!(json["projects"]["weight"], "20%");
        assert!(json["experience"]["count"].is_number());
        assert_eq!(json["final_score"], 26.0);
    }
}
