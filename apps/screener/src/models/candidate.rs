use serde::{Deserialize, Serialize};

/// Structured record produced by the resume parser and returned to callers.
///
/// Optional fields serialize as `null` when nothing was found; `ai_score`
/// is omitted until the scorer has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCandidate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub college: Option<String>,
    pub degree: String,
    pub graduation_year: Option<i32>,
    /// Always on a 10-point scale.
    pub cgpa: Option<f64>,
    /// Deduplicated, title-cased subset of the skill vocabulary.
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub experience: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<f64>,
}

impl ParsedCandidate {
    /// The subset of fields the scorer looks at.
    pub fn profile(&self) -> CandidateProfile {
        CandidateProfile {
            skills: self.skills.clone(),
            cgpa: self.cgpa,
            projects: self.projects.clone(),
            experience: self.experience.clone(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.ai_score = Some(score);
        self
    }
}

/// Partial candidate record accepted by the scorer.
///
/// Every field defaults when missing, so a caller may send `{}` and get the
/// neutral score back. Wrong JSON types are rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
}
