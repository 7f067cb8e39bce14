//! Person-name recognition used as the fallback for name extraction.
//!
//! The recognizer is a process-wide capability: build it once at startup,
//! share it read-only through `Arc<dyn PersonRecognizer>`, and leave it out
//! entirely to run with line heuristics only.

use std::collections::HashSet;

/// Finds the first person name in a span of text.
pub trait PersonRecognizer: Send + Sync {
    fn first_person(&self, text: &str) -> Option<String>;
}

/// Capitalised words that open resume sections or name common document
/// furniture, never part of a person's name.
const NON_NAME_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "profile",
    "summary",
    "objective",
    "contact",
    "email",
    "phone",
    "mobile",
    "address",
    "education",
    "experience",
    "projects",
    "project",
    "skills",
    "technical",
    "internship",
    "university",
    "college",
    "institute",
    "technology",
    "engineering",
    "computer",
    "science",
    "bachelor",
    "master",
    "b.tech",
    "india",
];

/// Rule-based recognizer: the first run of two or three capitalised
/// alphabetic words that are not resume vocabulary.
pub struct HeuristicPersonRecognizer {
    stopwords: HashSet<&'static str>,
}

impl HeuristicPersonRecognizer {
    pub fn new() -> Self {
        Self {
            stopwords: NON_NAME_WORDS.iter().copied().collect(),
        }
    }

    fn is_name_token(&self, token: &str) -> bool {
        let mut chars = token.chars();
        let starts_upper = chars.next().is_some_and(|c| c.is_uppercase());
        starts_upper
            && token.chars().count() > 1
            && token.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
            && !token.chars().skip(1).all(|c| c.is_uppercase())
            && !self.stopwords.contains(token.to_lowercase().as_str())
    }
}

impl Default for HeuristicPersonRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRecognizer for HeuristicPersonRecognizer {
    fn first_person(&self, text: &str) -> Option<String> {
        let mut run: Vec<&str> = Vec::new();

        for raw in text.split_whitespace() {
            let ends_clause = raw.ends_with([',', '.', ';', ':', '|']);
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric());

            if self.is_name_token(token) {
                run.push(token);
            } else {
                if (2..=3).contains(&run.len()) {
                    return Some(run.join(" "));
                }
                run.clear();
                continue;
            }

            if ends_clause || run.len() > 3 {
                if (2..=3).contains(&run.len()) {
                    return Some(run.join(" "));
                }
                run.clear();
            }
        }

        (2..=3).contains(&run.len()).then(|| run.join(" "))
    }
}
