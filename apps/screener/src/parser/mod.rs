// Resume parsing: document text extraction plus heuristic field extractors.
// Every extractor is a pure `&str -> value` function; the parser only wires
// them together and owns the optional person recognizer.

pub mod academics;
pub mod contact;
pub mod entities;
pub mod sections;
pub mod skills;
pub mod text;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::models::candidate::ParsedCandidate;
use crate::parser::entities::PersonRecognizer;
use crate::parser::text::DocumentFormat;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Resume file {path} could not be read: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not extract text from resume {path} ({format})")]
    EmptyDocument {
        path: PathBuf,
        format: DocumentFormat,
    },
}

/// Turns resume documents into [`ParsedCandidate`] records.
///
/// Holds no per-call state; one instance is shared across requests.
#[derive(Clone, Default)]
pub struct ResumeParser {
    recognizer: Option<Arc<dyn PersonRecognizer>>,
}

impl ResumeParser {
    /// Parser using line heuristics only for names.
    pub fn new() -> Self {
        Self { recognizer: None }
    }

    /// Parser that falls back to `recognizer` when no name line is found.
    pub fn with_recognizer(recognizer: Arc<dyn PersonRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
        }
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Read, decode and extract every field from the document at `path`.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ParsedCandidate, ParseError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path);

        let text = text::extract_text(path)?;
        if text.is_empty() {
            return Err(ParseError::EmptyDocument {
                path: path.to_path_buf(),
                format,
            });
        }

        let candidate = self.parse_text(&text);
        debug!(
            path = %path.display(),
            %format,
            has_email = candidate.email.is_some(),
            has_phone = candidate.phone.is_some(),
            has_cgpa = candidate.cgpa.is_some(),
            skills = candidate.skills.len(),
            projects = candidate.projects.len(),
            experience = candidate.experience.len(),
            "Parsed resume"
        );
        Ok(candidate)
    }

    /// Run all field extractors over already-extracted text.
    pub fn parse_text(&self, text: &str) -> ParsedCandidate {
        ParsedCandidate {
            name: contact::extract_name(text, self.recognizer.as_deref()),
            email: contact::extract_email(text),
            phone: contact::extract_phone(text),
            college: academics::extract_college(text),
            degree: academics::DEFAULT_DEGREE.to_string(),
            graduation_year: academics::extract_graduation_year(text),
            cgpa: academics::extract_cgpa(text),
            skills: skills::extract_skills(text),
            projects: sections::extract_projects(text),
            experience: sections::extract_experience(text),
            ai_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::entities::HeuristicPersonRecognizer;
    use std::io::Write;

    const SAMPLE_RESUME: &str = "Asha Verma
asha.verma@example.com | +91 9876543210
Indian Institute of Technology, Delhi
B.Tech Computer Science, 2022 - 2026
CGPA: 8.7

Skills: Python, Java, React, Git, Docker, Machine Learning

Projects
- Built a URL shortener in Rust with Redis caching
- Realtime chat application using WebSockets
- Compiler for a toy language with LLVM backend

Experience
- Backend intern at Acme Corp, built billing APIs
- Research intern at IIT Delhi systems lab
";

    fn write_resume(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_txt_resume() {
        let file = write_resume(".txt", SAMPLE_RESUME);
        let candidate = ResumeParser::new().parse(file.path()).unwrap();

        assert_eq!(candidate.name, "Asha Verma");
        assert_eq!(candidate.email.as_deref(), Some("asha.verma@example.com"));
        assert_eq!(candidate.phone.as_deref(), Some("+91 9876543210"));
        assert_eq!(
            candidate.college.as_deref(),
            Some("Indian Institute of Technology, Delhi")
        );
        assert_eq!(candidate.degree, academics::DEFAULT_DEGREE);
        assert_eq!(candidate.graduation_year, Some(2026));
        assert_eq!(candidate.cgpa, Some(8.7));
        assert_eq!(candidate.projects.len(), 3);
        assert_eq!(candidate.experience.len(), 2);
        assert!(candidate.ai_score.is_none());

        for skill in ["Python", "Java", "React", "Git", "Docker", "Machine Learning"] {
            assert!(
                candidate.skills.iter().any(|s| s == skill),
                "missing {skill} in {:?}",
                candidate.skills
            );
        }
    }

    #[test]
    fn test_empty_txt_is_empty_document() {
        let file = write_resume(".txt", "");
        let err = ResumeParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptyDocument {
                format: DocumentFormat::Txt,
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_format_escalates_to_empty_document() {
        let file = write_resume(".odt", SAMPLE_RESUME);
        let err = ResumeParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptyDocument {
                format: DocumentFormat::Unsupported,
                ..
            }
        ));
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResumeParser::new()
            .parse(dir.path().join("resume.pdf"))
            .unwrap_err();
        assert!(matches!(err, ParseError::UnreadableFile { .. }));
    }

    #[test]
    fn test_recognizer_used_only_when_lines_fail() {
        let text = "Submitted for the campus placement drive by Rahul Sharma of Pune";
        let plain = ResumeParser::new().parse_text(text);
        assert_eq!(plain.name, contact::UNKNOWN_NAME);

        let parser = ResumeParser::with_recognizer(Arc::new(HeuristicPersonRecognizer::new()));
        assert!(parser.has_recognizer());
        assert_eq!(parser.parse_text(text).name, "Rahul Sharma");
        assert_eq!(parser.parse_text(SAMPLE_RESUME).name, "Asha Verma");
    }

    #[test]
    fn test_parse_text_is_repeatable() {
        let parser = ResumeParser::new();
        assert_eq!(parser.parse_text(SAMPLE_RESUME), parser.parse_text(SAMPLE_RESUME));
    }
}
