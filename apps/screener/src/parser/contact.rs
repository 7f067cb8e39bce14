//! Name, email and phone extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::entities::PersonRecognizer;

/// Returned when neither the line heuristic nor the recognizer finds a name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Only this many leading characters are handed to the recognizer.
const NER_WINDOW_CHARS: usize = 500;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

// Optional +91 prefix, then a 10-digit mobile number starting with 6-9.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+91[-\s]?)?[6789][0-9]{9}").expect("valid phone regex"));

/// First short line near the top of the document, else the first person the
/// recognizer finds in the opening characters, else [`UNKNOWN_NAME`].
pub fn extract_name(text: &str, recognizer: Option<&dyn PersonRecognizer>) -> String {
    let from_lines = text
        .trim()
        .split('\n')
        .map(str::trim)
        .find(|line| {
            !line.is_empty() && line.split_whitespace().count() <= 4 && line.chars().count() > 3
        });
    if let Some(line) = from_lines {
        return line.to_string();
    }

    if let Some(recognizer) = recognizer {
        let window: String = text.chars().take(NER_WINDOW_CHARS).collect();
        if let Some(person) = recognizer.first_person(&window) {
            return person;
        }
    }

    UNKNOWN_NAME.to_string()
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
