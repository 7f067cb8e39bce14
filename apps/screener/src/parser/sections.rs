//! Projects and experience sections.
//!
//! A section starts at its heading keyword followed by `:` or a newline and
//! runs to the earliest terminator (a blank line or the next section heading)
//! or the end of the text. The body is then split on bullet markers.

use once_cell::sync::Lazy;
use regex::Regex;

/// How one section is located and trimmed into entries.
struct SectionRule {
    heading: Regex,
    terminator: Regex,
    bullet: Regex,
    min_chars: usize,
    max_chars: usize,
    max_entries: usize,
}

static PROJECTS: Lazy<SectionRule> = Lazy::new(|| SectionRule {
    heading: Regex::new(r"(?i)(?:projects?|academic projects?)[:\n]").expect("valid heading"),
    terminator: Regex::new(r"(?i)\n\n|\nexperience|\neducation").expect("valid terminator"),
    // Bullets, dashes, asterisks, or "1." style numbering.
    bullet: Regex::new(r"\n\s*[•\-*0-9.]+\s*").expect("valid bullet"),
    min_chars: 10,
    max_chars: 100,
    max_entries: 3,
});

static EXPERIENCE: Lazy<SectionRule> = Lazy::new(|| SectionRule {
    heading: Regex::new(r"(?i)(?:experience|internship)[:\n]").expect("valid heading"),
    terminator: Regex::new(r"(?i)\n\n|\n\s*(?:education|projects?)\b")
        .expect("valid terminator"),
    bullet: Regex::new(r"\n\s*[•\-*]+\s*").expect("valid bullet"),
    min_chars: 15,
    max_chars: 150,
    max_entries: 2,
});

/// Up to three project descriptions, each truncated to 100 characters.
pub fn extract_projects(text: &str) -> Vec<String> {
    PROJECTS.entries(text)
}

/// Up to two experience entries, each truncated to 150 characters.
pub fn extract_experience(text: &str) -> Vec<String> {
    EXPERIENCE.entries(text)
}

impl SectionRule {
    fn body<'t>(&self, text: &'t str) -> Option<&'t str> {
        let start = self.heading.find(text)?.end();
        let rest = &text[start..];
        // The body holds at least one character before a terminator may end it.
        let first = rest.chars().next()?.len_utf8();
        let end = self
            .terminator
            .find(&rest[first..])
            .map(|m| first + m.start())
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    fn entries(&self, text: &str) -> Vec<String> {
        let Some(body) = self.body(text) else {
            return Vec::new();
        };

        // A leading newline lets the first bullet be split off like the others.
        let body = format!("\n{body}");
        self.bullet
            .split(&body)
            .map(str::trim)
            .filter(|entry| entry.chars().count() > self.min_chars)
            .map(|entry| entry.chars().take(self.max_chars).collect())
            .take(self.max_entries)
            .collect()
    }
}
