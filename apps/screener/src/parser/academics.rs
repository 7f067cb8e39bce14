//! Academic fields: CGPA, graduation year, college and degree.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder until degree detection exists; every record carries this value.
pub const DEFAULT_DEGREE: &str = "B.Tech Computer Science";

/// Tried in order against the lower-cased text; the first pattern that
/// matches decides the result, even if its value is later rejected.
static CGPA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"cgpa[:\s]+([0-9]+\.?[0-9]*)",
        r"gpa[:\s]+([0-9]+\.?[0-9]*)",
        r"grade[:\s]+([0-9]+\.?[0-9]*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid cgpa regex"))
    .collect()
});

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20[2-3][0-9])\b").expect("valid year regex"));

/// Lower-case substrings that mark a line as naming an institution.
pub const COLLEGE_KEYWORDS: &[&str] = &[
    "iit",
    "nit",
    "iiit",
    "bits",
    "vit",
    "dtu",
    "nsit",
    "university",
    "institute of technology",
    "college",
];

/// Values at or below this are read as a 4-point GPA.
const FOUR_POINT_CEILING: f64 = 4.0;
const FOUR_TO_TEN_FACTOR: f64 = 2.5;
const MAX_CGPA: f64 = 10.0;

/// CGPA on a 10-point scale, rounded to two decimals.
///
/// Returns `None` when no pattern matches or when the first match does not
/// land in `[0, 10]` after rescaling (e.g. a percentage after "grade:").
pub fn extract_cgpa(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let captured = CGPA_PATTERNS
        .iter()
        .find_map(|re| re.captures(&lower))
        .and_then(|caps| caps.get(1))?;

    let mut cgpa: f64 = captured.as_str().parse().ok()?;
    if cgpa <= FOUR_POINT_CEILING {
        cgpa *= FOUR_TO_TEN_FACTOR;
    }
    let cgpa = (cgpa * 100.0).round() / 100.0;

    (0.0..=MAX_CGPA).contains(&cgpa).then_some(cgpa)
}

/// Latest year in 2020–2039 mentioned anywhere in the text.
pub fn extract_graduation_year(text: &str) -> Option<i32> {
    YEAR_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
        .max()
}

/// First line mentioning an institution keyword, in its original case.
pub fn extract_college(text: &str) -> Option<String> {
    text.split('\n')
        .find(|line| {
            let lower = line.to_lowercase();
            COLLEGE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(|line| line.trim().to_string())
}
