//! Technical-skill detection against a fixed vocabulary.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Skills recognised in resume text, lower-case.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "html",
    "css",
    "typescript",
    "sql",
    "nosql",
    "rest",
    "graphql",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "data structures",
    "algorithms",
    "system design",
    "agile",
    "scrum",
];

/// One matcher per vocabulary entry. A skill must not be glued to a word
/// character on either side, so "java" does not fire inside "javascript"
/// and "c++" still matches when followed by a comma.
static SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TECH_SKILLS
        .iter()
        .map(|&skill| {
            let pattern = format!(r"(?i)(?:^|[^\w]){}(?:$|[^\w])", regex::escape(skill));
            (skill, Regex::new(&pattern).expect("valid skill regex"))
        })
        .collect()
});

/// Vocabulary skills present in `text`, title-cased, deduplicated and sorted.
pub fn extract_skills(text: &str) -> Vec<String> {
    SKILL_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| title_case(skill))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
/// ("node.js" → "Node.Js", "scikit-learn" → "Scikit-Learn").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(skills: Vec<String>) -> HashSet<String> {
        skills.into_iter().collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        let skills = as_set(extract_skills("Languages: JavaScript, PYTHON\nTools: Git"));
        let expected: HashSet<String> = ["Javascript", "Python", "Git"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_symbol_skills() {
        let skills = as_set(extract_skills("C++, C# and Node.js developer"));
        assert!(skills.contains("C++"));
        assert!(skills.contains("C#"));
        assert!(skills.contains("Node.Js"));
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = as_set(extract_skills(
            "Coursework: Data Structures, Algorithms, Machine Learning",
        ));
        assert!(skills.contains("Data Structures"));
        assert!(skills.contains("Algorithms"));
        assert!(skills.contains("Machine Learning"));
    }

    #[test]
    fn test_no_partial_word_matches() {
        let skills = as_set(extract_skills("Gitlab pipelines, Reactive streams, awsome"));
        assert!(!skills.contains("Git"));
        assert!(!skills.contains("React"));
        assert!(!skills.contains("Aws"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = extract_skills("python python PYTHON");
        assert_eq!(skills, vec!["Python".to_string()]);
    }

    #[test]
    fn test_output_within_vocabulary() {
        let text = "Rust, Go, Python, Kubernetes, Haskell";
        let vocab: HashSet<String> = TECH_SKILLS.iter().map(|s| title_case(s)).collect();
        for skill in extract_skills(text) {
            assert!(vocab.contains(&skill), "{skill} is outside the vocabulary");
        }
    }
}
