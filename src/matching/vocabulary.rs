//! Shared skill vocabulary with boundary-safe matching

use crate::error::{AtsMatcherError, Result};
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Closed set of recognized skill strings, shared by the profile builder
/// and the scorer so both sides detect skills identically.
pub struct SkillVocabulary {
    skills: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillVocabulary {
    /// Create a vocabulary with the built-in skill list
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Create a vocabulary with additional custom skills appended
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut skills: Vec<String> = Self::builtin_skills()
            .iter()
            .map(|s| s.to_string())
            .collect();
        skills.extend(additional_skills.into_iter().map(|s| s.to_lowercase()));
        skills.sort();
        skills.dedup();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&skills)
            .map_err(|e| {
                AtsMatcherError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { skills, matcher })
    }

    /// Find all vocabulary skills present in the text.
    ///
    /// Matches are case-insensitive and boundary-safe: a hit is discarded
    /// when it is flanked by an alphanumeric character, so "java" never
    /// registers inside "javascript" and "sql" never inside "nosql".
    /// Punctuation inside a skill name ("c++", "node.js", "ci/cd") is
    /// matched literally.
    pub fn find_in(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();

        for mat in self.matcher.find_iter(text) {
            let before = text[..mat.start()].chars().next_back();
            let after = text[mat.end()..].chars().next();

            if before.map_or(false, |c| c.is_alphanumeric()) {
                continue;
            }
            if after.map_or(false, |c| c.is_alphanumeric()) {
                continue;
            }

            found.insert(self.skills[mat.pattern().as_usize()].clone());
        }

        found
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == &skill.to_lowercase())
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    fn builtin_skills() -> &'static [&'static str] {
        &[
            "python", "java", "c++", "javascript", "typescript", "react", "angular",
            "vue", "node.js", "django", "flask", "fastapi", "sql", "mysql", "postgresql",
            "mongodb", "aws", "azure", "gcp", "docker", "kubernetes", "git", "ci/cd",
            "machine learning", "deep learning", "nlp", "pytorch", "tensorflow",
            "scikit-learn", "pandas", "numpy", "data analysis", "rest api", "graphql",
            "html", "css", "sass", "less", "redux", "mobx", "next.js", "nuxt.js",
            "elasticsearch", "redis", "rabbitmq", "kafka", "linux", "bash", "shell",
        ]
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new().expect("Failed to build default skill vocabulary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_creation() {
        let vocab = SkillVocabulary::new().unwrap();
        assert!(vocab.skill_count() > 0);
        assert!(vocab.contains("python"));
        assert!(vocab.contains("node.js"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let vocab = SkillVocabulary::new().unwrap();
        let found = vocab.find_in("Experienced with Python, REACT and PostgreSQL.");

        assert!(found.contains("python"));
        assert!(found.contains("react"));
        assert!(found.contains("postgresql"));
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let vocab = SkillVocabulary::new().unwrap();

        let found = vocab.find_in("Senior JavaScript developer");
        assert!(found.contains("javascript"));
        assert!(!found.contains("java"));

        let found = vocab.find_in("Senior Java developer");
        assert!(found.contains("java"));
        assert!(!found.contains("javascript"));
    }

    #[test]
    fn test_embedded_skill_rejected() {
        let vocab = SkillVocabulary::new().unwrap();

        assert!(!vocab.find_in("We use NoSQL stores").contains("sql"));
        assert!(!vocab.find_in("wireless networking").contains("less"));
        assert!(vocab.find_in("strong SQL knowledge").contains("sql"));
    }

    #[test]
    fn test_punctuated_skills() {
        let vocab = SkillVocabulary::new().unwrap();
        let found = vocab.find_in("C++ and Node.js, plus CI/CD pipelines");

        assert!(found.contains("c++"));
        assert!(found.contains("node.js"));
        assert!(found.contains("ci/cd"));
    }

    #[test]
    fn test_phrase_skills() {
        let vocab = SkillVocabulary::new().unwrap();
        let found = vocab.find_in("Background in machine learning and data analysis");

        assert!(found.contains("machine learning"));
        assert!(found.contains("data analysis"));
    }

    #[test]
    fn test_custom_skills() {
        let vocab = SkillVocabulary::with_custom_skills(vec!["Rust".to_string()]).unwrap();
        let found = vocab.find_in("Rust and Python services");

        assert!(found.contains("rust"));
        assert!(found.contains("python"));
    }
}
