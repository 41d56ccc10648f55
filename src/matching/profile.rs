//! Resume profile extraction from plain text

use crate::matching::vocabulary::SkillVocabulary;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Structured facts extracted from a resume. Built once per uploaded
/// document and never mutated; a re-upload supersedes the old profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub raw_text: String,
    pub skills: BTreeSet<String>,
    pub email: Option<String>,
    pub years_experience: u32,
    pub word_count: usize,
}

/// Builds `ResumeProfile`s from extracted resume text.
///
/// Total and deterministic: empty or garbled input yields zero/absent
/// fields, never an error.
pub struct ProfileBuilder {
    vocabulary: Arc<SkillVocabulary>,
    email_regex: Regex,
    years_regex: Regex,
}

/// Year figures at or above this are treated as noise (phone number
/// fragments, calendar years) rather than experience.
pub const MAX_PLAUSIBLE_YEARS: u32 = 40;

/// "N years", "N+ years", and "N-M years" ranges. Shared by the profile
/// builder (which keeps the maximum) and the scorer (which reads the
/// minimum as the stated floor).
pub(crate) const YEARS_PATTERN: &str = r"(\d+)(?:\s*-\s*(\d+))?\+?\s*years?";

/// All integers captured by the years pattern, range endpoints included.
/// Figures too large for u32 are dropped as noise.
pub(crate) fn capture_year_figures(regex: &Regex, text: &str) -> Vec<u32> {
    let mut figures = Vec::new();
    for cap in regex.captures_iter(text) {
        if let Ok(v) = cap[1].parse::<u32>() {
            figures.push(v);
        }
        if let Some(upper) = cap.get(2) {
            if let Ok(v) = upper.as_str().parse::<u32>() {
                figures.push(v);
            }
        }
    }
    figures
}

impl ProfileBuilder {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let years_regex = Regex::new(YEARS_PATTERN).expect("Invalid years regex");

        Self {
            vocabulary,
            email_regex,
            years_regex,
        }
    }

    pub fn build(&self, text: &str) -> ResumeProfile {
        let text_lower = text.to_lowercase();

        let skills = self.vocabulary.find_in(&text_lower);

        let email = self
            .email_regex
            .find(text)
            .map(|m| m.as_str().to_string());

        let years_experience = capture_year_figures(&self.years_regex, &text_lower)
            .into_iter()
            .filter(|&y| y < MAX_PLAUSIBLE_YEARS)
            .max()
            .unwrap_or(0);

        let word_count = text.split_whitespace().count();

        ResumeProfile {
            raw_text: text.to_string(),
            skills,
            email,
            years_experience,
            word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ProfileBuilder {
        ProfileBuilder::new(Arc::new(SkillVocabulary::default()))
    }

    #[test]
    fn test_build_full_profile() {
        let text = "Jane Doe\njane@example.com\n8 years of experience with Python, Docker and AWS.";
        let profile = builder().build(text);

        assert_eq!(profile.email.as_deref(), Some("jane@example.com"));
        assert_eq!(profile.years_experience, 8);
        assert!(profile.skills.contains("python"));
        assert!(profile.skills.contains("docker"));
        assert!(profile.skills.contains("aws"));
        assert_eq!(profile.word_count, text.split_whitespace().count());
    }

    #[test]
    fn test_empty_text() {
        let profile = builder().build("");

        assert!(profile.skills.is_empty());
        assert!(profile.email.is_none());
        assert_eq!(profile.years_experience, 0);
        assert_eq!(profile.word_count, 0);
    }

    #[test]
    fn test_implausible_years_discarded() {
        // "2024 years" style noise must not become experience
        let profile = builder().build("Since 2024 years of glory, but really 6 years in SRE");
        assert_eq!(profile.years_experience, 6);

        let profile = builder().build("worked 50 years somewhere");
        assert_eq!(profile.years_experience, 0);
    }

    #[test]
    fn test_max_of_multiple_year_mentions() {
        let profile = builder().build("3 years of Go, 10+ years of Python, 5 years of SQL");
        assert_eq!(profile.years_experience, 10);
    }

    #[test]
    fn test_first_email_wins() {
        let profile = builder().build("a@b.com then c@d.org");
        assert_eq!(profile.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_idempotent() {
        let text = "5 years with React and TypeScript. dev@mail.io";
        let b = builder();
        assert_eq!(b.build(text), b.build(text));
    }
}
