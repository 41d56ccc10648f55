//! Resume-to-job compatibility scoring

use crate::matching::profile::{capture_year_figures, ResumeProfile, YEARS_PATTERN};
use crate::matching::vocabulary::SkillVocabulary;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Weights for the three scoring dimensions. Must sum to 1.0 for the
/// total to stay on the 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keywords: f64,
    pub skills: f64,
    pub experience: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keywords: 0.4,
            skills: 0.35,
            experience: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: f64,
    pub skills: f64,
    pub experience: f64,
}

/// Result of scoring one resume against one job text. All scores are in
/// [0, 100], rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

/// Number of resume words that counts as "rich enough" when a job text
/// states no explicit experience requirement.
const RICHNESS_WORDS: f64 = 500.0;

/// Scores a `ResumeProfile` against arbitrary job text.
///
/// A pure function of its inputs: no mutation, no I/O, and no failure
/// mode. Empty inputs degrade to zero scores, not errors.
pub struct CompatibilityScorer {
    vocabulary: Arc<SkillVocabulary>,
    weights: ScoreWeights,
    stop_words: HashSet<&'static str>,
    keyword_regex: Regex,
    years_regex: Regex,
}

impl CompatibilityScorer {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self::with_weights(vocabulary, ScoreWeights::default())
    }

    pub fn with_weights(vocabulary: Arc<SkillVocabulary>, weights: ScoreWeights) -> Self {
        let keyword_regex = Regex::new(r"\b[a-zA-Z]{3,}\b").expect("Invalid keyword regex");
        let years_regex = Regex::new(YEARS_PATTERN).expect("Invalid years regex");

        Self {
            vocabulary,
            weights,
            stop_words: Self::stop_words(),
            keyword_regex,
            years_regex,
        }
    }

    pub fn score(&self, profile: &ResumeProfile, job_text: &str) -> ScoreResult {
        let job_text_lower = job_text.to_lowercase();

        // 1. Keyword overlap
        let job_keywords = self.extract_keywords(job_text);
        let resume_keywords = self.extract_keywords(&profile.raw_text);
        let keyword_score = Self::overlap(&job_keywords, &resume_keywords);

        // 2. Skill overlap, falling back to the keyword score when the
        // job text names no recognized skill
        let job_skills = self.vocabulary.find_in(&job_text_lower);
        let (skill_score, matched_skills, missing_skills) = if job_skills.is_empty() {
            (keyword_score, BTreeSet::new(), BTreeSet::new())
        } else {
            let matched: BTreeSet<String> =
                job_skills.intersection(&profile.skills).cloned().collect();
            let missing: BTreeSet<String> =
                job_skills.difference(&profile.skills).cloned().collect();
            let score = matched.len() as f64 / job_skills.len() as f64 * 100.0;
            (score, matched, missing)
        };

        // 3. Experience fit
        let required_years = self.required_years(&job_text_lower);
        let experience_score = if required_years > 0 {
            if profile.years_experience >= required_years {
                100.0
            } else {
                profile.years_experience as f64 / required_years as f64 * 100.0
            }
        } else {
            // No stated requirement: use resume richness as a proxy
            (profile.word_count as f64 / RICHNESS_WORDS * 100.0).min(100.0)
        };

        let total = keyword_score * self.weights.keywords
            + skill_score * self.weights.skills
            + experience_score * self.weights.experience;

        ScoreResult {
            total_score: round1(total),
            breakdown: ScoreBreakdown {
                keywords: round1(keyword_score),
                skills: round1(skill_score),
                experience: round1(experience_score),
            },
            matched_skills,
            missing_skills,
        }
    }

    /// Alphabetic tokens of length >= 3, lowercased, stop words removed
    fn extract_keywords(&self, text: &str) -> HashSet<String> {
        let lower = text.to_lowercase();
        self.keyword_regex
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .filter(|w| !self.stop_words.contains(w.as_str()))
            .collect()
    }

    /// Percentage of `job` keywords also present in `resume`
    fn overlap(job: &HashSet<String>, resume: &HashSet<String>) -> f64 {
        if job.is_empty() {
            return 0.0;
        }
        job.intersection(resume).count() as f64 / job.len() as f64 * 100.0
    }

    /// Minimum years figure stated in the job text ("3-5 years" reads as
    /// a floor of 3). Unrelated numbers followed by "years" can misfire;
    /// a known limitation of the heuristic.
    fn required_years(&self, job_text_lower: &str) -> u32 {
        capture_year_figures(&self.years_regex, job_text_lower)
            .into_iter()
            .min()
            .unwrap_or(0)
    }

    fn stop_words() -> HashSet<&'static str> {
        [
            "and", "the", "is", "in", "at", "of", "or", "for", "with", "to", "a", "an",
            "as", "by", "on", "are", "be", "will", "that", "this", "from", "it", "we", "us",
        ]
        .into_iter()
        .collect()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
