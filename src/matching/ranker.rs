//! Ranking job postings against a resume profile

use crate::matching::profile::ResumeProfile;
use crate::matching::scorer::CompatibilityScorer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A job posting as consumed by the ranker. The schema is deliberately
/// loose: only title, skills and experience are scored, missing fields
/// default to empty, and anything else rides along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JobRecord {
    /// Text representation used for scoring: title, skills and
    /// experience joined, empty fields omitted
    pub fn scoring_text(&self) -> String {
        [&self.title, &self.skills, &self.experience]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A job record with its attached match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobRecord,
    pub match_score: f64,
}

/// Applies the scorer across a collection of jobs and ranks the results.
pub struct JobRanker {
    scorer: CompatibilityScorer,
}

impl JobRanker {
    pub fn new(scorer: CompatibilityScorer) -> Self {
        Self { scorer }
    }

    /// Score every job against the profile, keep those at or above the
    /// threshold, and sort descending by score. The sort is stable, so
    /// tied jobs keep their input order. Empty input yields empty output.
    pub fn rank(
        &self,
        profile: &ResumeProfile,
        jobs: &[JobRecord],
        threshold: f64,
    ) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| {
                let result = self.scorer.score(profile, &job.scoring_text());
                RankedJob {
                    job: job.clone(),
                    match_score: result.total_score,
                }
            })
            .filter(|r| r.match_score >= threshold)
            .collect();

        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        ranked
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }
}
