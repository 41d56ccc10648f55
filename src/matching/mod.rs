//! Matching engine module
//! Skill vocabulary, resume profiles, compatibility scoring, and job ranking

pub mod vocabulary;
pub mod profile;
pub mod scorer;
pub mod ranker;

pub use vocabulary::SkillVocabulary;
pub use profile::{ProfileBuilder, ResumeProfile};
pub use ranker::{JobRanker, JobRecord, RankedJob};
pub use scorer::{CompatibilityScorer, ScoreBreakdown, ScoreResult};
