//! Integration tests for the ATS matcher

use ats_matcher::config::Config;
use ats_matcher::error::AtsMatcherError;
use ats_matcher::input::manager::InputManager;
use ats_matcher::matching::profile::ProfileBuilder;
use ats_matcher::matching::ranker::{JobRanker, JobRecord};
use ats_matcher::matching::scorer::CompatibilityScorer;
use ats_matcher::matching::vocabulary::SkillVocabulary;
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_caching_by_content_hash() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    // identical bytes under a different name share a cache entry
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("copy.txt");
    std::fs::copy(path, &copy).unwrap();
    let text3 = manager.extract_text(&copy).await.unwrap();
    assert_eq!(text1, text3);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_score_from_fixtures() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let vocabulary = Arc::new(SkillVocabulary::default());
    let profile = ProfileBuilder::new(Arc::clone(&vocabulary)).build(&resume_text);

    assert_eq!(profile.email.as_deref(), Some("jane.smith@example.com"));
    assert_eq!(profile.years_experience, 5);
    assert!(profile.skills.contains("python"));
    assert!(profile.skills.contains("rest api"));

    let scorer = CompatibilityScorer::new(vocabulary);
    let result = scorer.score(&profile, &job_text);

    // 5 years on hand against a stated 3+ floor
    assert_eq!(result.breakdown.experience, 100.0);
    assert!(result.matched_skills.contains("python"));
    assert!(result.matched_skills.contains("react"));
    assert!(result.matched_skills.contains("docker"));
    assert!(result.missing_skills.contains("kubernetes"));
    assert!(result.total_score > 50.0);
    assert!(result.total_score <= 100.0);

    let expected = 0.4 * result.breakdown.keywords
        + 0.35 * result.breakdown.skills
        + 0.25 * result.breakdown.experience;
    assert!((result.total_score - expected).abs() < 0.1);
}

#[tokio::test]
async fn test_ranking_jobs_file() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let jobs = ats_matcher::input::jobs::load_jobs(Path::new("tests/fixtures/sample_jobs.json"))
        .await
        .unwrap();
    assert_eq!(jobs.len(), 4);

    let vocabulary = Arc::new(SkillVocabulary::default());
    let profile = ProfileBuilder::new(Arc::clone(&vocabulary)).build(&resume_text);
    let ranker = JobRanker::new(CompatibilityScorer::new(vocabulary));

    let ranked = ranker.rank(&profile, &jobs, 30.0);

    // pastry job cannot clear the threshold, tech jobs outrank it
    assert!(ranked.iter().all(|r| r.job.title != "Pastry Chef"));
    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    assert!(ranked[0].match_score >= 50.0);
}

#[test]
fn test_fuzzed_inputs_never_panic() {
    let vocabulary = Arc::new(SkillVocabulary::default());
    let builder = ProfileBuilder::new(Arc::clone(&vocabulary));
    let scorer = CompatibilityScorer::new(Arc::clone(&vocabulary));
    let ranker = JobRanker::new(CompatibilityScorer::new(vocabulary));

    let nasty_inputs = [
        "",
        " ",
        "\n\n\n",
        "0 years",
        "9999999999 years of c++",
        "éàüß 日本語 python٤",
        "@@@@....++++",
        "java java java javascript",
        "a@b.c 100000 years",
    ];

    for resume in &nasty_inputs {
        let profile = builder.build(resume);
        assert!(profile.years_experience < 40);
        assert_eq!(profile.word_count, resume.split_whitespace().count());

        for job in &nasty_inputs {
            let result = scorer.score(&profile, job);
            assert!((0.0..=100.0).contains(&result.total_score));
        }

        let jobs = vec![JobRecord {
            title: resume.to_string(),
            ..Default::default()
        }];
        let _ = ranker.rank(&profile, &jobs, 0.0);
    }

    let config = Config::default();
    assert!(config.scoring.default_threshold >= 0.0);
}
