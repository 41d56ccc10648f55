//! ATS matcher: resume-to-job scoring and ranking tool

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AtsMatcherError, Result};
use input::jobs::load_jobs;
use input::manager::InputManager;
use log::{error, info, warn};
use matching::profile::{ProfileBuilder, ResumeProfile};
use matching::ranker::JobRanker;
use matching::scorer::CompatibilityScorer;
use matching::vocabulary::SkillVocabulary;
use output::{RankReport, ReportGenerator, ScoreReport};
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse { resume, output } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| AtsMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let generator = report_generator(output.as_deref(), &config, false)?;
            let vocabulary = vocabulary(&config)?;

            let profile = extract_profile(&resume, &vocabulary, &config).await?;
            println!("{}", generator.render_profile(&profile)?);
        }

        Commands::Score {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| AtsMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["pdf", "docx", "txt"])
                .map_err(|e| AtsMatcherError::InvalidInput(format!("Job file: {}", e)))?;

            let generator = report_generator(output.as_deref(), &config, detailed)?;
            let vocabulary = vocabulary(&config)?;

            info!("Scoring {} against {}", resume.display(), job.display());
            let profile = extract_profile(&resume, &vocabulary, &config).await?;

            let mut manager =
                InputManager::new().with_cache(config.processing.enable_caching);
            let job_text = manager.extract_text(&job).await?;

            let scorer = CompatibilityScorer::with_weights(vocabulary, config.weights());
            let result = scorer.score(&profile, &job_text);

            let report = ScoreReport {
                resume_file: resume.display().to_string(),
                job_file: job.display().to_string(),
                result,
                generated_at: chrono::Utc::now(),
            };

            let rendered = generator.render_score(&report)?;
            println!("{}", rendered);
            save_if_requested(&generator, &rendered, save.as_deref())?;
        }

        Commands::Rank {
            resume,
            jobs,
            threshold,
            limit,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt"])
                .map_err(|e| AtsMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let generator = report_generator(output.as_deref(), &config, detailed)?;
            let vocabulary = vocabulary(&config)?;
            let threshold = threshold.unwrap_or(config.scoring.default_threshold);

            let profile = extract_profile(&resume, &vocabulary, &config).await?;
            let job_records = load_jobs(&jobs).await?;
            let total_jobs = job_records.len();

            let ranker =
                JobRanker::new(CompatibilityScorer::with_weights(vocabulary, config.weights()));
            let mut matches = ranker.rank(&profile, &job_records, threshold);

            if let Some(limit) = limit {
                matches.truncate(limit);
            }

            let report = RankReport {
                resume_file: resume.display().to_string(),
                threshold,
                total_jobs,
                matches,
                generated_at: chrono::Utc::now(),
            };

            let rendered = generator.render_rank(&report)?;
            println!("{}", rendered);
            save_if_requested(&generator, &rendered, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
        },
    }

    Ok(())
}

fn vocabulary(config: &Config) -> Result<Arc<SkillVocabulary>> {
    Ok(Arc::new(SkillVocabulary::with_custom_skills(
        config.scoring.custom_skills.clone(),
    )?))
}

/// The `-o` flag wins when given; otherwise the configured default
/// format applies. The same precedence holds for `--detailed`.
fn report_generator(
    format: Option<&str>,
    config: &Config,
    detailed: bool,
) -> Result<ReportGenerator> {
    let format = match format {
        Some(format) => cli::parse_output_format(format).map_err(AtsMatcherError::InvalidInput)?,
        None => config.output.format.clone(),
    };
    Ok(ReportGenerator::new(
        format,
        config.output.color_output,
        detailed || config.output.detailed,
    ))
}

/// Extract resume text and build a profile. A corrupt document degrades
/// to an empty profile instead of aborting; an unsupported format is
/// surfaced to the user.
async fn extract_profile(
    resume: &Path,
    vocabulary: &Arc<SkillVocabulary>,
    config: &Config,
) -> Result<ResumeProfile> {
    let mut manager = InputManager::new().with_cache(config.processing.enable_caching);

    let text = match manager.extract_text(resume).await {
        Ok(text) => text,
        Err(AtsMatcherError::ExtractionFailed(e)) => {
            warn!(
                "Could not extract text from {}: {}. Continuing with an empty profile.",
                resume.display(),
                e
            );
            String::new()
        }
        Err(e) => return Err(e),
    };

    Ok(ProfileBuilder::new(Arc::clone(vocabulary)).build(&text))
}

fn save_if_requested(
    generator: &ReportGenerator,
    content: &str,
    path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = path {
        generator.save(content, path)?;
        info!("Report saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_defaults_from_config() {
        let mut config = Config::default();
        config.output.format = config::OutputFormat::Markdown;

        let profile =
            ProfileBuilder::new(Arc::new(SkillVocabulary::default())).build("python developer");

        // no -o flag: the configured format wins
        let generator = report_generator(None, &config, false).unwrap();
        let rendered = generator.render_profile(&profile).unwrap();
        assert!(rendered.starts_with("# Resume Profile"));

        // explicit -o flag overrides the configured format
        let generator = report_generator(Some("json"), &config, false).unwrap();
        let rendered = generator.render_profile(&profile).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&rendered).is_ok());
    }

    #[tokio::test]
    async fn test_extract_profile_falls_back_on_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let config = Config::default();
        let vocab = vocabulary(&config).unwrap();
        let profile = extract_profile(&path, &vocab, &config).await.unwrap();

        assert!(profile.skills.is_empty());
        assert_eq!(profile.word_count, 0);
    }
}
