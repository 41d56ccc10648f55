//! CLI interface for the ATS matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-matcher")]
#[command(about = "Resume-to-job ATS scoring and ranking tool")]
#[command(
    long_about = "Parse resumes, score them against job descriptions, and rank job postings by compatibility"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume and print the extracted profile
    Parse {
        /// Path to resume file (PDF, DOCX, TXT)
        resume: PathBuf,

        /// Output format: console, json, markdown (defaults to configuration)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Score a resume against a single job description
    Score {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT)
        #[arg(short, long)]
        job: PathBuf,

        /// Include matched/missing skill lists in console output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to configuration)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank a file of job postings against a resume
    Rank {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON array of job records
        #[arg(short, long)]
        jobs: PathBuf,

        /// Minimum match score to include (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Show only the top N matches
        #[arg(short, long)]
        limit: Option<usize>,

        /// Include each job's skill listing in console output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to configuration)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
