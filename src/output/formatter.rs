//! Output formatters: console with colors, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::{AtsMatcherError, Result};
use crate::matching::profile::ResumeProfile;
use crate::matching::ranker::RankedJob;
use crate::matching::scorer::ScoreResult;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// One resume scored against one job description
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub resume_file: String,
    pub job_file: String,
    pub result: ScoreResult,
    pub generated_at: DateTime<Utc>,
}

/// A ranked set of job postings for one resume
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub resume_file: String,
    pub threshold: f64,
    pub total_jobs: usize,
    pub matches: Vec<RankedJob>,
    pub generated_at: DateTime<Utc>,
}

pub trait OutputFormatter {
    fn format_profile(&self, profile: &ResumeProfile) -> Result<String>;
    fn format_score(&self, report: &ScoreReport) -> Result<String>;
    fn format_rank(&self, report: &RankReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter;

pub struct MarkdownFormatter;

/// Coordinates the formatters and handles writing output to disk
pub struct ReportGenerator {
    format: OutputFormat,
    use_colors: bool,
    detailed: bool,
}

/// Score band labels used by console and markdown output, matching the
/// presentation thresholds: 80+ excellent, 50+ good, below that low.
fn score_band(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent Match"
    } else if score >= 50.0 {
        "Good Match"
    } else {
        "Low Match"
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize_score(&self, score: f64) -> String {
        let text = format!("{:.1}%", score);
        if !self.use_colors {
            return text;
        }
        if score >= 80.0 {
            text.green().bold().to_string()
        } else if score >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_profile(&self, profile: &ResumeProfile) -> Result<String> {
        let mut out = String::new();
        out.push_str("Resume Profile\n");
        out.push_str("==============\n");
        out.push_str(&format!(
            "Email:            {}\n",
            profile.email.as_deref().unwrap_or("not found")
        ));
        out.push_str(&format!(
            "Years experience: {}\n",
            profile.years_experience
        ));
        out.push_str(&format!("Word count:       {}\n", profile.word_count));

        if profile.skills.is_empty() {
            out.push_str("Skills:           none recognized\n");
        } else {
            let skills: Vec<&str> = profile.skills.iter().map(|s| s.as_str()).collect();
            out.push_str(&format!("Skills:           {}\n", skills.join(", ")));
        }

        Ok(out)
    }

    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        out.push_str(&format!(
            "\nATS Score: {} ({})\n",
            self.colorize_score(result.total_score),
            score_band(result.total_score)
        ));
        out.push_str(&format!("Resume: {}\n", report.resume_file));
        out.push_str(&format!("Job:    {}\n\n", report.job_file));

        out.push_str("Breakdown\n");
        out.push_str(&format!(
            "  Keywords (40%):   {}\n",
            self.colorize_score(result.breakdown.keywords)
        ));
        out.push_str(&format!(
            "  Skills (35%):     {}\n",
            self.colorize_score(result.breakdown.skills)
        ));
        out.push_str(&format!(
            "  Experience (25%): {}\n",
            self.colorize_score(result.breakdown.experience)
        ));

        if self.detailed {
            if !result.matched_skills.is_empty() {
                let matched: Vec<&str> =
                    result.matched_skills.iter().map(|s| s.as_str()).collect();
                out.push_str(&format!("\nMatched skills: {}\n", matched.join(", ")));
            }
            if !result.missing_skills.is_empty() {
                let missing: Vec<&str> =
                    result.missing_skills.iter().map(|s| s.as_str()).collect();
                let line = format!("Missing skills: {}", missing.join(", "));
                if self.use_colors {
                    out.push_str(&format!("{}\n", line.yellow()));
                } else {
                    out.push_str(&format!("{}\n", line));
                }
            }
        }

        Ok(out)
    }

    fn format_rank(&self, report: &RankReport) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!(
            "\n{} of {} jobs at or above threshold {:.1}\n\n",
            report.matches.len(),
            report.total_jobs,
            report.threshold
        ));

        for (idx, ranked) in report.matches.iter().enumerate() {
            let title = if ranked.job.title.is_empty() {
                "(untitled)"
            } else {
                ranked.job.title.as_str()
            };
            out.push_str(&format!(
                "{:>3}. {} - {}\n",
                idx + 1,
                self.colorize_score(ranked.match_score),
                title
            ));
            if self.detailed && !ranked.job.skills.trim().is_empty() {
                out.push_str(&format!("     skills: {}\n", ranked.job.skills.trim()));
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_profile(&self, profile: &ResumeProfile) -> Result<String> {
        Ok(serde_json::to_string_pretty(profile)?)
    }

    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_rank(&self, report: &RankReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_profile(&self, profile: &ResumeProfile) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Resume Profile\n\n");
        out.push_str(&format!(
            "- **Email**: {}\n",
            profile.email.as_deref().unwrap_or("not found")
        ));
        out.push_str(&format!(
            "- **Years of experience**: {}\n",
            profile.years_experience
        ));
        out.push_str(&format!("- **Word count**: {}\n", profile.word_count));
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!("- **Skills**: {}\n", skills.join(", ")));
        Ok(out)
    }

    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        out.push_str("# ATS Score Report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!("- **Resume**: {}\n", report.resume_file));
        out.push_str(&format!("- **Job**: {}\n\n", report.job_file));
        out.push_str(&format!(
            "## Total: {:.1}% ({})\n\n",
            result.total_score,
            score_band(result.total_score)
        ));

        out.push_str("| Dimension | Weight | Score |\n");
        out.push_str("|-----------|--------|-------|\n");
        out.push_str(&format!(
            "| Keywords | 40% | {:.1}% |\n",
            result.breakdown.keywords
        ));
        out.push_str(&format!(
            "| Skills | 35% | {:.1}% |\n",
            result.breakdown.skills
        ));
        out.push_str(&format!(
            "| Experience | 25% | {:.1}% |\n\n",
            result.breakdown.experience
        ));

        if !result.matched_skills.is_empty() {
            let matched: Vec<&str> = result.matched_skills.iter().map(|s| s.as_str()).collect();
            out.push_str(&format!("**Matched skills**: {}\n\n", matched.join(", ")));
        }
        if !result.missing_skills.is_empty() {
            let missing: Vec<&str> = result.missing_skills.iter().map(|s| s.as_str()).collect();
            out.push_str(&format!("**Missing skills**: {}\n", missing.join(", ")));
        }

        Ok(out)
    }

    fn format_rank(&self, report: &RankReport) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Job Matches\n\n");
        out.push_str(&format!(
            "{} of {} jobs at or above threshold {:.1}\n\n",
            report.matches.len(),
            report.total_jobs,
            report.threshold
        ));

        out.push_str("| # | Score | Title |\n");
        out.push_str("|---|-------|-------|\n");
        for (idx, ranked) in report.matches.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {:.1}% | {} |\n",
                idx + 1,
                ranked.match_score,
                ranked.job.title
            ));
        }

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new(format: OutputFormat, use_colors: bool, detailed: bool) -> Self {
        Self {
            format,
            use_colors,
            detailed,
        }
    }

    fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Console => {
                Box::new(ConsoleFormatter::new(self.use_colors, self.detailed))
            }
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        }
    }

    pub fn render_profile(&self, profile: &ResumeProfile) -> Result<String> {
        self.formatter().format_profile(profile)
    }

    pub fn render_score(&self, report: &ScoreReport) -> Result<String> {
        self.formatter().format_score(report)
    }

    pub fn render_rank(&self, report: &RankReport) -> Result<String> {
        self.formatter().format_rank(report)
    }

    pub fn save(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content).map_err(|e| {
            AtsMatcherError::OutputFormatting(format!(
                "Failed to save report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}
