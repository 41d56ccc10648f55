//! Configuration management for the ATS matcher

use crate::error::{AtsMatcherError, Result};
use crate::matching::scorer::ScoreWeights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub default_threshold: f64,
    /// Extra skills appended to the built-in vocabulary
    pub custom_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                keyword_weight: 0.4,
                skill_weight: 0.35,
                experience_weight: 0.25,
                default_threshold: 0.0,
                custom_skills: Vec::new(),
            },
            processing: ProcessingConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicit path when given. An
    /// explicit path must exist and parse; the default location falls
    /// back to writing fresh defaults on first run.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path).map_err(|e| {
                AtsMatcherError::Configuration(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                ))
            })?;
            return toml::from_str(&content).map_err(|e| {
                AtsMatcherError::Configuration(format!("Failed to parse config: {}", e))
            });
        }

        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsMatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-matcher")
            .join("config.toml")
    }

    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            keywords: self.scoring.keyword_weight,
            skills: self.scoring.skill_weight,
            experience: self.scoring.experience_weight,
        }
    }
}
