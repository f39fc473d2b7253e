//! Configuration management for the resume fit analyzer

use crate::error::{Result, ResumeFitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub letter: LetterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Words excluded from extraction on top of the built-in stopword list.
    pub extra_stopwords: Vec<String>,
    /// Minimum keyword length in characters.
    pub min_token_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterConfig {
    /// How many matching keywords are woven into the letter.
    pub highlight_limit: usize,
    /// Name used when none is stored and none is supplied.
    pub default_candidate_name: String,
    /// Simulated price shown by the payment gate, in USD.
    pub simulated_price_usd: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Cap on keywords shown per rendered list.
    pub max_displayed_keywords: usize,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                extra_stopwords: Vec::new(),
                min_token_len: 3,
            },
            letter: LetterConfig {
                highlight_limit: 5,
                default_candidate_name: "Candidate".to_string(),
                simulated_price_usd: 5,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                max_displayed_keywords: 30,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the given path, or from the default location, creating a
    /// default config file on first use.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeFitError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else if path.is_some() {
            Err(ResumeFitError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
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
            ResumeFitError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Directory holding the config file and the persisted candidate name.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-fit")
    }
}
