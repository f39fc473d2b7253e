//! CLI interface for the resume fit analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-fit")]
#[command(about = "Resume and job description fit analyzer")]
#[command(
    long_about = "Compare a resume against a job description with keyword matching, then optionally draft a cover letter from the strongest matches"
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
    /// Analyze how well a resume matches a job description
    Analyze {
        /// Path to resume file (read as plain text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file
        #[arg(short, long)]
        job: PathBuf,

        /// Show keyword counts and file details
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Draft a cover letter from the analysis (simulated payment gate)
    Letter {
        /// Path to resume file (read as plain text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file
        #[arg(short, long)]
        job: PathBuf,

        /// Candidate name for the signature (overrides the stored name)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip the interactive payment confirmation
        #[arg(short, long)]
        yes: bool,

        /// Save the letter to a plain-text file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
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

    /// Print the configuration file path
    Path,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "resume-fit", "analyze", "--resume", "r.txt", "--job", "j.txt", "--detailed",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze { detailed, .. } => assert!(detailed),
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_cli_parses_letter_with_yes() {
        let cli = Cli::try_parse_from([
            "resume-fit", "letter", "--resume", "r.txt", "--job", "j.txt", "--yes",
        ])
        .unwrap();
        match cli.command {
            Commands::Letter { yes, name, .. } => {
                assert!(yes);
                assert!(name.is_none());
            }
            _ => panic!("expected letter command"),
        }
    }
}
