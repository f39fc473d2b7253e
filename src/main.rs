//! Resume fit analyzer: keyword match scoring and cover letter drafting

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod payment;
mod profile;
mod session;

use analysis::{CoverLetterComposer, KeywordExtractor, MatchAnalyzer, StopwordList};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeFitError};
use input::InputManager;
use log::{error, info};
use output::FitReport;
use payment::{AutoGate, InteractiveGate, PaymentGate};
use profile::FileNameStore;
use session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeFitError::InvalidInput)?;

            info!("Starting resume fit analysis");

            let mut session = Session::new();
            let mut input_manager = InputManager::new();

            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            session.inputs_ready()?;

            let report = analyze_fit(&config, &resume_text, &job_text, &resume, &job);
            session.analyzed()?;

            let rendered = output::render_report(
                &report,
                output_format,
                config.output.color_output,
                detailed,
                config.output.max_displayed_keywords,
            )?;
            println!("{}", rendered);

            if let Some(path) = save {
                output::export_text(&path, &rendered)?;
                println!("💾 Report saved to {}", path.display());
            }

            Ok(())
        }

        Commands::Letter {
            resume,
            job,
            name,
            yes,
            save,
        } => {
            info!("Starting cover letter flow");

            let mut session = Session::new();
            let mut input_manager = InputManager::new();

            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            session.inputs_ready()?;

            let report = analyze_fit(&config, &resume_text, &job_text, &resume, &job);
            session.analyzed()?;
            println!("🎯 Match score: {}%", report.result.score);

            session.request_cover_letter()?;

            let mut gate: Box<dyn PaymentGate> = if yes {
                Box::new(AutoGate::approving())
            } else {
                Box::new(InteractiveGate::new(config.letter.simulated_price_usd))
            };

            if !gate.confirm() {
                println!("Payment declined; no letter generated.");
                return Ok(());
            }
            session.payment_confirmed()?;

            let mut name_store = FileNameStore::new(FileNameStore::default_path());
            let candidate_name = profile::resolve_candidate_name(
                &mut name_store,
                name.as_deref(),
                prompt_candidate_name,
                &config.letter.default_candidate_name,
            )?;

            let composer = CoverLetterComposer::new(config.letter.highlight_limit);
            let letter = composer.compose(&job_text, &candidate_name, &report.result.matching);
            session.letter_generated()?;

            println!("\n💌 Cover Letter\n");
            println!("{}", letter);

            if let Some(path) = save {
                output::export_text(&path, &letter)?;
                println!("\n💾 Letter saved to {}", path.display());
            }

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeFitError::Configuration(format!("Failed to render config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("Configuration reset to defaults.");
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
            }
            Ok(())
        }
    }
}

/// Run extraction and matching over both documents and wrap the result.
fn analyze_fit(
    config: &Config,
    resume_text: &str,
    job_text: &str,
    resume_path: &PathBuf,
    job_path: &PathBuf,
) -> FitReport {
    let stopwords = StopwordList::with_extra(&config.extraction.extra_stopwords);
    let extractor = KeywordExtractor::new(stopwords, config.extraction.min_token_len);

    let resume_keywords = extractor.extract(resume_text);
    let job_keywords = extractor.extract(job_text);
    info!(
        "Extracted {} resume keywords, {} job keywords",
        resume_keywords.len(),
        job_keywords.len()
    );

    let result = MatchAnalyzer::new().analyze(&resume_keywords, &job_keywords);

    FitReport::new(
        result,
        resume_path.to_string_lossy().to_string(),
        job_path.to_string_lossy().to_string(),
        resume_keywords.len(),
    )
}

/// Prompt collaborator for the candidate name, used when none is stored.
fn prompt_candidate_name() -> Option<String> {
    print!("Enter your name for the cover letter: ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let name = line.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
