//! Resume tailor: keyword-driven resume suggestions and cover letters

use clap::Parser;
use log::{error, info};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::config::Config;
use resume_tailor::error::{Result, ResumeTailorError};
use resume_tailor::input::file_detector::FileType;
use resume_tailor::input::InputManager;
use resume_tailor::output::formatter::suggest_filename;
use resume_tailor::output::{save_letter, save_report_to_file, ApplicationReport, ReportGenerator};
use resume_tailor::processing::analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_file: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            note,
            output,
            save,
            letter,
            detailed,
        } => {
            info!("Starting resume tailoring analysis");

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeTailorError::InvalidInput)?,
                None => config.output.format,
            };

            let (cv_text, job_text) = read_documents(&config, &resume, &job).await?;

            let engine = AnalysisEngine::new();
            let analysis = engine.analyze(&job_text, &cv_text);
            let cover_letter = engine.generate_cover_letter(&job_text, &cv_text, note.as_deref(), &analysis.keywords);
            let sections = engine.segment(&cv_text).kinds().collect();

            let report = ApplicationReport::new(
                analysis,
                cover_letter,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
                sections,
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(output_format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            if let Some(path) = letter {
                let path = letter_path(path, &config);
                save_letter(&report.cover_letter, &path)?;
                println!("💌 Cover letter saved to {}", path.display());
            }
        }

        Commands::Letter { resume, job, note, save } => {
            info!("Drafting cover letter");

            let (cv_text, job_text) = read_documents(&config, &resume, &job).await?;

            let engine = AnalysisEngine::new();
            let keywords = engine.extract_keywords(&job_text);
            let cover_letter = engine.generate_cover_letter(&job_text, &cv_text, note.as_deref(), &keywords);

            match save {
                Some(path) => {
                    let path = letter_path(path, &config);
                    save_letter(&cover_letter, &path)?;
                    println!("💌 Cover letter saved to {}", path.display());
                }
                None => println!("{}", cover_letter),
            }
        }

        Commands::Keywords { job } => {
            validate_input_file(&job, "Job description")?;

            let mut input_manager = input_manager(&config);
            let job_text = input_manager.extract_text(&job).await?;
            if job_text.trim().is_empty() {
                return Err(ResumeTailorError::InvalidInput(
                    "Job description is empty".to_string(),
                ));
            }

            let keywords = AnalysisEngine::new().extract_keywords(&job_text);
            if keywords.is_empty() {
                println!("No keywords detected in {}", job.display());
            } else {
                println!("🔑 Keywords found in {}:", job.display());
                for (i, keyword) in keywords.iter().enumerate() {
                    println!("  {}. {}", i + 1, keyword);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_file.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("Max File Size: {} KB", config.input.max_file_size_kb);
                    println!("Caching: {}", config.input.enable_caching);
                    println!("Output Format: {:?}", config.output.format);
                    println!("Detailed Output: {}", config.output.detailed);
                    println!("Color Output: {}", config.output.color_output);
                    println!("Cover Letter File: {}", config.output.letter_file);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn input_manager(config: &Config) -> InputManager {
    InputManager::new()
        .with_cache(config.input.enable_caching)
        .with_max_file_size_kb(config.input.max_file_size_kb)
}

fn validate_input_file(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, FileType::supported_extensions())
        .map_err(|e| ResumeTailorError::InvalidInput(format!("{} file: {}", label, e)))
}

/// Read both documents, rejecting blank input before any analysis runs.
async fn read_documents(config: &Config, resume: &Path, job: &Path) -> Result<(String, String)> {
    validate_input_file(resume, "Resume")?;
    validate_input_file(job, "Job description")?;

    let mut input_manager = input_manager(config);
    let cv_text = input_manager.extract_text(resume).await?;
    let job_text = input_manager.extract_text(job).await?;

    if job_text.trim().is_empty() || cv_text.trim().is_empty() {
        return Err(ResumeTailorError::InvalidInput(
            "Both the job description and the resume must contain text".to_string(),
        ));
    }

    info!(
        "Read resume ({} characters) and job description ({} characters)",
        cv_text.chars().count(),
        job_text.chars().count()
    );
    Ok((cv_text, job_text))
}

fn letter_path(path: PathBuf, config: &Config) -> PathBuf {
    if path.is_dir() {
        path.join(&config.output.letter_file)
    } else {
        path
    }
}
