//! Resume tailor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeTailorError};
pub use processing::analyzer::{AnalysisEngine, AnalysisResult};
pub use processing::suggestions::Suggestion;

/// Extract keywords from a job description and suggest resume edits.
///
/// Builds a fresh [`AnalysisEngine`]; keep one around when analysing many
/// documents.
pub fn analyze(job_description: &str, cv_content: &str) -> AnalysisResult {
    AnalysisEngine::new().analyze(job_description, cv_content)
}

/// Compose a cover letter from the job description, resume, an optional
/// personal note and previously extracted keywords.
pub fn generate_cover_letter(
    job_description: &str,
    cv_content: &str,
    personal_touch: Option<&str>,
    keywords: &[String],
) -> String {
    AnalysisEngine::new().generate_cover_letter(job_description, cv_content, personal_touch, keywords)
}
