//! Report structures combining suggestions, keywords and the cover letter

use crate::processing::analyzer::AnalysisResult;
use crate::processing::sections::SectionKind;
use crate::processing::suggestions::Suggestion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one run of the tool produces for a resume / job pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationReport {
    /// Keywords extracted from the job description, in discovery order
    pub keywords: Vec<String>,

    pub suggestions: Vec<Suggestion>,

    pub cover_letter: String,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub resume_file: String,
    pub job_file: String,
    /// Resume sections recognised by heading
    pub sections_detected: Vec<SectionKind>,
}

impl ApplicationReport {
    pub fn new(
        analysis: AnalysisResult,
        cover_letter: String,
        resume_file: &str,
        job_file: &str,
        sections_detected: Vec<SectionKind>,
    ) -> Self {
        Self {
            keywords: analysis.keywords,
            suggestions: analysis.suggestions,
            cover_letter,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                job_file: job_file.to_string(),
                sections_detected,
            },
        }
    }

    pub fn missing_sections(&self) -> Vec<SectionKind> {
        [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Skills,
            SectionKind::Education,
        ]
        .into_iter()
        .filter(|kind| !self.metadata.sections_detected.contains(kind))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_analysis() {
        let analysis = AnalysisResult {
            suggestions: Vec::new(),
            keywords: vec!["python".to_string()],
        };
        let report = ApplicationReport::new(
            analysis,
            "Dear Hiring Manager,".to_string(),
            "cv.txt",
            "job.txt",
            vec![SectionKind::Skills, SectionKind::Experience],
        );

        assert_eq!(report.keywords, vec!["python"]);
        assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            report.missing_sections(),
            vec![SectionKind::Summary, SectionKind::Education]
        );
    }
}
