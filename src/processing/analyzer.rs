//! Analysis engine: keywords first, then suggestions and the cover letter

use crate::processing::cover_letter::CoverLetterGenerator;
use crate::processing::keywords::KeywordExtractor;
use crate::processing::sections::CvSections;
use crate::processing::suggestions::{Suggestion, SuggestionGenerator};
use log::debug;
use serde::{Deserialize, Serialize};

/// Output of a resume / job description analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub suggestions: Vec<Suggestion>,
    pub keywords: Vec<String>,
}

/// Holds the compiled matchers for every pipeline stage. Holds no
/// per-call state, so one engine can serve any number of analyses.
pub struct AnalysisEngine {
    keyword_extractor: KeywordExtractor,
    suggestion_generator: SuggestionGenerator,
    cover_letter_generator: CoverLetterGenerator,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
            suggestion_generator: SuggestionGenerator::new(),
            cover_letter_generator: CoverLetterGenerator::new(),
        }
    }

    /// Extract keywords from the job description and derive resume suggestions.
    pub fn analyze(&self, job_description: &str, cv_content: &str) -> AnalysisResult {
        let keywords = self.keyword_extractor.extract(job_description);
        let suggestions = self
            .suggestion_generator
            .generate(job_description, cv_content, &keywords);

        debug!(
            "Analysis produced {} keywords and {} suggestions",
            keywords.len(),
            suggestions.len()
        );

        AnalysisResult { suggestions, keywords }
    }

    pub fn generate_cover_letter(
        &self,
        job_description: &str,
        cv_content: &str,
        personal_touch: Option<&str>,
        keywords: &[String],
    ) -> String {
        self.cover_letter_generator
            .generate(job_description, cv_content, personal_touch, keywords)
    }

    pub fn extract_keywords(&self, job_description: &str) -> Vec<String> {
        self.keyword_extractor.extract(job_description)
    }

    pub fn segment(&self, cv_content: &str) -> CvSections {
        CvSections::segment(cv_content)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
