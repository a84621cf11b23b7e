//! Keyword extraction from job descriptions
//!
//! Keywords come from three fixed vocabularies (technical, soft, industry)
//! plus two derived tokens: a years-of-experience phrase and a degree word.

use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use regex::Regex;

/// Maximum number of keywords returned for one job description.
pub const MAX_KEYWORDS: usize = 8;

/// Technical skills and tools
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python", "javascript", "java", "react", "node.js", "sql", "aws", "docker", "kubernetes",
    "machine learning", "data analysis", "excel", "powerbi", "tableau", "salesforce",
    "project management", "agile", "scrum", "jira", "git", "api", "rest", "microservices",
];

/// Soft skills and competencies
pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "management", "team", "communication", "collaboration", "problem-solving",
    "analytical", "strategic", "innovation", "customer service", "sales", "marketing",
    "budget", "revenue", "growth", "efficiency", "quality", "compliance", "training",
];

/// Industry-specific terms
pub const INDUSTRY_TERMS: &[&str] = &[
    "healthcare", "finance", "fintech", "e-commerce", "retail", "manufacturing",
    "consulting", "education", "non-profit", "startup", "enterprise",
];

/// Extracts an ordered, de-duplicated keyword list from job description text.
pub struct KeywordExtractor {
    vocabulary: Vec<&'static str>,
    vocabulary_matcher: AhoCorasick,
    experience_regex: Regex,
    degree_regex: Regex,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        let vocabulary: Vec<&'static str> = TECHNICAL_SKILLS
            .iter()
            .chain(SOFT_SKILLS)
            .chain(INDUSTRY_TERMS)
            .copied()
            .collect();

        // Standard match kind is required for overlapping search, which is what
        // lets "java" and "javascript" both register on the same text.
        // Patterns are lowercase and are run against lowercased text.
        let vocabulary_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&vocabulary)
            .expect("Invalid vocabulary automaton");

        let experience_regex = Regex::new(r"(?i)([0-9]+)[+\-\s]*years?\s+(?:of\s+)?experience")
            .expect("Invalid experience regex");

        let degree_regex = Regex::new(r"(?i)(bachelor|master|phd|degree)")
            .expect("Invalid degree regex");

        Self {
            vocabulary,
            vocabulary_matcher,
            experience_regex,
            degree_regex,
        }
    }

    /// Extract keywords in discovery order: vocabulary hits first (technical,
    /// soft, industry), then the experience phrase, then the degree word.
    pub fn extract(&self, job_description: &str) -> Vec<String> {
        let text = job_description.to_lowercase();

        let mut found = vec![false; self.vocabulary.len()];
        for mat in self.vocabulary_matcher.find_overlapping_iter(&text) {
            found[mat.pattern().as_usize()] = true;
        }

        let mut keywords: Vec<String> = self
            .vocabulary
            .iter()
            .zip(&found)
            .filter(|(_, hit)| **hit)
            .map(|(term, _)| term.to_string())
            .collect();

        if let Some(years) = self.experience_regex.captures(&text).and_then(|c| c.get(1)) {
            push_unique(&mut keywords, format!("{}+ years experience", years.as_str()));
        }

        if let Some(degree) = self.degree_regex.captures(&text).and_then(|c| c.get(1)) {
            push_unique(&mut keywords, degree.as_str().to_lowercase());
        }

        keywords.truncate(MAX_KEYWORDS);
        debug!("Extracted {} keywords: {:?}", keywords.len(), keywords);
        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(keywords: &mut Vec<String>, keyword: String) {
    if !keywords.contains(&keyword) {
        keywords.push(keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_then_derived_order() {
        let extractor = KeywordExtractor::new();
        let job = "We need 5+ years experience and a Bachelor's degree, proficiency in Python and SQL";

        let keywords = extractor.extract(job);

        assert_eq!(keywords, vec!["python", "sql", "5+ years experience", "bachelor"]);
    }

    #[test]
    fn test_unicode_case_folding_matches_vocabulary() {
        let extractor = KeywordExtractor::new();

        // KELVIN SIGN lowercases to an ASCII 'k'
        assert_eq!(extractor.extract("\u{212A}UBERNETES required"), vec!["kubernetes"]);
        assert_eq!(extractor.extract("PYTHON and Docker"), vec!["python", "docker"]);
    }

    #[test]
    fn test_overlapping_terms_are_all_found() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Strong JavaScript skills");

        assert_eq!(keywords, vec!["javascript", "java"]);
    }

    #[test]
    fn test_vocabulary_order_not_text_order() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Healthcare startup needs leadership and Docker");

        assert_eq!(keywords, vec!["docker", "leadership", "healthcare", "startup"]);
    }

    #[test]
    fn test_years_of_experience_variants() {
        let extractor = KeywordExtractor::new();

        assert!(extractor.extract("2+ years of experience").contains(&"2+ years experience".to_string()));
        // A range resolves to its upper bound because the lower bound is not followed by "years".
        assert!(extractor.extract("3-5 years of experience").contains(&"5+ years experience".to_string()));
        assert!(extractor.extract("10 Years Experience required").contains(&"10+ years experience".to_string()));
        assert!(extractor.extract("1 year experience").contains(&"1+ years experience".to_string()));
    }

    #[test]
    fn test_degree_is_lowercased_first_match() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("PhD or Master preferred");

        assert_eq!(keywords, vec!["phd"]);
    }

    #[test]
    fn test_capped_at_eight() {
        let extractor = KeywordExtractor::new();
        let job = "python javascript react sql aws docker kubernetes excel tableau jira git \
                   leadership team 7 years experience master";

        let keywords = extractor.extract(job);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "python");
        assert!(!keywords.contains(&"7+ years experience".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("nothing relevant here").is_empty());
    }
}
