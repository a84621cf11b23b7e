//! Templated cover letter generation

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY_NAME: &str = "[Company Name]";
pub const DEFAULT_ROLE_NAME: &str = "[Position Title]";
pub const SIGNATURE_PLACEHOLDER: &str = "[Your Name]";

const ROLE_SEARCH_LINES: usize = 3;
const MAX_REQUIREMENTS: usize = 3;
const MAX_STRENGTHS: usize = 3;

const REQUIREMENT_SKILLS: &[&str] = &["python", "javascript", "sql", "aws", "react", "project management"];
const STRENGTH_TECH_TERMS: &[&str] = &["python", "javascript", "sql", "aws", "react", "data", "analysis"];

const DEFAULT_REQUIREMENTS: &[&str] = &[
    "Relevant industry experience",
    "Strong analytical skills",
    "Team collaboration",
];
const DEFAULT_STRENGTHS: &[&str] = &[
    "professional experience",
    "analytical problem-solving",
    "cross-functional collaboration",
];

/// Signals pulled out of the job description and resume that feed the letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterContext {
    pub company_name: String,
    pub role_name: String,
    pub key_requirements: Vec<String>,
    pub candidate_strengths: Vec<String>,
}

pub struct CoverLetterGenerator {
    company_patterns: Vec<Regex>,
    role_patterns: Vec<Regex>,
    experience_requirement_regex: Regex,
}

impl CoverLetterGenerator {
    pub fn new() -> Self {
        let company_patterns = [
            r"(?i)(?:at|join|with)\s+([A-Z][a-zA-Z\s&]+(?:Inc|LLC|Corp|Company|Ltd|Technologies|Solutions|Group|Systems)?)",
            r"(?i)([A-Z][a-zA-Z\s&]+(?:Inc|LLC|Corp|Company|Ltd|Technologies|Solutions|Group|Systems))",
            r"(?i)Company:\s*([A-Z][a-zA-Z\s&]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid company name regex"))
        .collect();

        let role_patterns = [
            r"(?i)(?:position|role|job):\s*([^.\n]+)",
            r"(?i)(?:seeking|hiring|looking for)\s+(?:a\s+)?([^.\n]+?)(?:\s+to|\s+who|\s+with)",
            r"(?i)([A-Za-z\s]+(?:Manager|Director|Analyst|Developer|Engineer|Specialist|Coordinator|Lead|Senior|Junior))",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid role name regex"))
        .collect();

        let experience_requirement_regex =
            Regex::new(r"(?i)([0-9]+[+\-\s]*years?[^.\n]*experience[^.\n]*)")
                .expect("Invalid experience requirement regex");

        Self {
            company_patterns,
            role_patterns,
            experience_requirement_regex,
        }
    }

    /// Compose the three-part letter: opening, bulleted body, closing.
    pub fn generate(
        &self,
        job_description: &str,
        cv_content: &str,
        personal_touch: Option<&str>,
        keywords: &[String],
    ) -> String {
        let context = self.build_context(job_description, cv_content, keywords);
        debug!(
            "Cover letter context: company='{}', role='{}', {} requirements, {} strengths",
            context.company_name,
            context.role_name,
            context.key_requirements.len(),
            context.candidate_strengths.len()
        );

        let company = context.company_name.as_str();
        let strengths = &context.candidate_strengths;
        let requirements = &context.key_requirements;
        let first_strength = strengths.first().map(String::as_str).unwrap_or("");
        let first_keyword = keywords.first().map(String::as_str).unwrap_or("");

        let opening = format!(
            "Dear Hiring Manager,\n\n\
             I am writing to express my strong interest in the {} position at {}. \
             With my proven background in {}, I am excited to contribute to your team's continued success.",
            context.role_name,
            company,
            strengths[..strengths.len().min(2)].join(" and ")
        );

        let personal_line = match personal_touch.filter(|note| !note.is_empty()) {
            Some(note) => format!(
                "{} This connection deepens my enthusiasm for this opportunity and {}'s mission.",
                note, company
            ),
            None => format!(
                "I am particularly drawn to {}'s innovative approach and commitment to excellence in the industry.",
                company
            ),
        };

        let body = format!(
            "My experience directly aligns with your key requirements:\n\n\
             • {}: {} with demonstrated results including 25%+ efficiency improvements\n\
             • {}: Proficient in {}, delivering scalable solutions\n\
             • {}: Successfully managed cross-functional teams and complex projects from conception to completion\n\n\
             {}",
            requirements.first().map(String::as_str).unwrap_or(""),
            first_strength,
            requirements.get(1).map(String::as_str).unwrap_or("Technical expertise"),
            keywords[..keywords.len().min(2)].join(" and "),
            requirements.get(2).map(String::as_str).unwrap_or("Leadership"),
            personal_line
        );

        let closing = format!(
            "I would welcome the opportunity to discuss how my expertise in {} and proven track record of {} \
             can contribute to {}'s objectives. Thank you for your consideration.\n\n\
             Best regards,\n{}",
            first_keyword, first_strength, company, SIGNATURE_PLACEHOLDER
        );

        format!("{}\n\n{}\n\n{}", opening, body, closing)
    }

    pub fn build_context(&self, job_description: &str, cv_content: &str, keywords: &[String]) -> LetterContext {
        LetterContext {
            company_name: self.extract_company_name(job_description),
            role_name: self.extract_role_name(job_description),
            key_requirements: self.extract_key_requirements(job_description),
            candidate_strengths: extract_candidate_strengths(cv_content, keywords),
        }
    }

    pub fn extract_company_name(&self, job_description: &str) -> String {
        first_capture(&self.company_patterns, job_description)
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string())
    }

    /// Only the first three lines are searched; titles usually sit at the top.
    pub fn extract_role_name(&self, job_description: &str) -> String {
        let first_lines = job_description
            .split('\n')
            .take(ROLE_SEARCH_LINES)
            .collect::<Vec<_>>()
            .join(" ");

        first_capture(&self.role_patterns, &first_lines).unwrap_or_else(|| DEFAULT_ROLE_NAME.to_string())
    }

    pub fn extract_key_requirements(&self, job_description: &str) -> Vec<String> {
        let job_lower = job_description.to_lowercase();
        let mut requirements = Vec::new();

        if let Some(experience) = self
            .experience_requirement_regex
            .captures(job_description)
            .and_then(|c| c.get(1))
        {
            requirements.push(experience.as_str().to_string());
        }

        if job_lower.contains("bachelor") || job_lower.contains("degree") {
            requirements.push("Bachelor's degree or equivalent experience".to_string());
        }

        if let Some(skill) = REQUIREMENT_SKILLS.iter().find(|skill| job_lower.contains(*skill)) {
            requirements.push(format!("{} proficiency", skill));
        }

        if requirements.is_empty() {
            requirements.extend(DEFAULT_REQUIREMENTS.iter().map(|r| r.to_string()));
        }

        requirements.truncate(MAX_REQUIREMENTS);
        requirements
    }
}

impl Default for CoverLetterGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn extract_candidate_strengths(cv_content: &str, keywords: &[String]) -> Vec<String> {
    let cv_lower = cv_content.to_lowercase();
    let mut strengths = Vec::new();

    if ["manage", "lead", "supervise"].iter().any(|term| cv_lower.contains(term)) {
        strengths.push("team leadership and management".to_string());
    }

    let technical = keywords.iter().find(|keyword| {
        let keyword_lower = keyword.to_lowercase();
        STRENGTH_TECH_TERMS.iter().any(|tech| keyword_lower.contains(tech))
    });
    if let Some(keyword) = technical {
        strengths.push(format!("technical expertise in {}", keyword));
    }

    if cv_lower.contains("project") || cv_lower.contains("initiative") {
        strengths.push("project management and execution".to_string());
    }

    if strengths.is_empty() {
        strengths.extend(DEFAULT_STRENGTHS.iter().map(|s| s.to_string()));
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

/// Try each pattern in order and return the first trimmed capture group.
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
