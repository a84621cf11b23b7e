//! Resume edit suggestions driven by extracted job keywords

use crate::processing::sections::{CvSections, SectionKind};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned for one analysis.
pub const MAX_SUGGESTIONS: usize = 4;

/// Length of the summary excerpt shown as the "original" text.
pub const EXCERPT_LENGTH: usize = 150;

const SKILLS_EXCERPT_LENGTH: usize = 100;
const MIN_EXPERIENCE_LINE_LENGTH: usize = 20;
const EXPERIENCE_LINES_CHECKED: usize = 2;
const MIN_SUMMARY_LENGTH: usize = 100;
const MAX_MISSING_FOR_SUMMARY: usize = 3;

/// A single recommended edit to one resume excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display label, e.g. "Professional Summary" or "Work Experience - Entry 1"
    pub section: String,
    pub original: String,
    pub suggested: String,
    pub reason: String,
}

pub struct SuggestionGenerator {
    metrics_regex: Regex,
    line_metrics_regex: Regex,
    role_title_regex: Regex,
    responsibility_regex: Regex,
}

impl SuggestionGenerator {
    pub fn new() -> Self {
        let metrics_regex = Regex::new(
            r"(?i)[0-9]+%|\$[0-9]+|increased|improved|reduced|achieved|delivered|managed [0-9]+|led [0-9]+",
        )
        .expect("Invalid metrics regex");

        let line_metrics_regex = Regex::new(r"(?i)[0-9]+%|\$[0-9]+|increased|improved|reduced|achieved")
            .expect("Invalid line metrics regex");

        let role_title_regex = Regex::new(
            r"(?i)(?:seeking|looking for|hiring)\s+(?:a\s+)?([^.]+?)(?:\s+to|\s+who|\s+with|\.)",
        )
        .expect("Invalid role title regex");

        let responsibility_regex = Regex::new(r"(?i)(responsible for|worked on)")
            .expect("Invalid responsibility regex");

        Self {
            metrics_regex,
            line_metrics_regex,
            role_title_regex,
            responsibility_regex,
        }
    }

    /// Generate between one and four suggestions, in order: summary,
    /// experience entries, skills, and a generic fallback when nothing else
    /// applies.
    pub fn generate(&self, job_description: &str, cv_content: &str, keywords: &[String]) -> Vec<Suggestion> {
        let sections = CvSections::segment(cv_content);
        let has_metrics = self.metrics_regex.is_match(cv_content);
        let missing_keywords = missing_keywords(cv_content, keywords);

        let mut suggestions = Vec::new();

        if let Some(summary) = sections.non_empty(SectionKind::Summary) {
            if let Some(suggestion) =
                self.summary_suggestion(summary, job_description, keywords, has_metrics, missing_keywords.len())
            {
                suggestions.push(suggestion);
            }
        }

        if let Some(experience) = sections.non_empty(SectionKind::Experience) {
            suggestions.extend(self.experience_suggestions(experience, keywords));
        }

        if let Some(skills) = sections.non_empty(SectionKind::Skills) {
            if !missing_keywords.is_empty() {
                suggestions.push(skills_suggestion(skills, &missing_keywords));
            }
        }

        if suggestions.is_empty() {
            suggestions.push(fallback_suggestion(keywords));
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        debug!(
            "Generated {} suggestions ({} missing keywords, metrics present: {})",
            suggestions.len(),
            missing_keywords.len(),
            has_metrics
        );
        suggestions
    }

    fn summary_suggestion(
        &self,
        summary: &str,
        job_description: &str,
        keywords: &[String],
        has_metrics: bool,
        missing_count: usize,
    ) -> Option<Suggestion> {
        let mut issues = Vec::new();
        if !has_metrics {
            issues.push("lacks quantifiable achievements");
        }
        if missing_count > MAX_MISSING_FOR_SUMMARY {
            issues.push("missing key job requirements");
        }
        if summary.chars().count() < MIN_SUMMARY_LENGTH {
            issues.push("too brief");
        }

        if issues.is_empty() {
            return None;
        }
        debug!("Summary flagged: {}", issues.join(", "));

        Some(Suggestion {
            section: "Professional Summary".to_string(),
            original: excerpt(summary, EXCERPT_LENGTH),
            suggested: self.improved_summary(job_description, top(keywords, 4)),
            reason: format!(
                "Enhanced to include {} and added quantifiable achievements to better align with job requirements.",
                top(keywords, 3).join(", ")
            ),
        })
    }

    fn experience_suggestions(&self, experience: &str, keywords: &[String]) -> Vec<Suggestion> {
        experience
            .split('\n')
            .filter(|line| line.trim().chars().count() > MIN_EXPERIENCE_LINE_LENGTH)
            .take(EXPERIENCE_LINES_CHECKED)
            .enumerate()
            .filter(|(_, line)| !self.line_metrics_regex.is_match(line))
            .map(|(index, line)| {
                let line = line.trim();
                Suggestion {
                    section: format!("Work Experience - Entry {}", index + 1),
                    original: line.to_string(),
                    suggested: self.enhance_experience_line(line, keywords),
                    reason: format!(
                        "Added quantifiable metrics and incorporated job-relevant keywords ({}) to demonstrate impact.",
                        top(keywords, 2).join(", ")
                    ),
                }
            })
            .collect()
    }

    /// Rewrite the summary around the job's role title and top keywords.
    pub fn improved_summary(&self, job_description: &str, keywords: &[String]) -> String {
        let role_title = self
            .role_title_regex
            .captures(job_description)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| "professional".to_string());

        let secondary = keywords.get(3).map(String::as_str).unwrap_or("key technologies");

        format!(
            "Results-driven {} with proven expertise in {}, delivering measurable business impact through strategic initiatives. \
             Demonstrated track record of achieving 20%+ improvements in operational efficiency while leading cross-functional teams. \
             Combines technical proficiency in {} with strong analytical and communication skills to drive organizational success.",
            role_title,
            top(keywords, 3).join(", "),
            secondary
        )
    }

    /// Add a keyword and an impact claim to an experience bullet.
    pub fn enhance_experience_line(&self, line: &str, keywords: &[String]) -> String {
        let line_lower = line.to_lowercase();
        let keyword = keywords
            .iter()
            .find(|k| !line_lower.contains(&k.to_lowercase()))
            .or_else(|| keywords.first())
            .map(String::as_str)
            .unwrap_or("");

        // The presence check is case-sensitive while the rewrite is not.
        if line.contains("responsible for") || line.contains("worked on") {
            let rewritten = self.responsibility_regex.replace(line, "Successfully delivered");
            return format!(
                "{} utilizing {}, resulting in 15% efficiency improvement and enhanced team productivity.",
                rewritten, keyword
            );
        }

        format!(
            "{} Leveraged {} expertise to achieve 25% improvement in key performance metrics and streamline operational processes.",
            line, keyword
        )
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Append missing keywords and stock competencies to the skills block.
pub fn enhance_skills_section(skills: &str, missing_keywords: &[String]) -> String {
    format!(
        "{}\n\nAdditional Competencies: {} • Cross-functional collaboration • Process optimization • Data-driven decision making",
        skills,
        missing_keywords.join(" • ")
    )
}

/// Keywords not present (case-insensitive) anywhere in the resume.
pub fn missing_keywords(cv_content: &str, keywords: &[String]) -> Vec<String> {
    let cv_lower = cv_content.to_lowercase();
    keywords
        .iter()
        .filter(|k| !cv_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}

/// First `max_len` characters of `text`, with "..." appended when cut.
pub fn excerpt(text: &str, max_len: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_len).collect();

    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn skills_suggestion(skills: &str, missing_keywords: &[String]) -> Suggestion {
    let head: String = skills.chars().take(SKILLS_EXCERPT_LENGTH).collect();

    Suggestion {
        section: "Skills".to_string(),
        original: format!("{}...", head),
        suggested: enhance_skills_section(skills, top(missing_keywords, 4)),
        reason: format!(
            "Added missing technical skills and competencies mentioned in the job description: {}.",
            top(missing_keywords, 3).join(", ")
        ),
    }
}

fn fallback_suggestion(keywords: &[String]) -> Suggestion {
    Suggestion {
        section: "Overall Enhancement".to_string(),
        original: "Current CV content lacks job-specific optimization".to_string(),
        suggested: format!(
            "Incorporate these key requirements: {}. Add quantifiable achievements (e.g., \"Increased efficiency by 25%\", \"Managed team of 8 members\", \"Reduced costs by $50K annually\").",
            top(keywords, 4).join(", ")
        ),
        reason: "Your CV needs better alignment with job requirements and more specific, measurable accomplishments to stand out to recruiters.".to_string(),
    }
}

fn top(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}
