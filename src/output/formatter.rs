//! Output formatters for console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ApplicationReport;
use anyhow::Context;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting application reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ApplicationReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "═══",
            2 => "──",
            _ => "•",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ApplicationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📝 RESUME TAILORING REPORT", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("🔑 Job Keywords", 2));
        if report.keywords.is_empty() {
            output.push_str(&self.colorize("No keywords detected\n", Color::BrightBlack));
        } else {
            output.push_str(&format!("{}\n", self.colorize(&report.keywords.join(", "), Color::Cyan)));
        }

        output.push_str(&self.format_header("✏️  Suggested Edits", 2));
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, self.colorize(&suggestion.section, Color::White)));
            output.push_str(&format!(
                "   {} {}\n",
                self.colorize("Original:", Color::BrightBlack),
                suggestion.original
            ));
            output.push_str(&format!(
                "   {} {}\n",
                self.colorize("Suggested:", Color::Green),
                suggestion.suggested
            ));
            output.push_str(&format!("   {} {}\n\n", self.colorize("Why:", Color::Yellow), suggestion.reason));
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Resume Sections", 2));
            let detected: Vec<String> = report.metadata.sections_detected.iter().map(|s| s.to_string()).collect();
            output.push_str(&format!(
                "Detected: {}\n",
                if detected.is_empty() { "none".to_string() } else { detected.join(", ") }
            ));
            let missing = report.missing_sections();
            if !missing.is_empty() {
                let missing: Vec<String> = missing.iter().map(|s| s.to_string()).collect();
                output.push_str(&format!("Missing: {}\n", self.colorize(&missing.join(", "), Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("💌 Cover Letter", 2));
        output.push_str(&report.cover_letter);
        output.push('\n');

        output.push_str(&format!(
            "\n{} Generated by Resume Tailor v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ApplicationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ApplicationReport) -> Result<String> {
        let mut content = String::new();

        content.push_str("# Resume Tailoring Report\n\n");

        content.push_str("## Job Keywords\n\n");
        if report.keywords.is_empty() {
            content.push_str("_No keywords detected._\n\n");
        } else {
            for keyword in &report.keywords {
                content.push_str(&format!("- `{}`\n", keyword));
            }
            content.push('\n');
        }

        content.push_str("## Suggested Edits\n\n");
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            content.push_str(&format!("### {}. {}\n\n", i + 1, suggestion.section));
            content.push_str(&format!("**Original:** {}\n\n", suggestion.original));
            content.push_str(&format!("**Suggested:** {}\n\n", suggestion.suggested));
            content.push_str(&format!("**Why:** {}\n\n", suggestion.reason));
        }

        content.push_str("## Cover Letter\n\n");
        content.push_str(&report.cover_letter);
        content.push_str("\n\n");

        if self.include_metadata {
            content.push_str("---\n\n");
            content.push_str(&format!(
                "*Generated by Resume Tailor v{} on {}*\n\n",
                report.metadata.tool_version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
            ));
            content.push_str(&format!(
                "*Resume: {} | Job: {}*\n",
                report.metadata.resume_file, report.metadata.job_file
            ));
        }

        Ok(content)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ApplicationReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn write_text(content: &str, file_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(file_path, content).with_context(|| format!("Failed to write {}", file_path.display()))?;
    Ok(())
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    Ok(write_text(content, file_path)?)
}

/// Write the cover letter as plain text.
pub fn save_letter(letter: &str, file_path: &Path) -> Result<()> {
    Ok(write_text(letter, file_path)?)
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_tailored{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_tailored{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_tailored{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisResult;
    use crate::processing::sections::SectionKind;
    use crate::processing::suggestions::Suggestion;
    use tempfile::TempDir;

    fn sample_report() -> ApplicationReport {
        let analysis = AnalysisResult {
            keywords: vec!["python".to_string(), "sql".to_string()],
            suggestions: vec![Suggestion {
                section: "Skills".to_string(),
                original: "Excel...".to_string(),
                suggested: "Excel\n\nAdditional Competencies: python".to_string(),
                reason: "Added missing keywords.".to_string(),
            }],
        };
        ApplicationReport::new(
            analysis,
            "Dear Hiring Manager,\n\nSincerely,\n[Your Name]".to_string(),
            "cv.txt",
            "job.txt",
            vec![SectionKind::Skills],
        )
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(output.contains("python, sql"));
        assert!(output.contains("1. Skills"));
        assert!(output.contains("Why: Added missing keywords."));
        assert!(output.contains("Detected: Skills"));
        assert!(output.contains("Missing: Summary, Experience, Education"));
        assert!(output.contains("Sincerely,\n[Your Name]"));
    }

    #[test]
    fn test_json_parses_back() {
        let json = JsonFormatter::new(true).format_report(&sample_report()).unwrap();
        let parsed: ApplicationReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.keywords, vec!["python", "sql"]);
        assert_eq!(parsed.suggestions[0].section, "Skills");
        assert_eq!(parsed.metadata.sections_detected, vec![SectionKind::Skills]);
        assert!(json.contains("\"skills\""));
    }

    #[test]
    fn test_markdown_layout() {
        let markdown = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();

        assert!(markdown.starts_with("# Resume Tailoring Report"));
        assert!(markdown.contains("- `python`"));
        assert!(markdown.contains("### 1. Skills"));
        assert!(markdown.contains("## Cover Letter\n\nDear Hiring Manager,"));
        assert!(markdown.contains("*Resume: cv.txt | Job: job.txt*"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, false, false);
        let json = generator.generate_report(&sample_report(), OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_save_letter_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("letter.txt");

        save_letter("Dear Hiring Manager,", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dear Hiring Manager,");
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "docs/jane_cv.pdf", false),
            "jane_cv_tailored.md"
        );
    }
}
