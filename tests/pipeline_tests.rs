//! End-to-end tests for analysis and cover letter generation

use resume_tailor::input::InputManager;
use resume_tailor::{analyze, generate_cover_letter, AnalysisEngine};
use std::collections::HashSet;
use std::path::Path;

const BUSY_JOB: &str = "Stack: Python, JavaScript, React, SQL, AWS, Docker, Kubernetes and Git. \
                        Leadership and communication matter. 10 years of experience and a Master's degree.";

#[test]
fn test_keywords_are_capped_and_unique() {
    let result = analyze(BUSY_JOB, "Summary\nEngineer.");

    assert_eq!(result.keywords.len(), 8);
    let unique: HashSet<&String> = result.keywords.iter().collect();
    assert_eq!(unique.len(), result.keywords.len());
    assert_eq!(result.keywords[0], "python");
}

#[test]
fn test_suggestion_count_is_bounded() {
    let cvs = [
        "",
        "No headings at all",
        "Summary\nShort\nExperience\nResponsible for billing and invoicing systems\nWorked on the internal developer portal\nSkills\nCobol",
        "Experience\nIncreased revenue 30% across three regions\nSkills\nPython, SQL, AWS",
    ];

    for cv in cvs {
        let result = analyze(BUSY_JOB, cv);
        assert!(
            (1..=4).contains(&result.suggestions.len()),
            "{} suggestions for {:?}",
            result.suggestions.len(),
            cv
        );
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let cv = "Summary\nData person.\nSkills\nExcel";
    assert_eq!(analyze(BUSY_JOB, cv), analyze(BUSY_JOB, cv));

    let keywords = analyze(BUSY_JOB, cv).keywords;
    assert_eq!(
        generate_cover_letter(BUSY_JOB, cv, Some("I mentor at a local bootcamp."), &keywords),
        generate_cover_letter(BUSY_JOB, cv, Some("I mentor at a local bootcamp."), &keywords)
    );
}

#[test]
fn test_company_name_in_letter() {
    let letter = generate_cover_letter("Open role at Acme Technologies.", "Some resume", None, &[]);
    assert!(letter.contains("the [Position Title] position at Acme Technologies."));
    assert!(letter.ends_with("Best regards,\n[Your Name]"));

    let letter = generate_cover_letter("Remote friendly team", "Some resume", None, &[]);
    assert!(letter.contains("position at [Company Name]."));
}

#[test]
fn test_headingless_resume_gets_fallback() {
    let result = analyze("We need python", "Just a paragraph about my career so far");

    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].section, "Overall Enhancement");
}

#[test]
fn test_long_summary_excerpt_is_truncated() {
    let cv = format!("Summary\n{}", "a".repeat(200));
    let result = analyze("We need python", &cv);

    let summary = &result.suggestions[0];
    assert_eq!(summary.section, "Professional Summary");
    assert_eq!(summary.original, format!("{}...", "a".repeat(150)));
}

#[tokio::test]
async fn test_fixture_documents_end_to_end() {
    let mut manager = InputManager::new();
    let cv = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let result = engine.analyze(&job, &cv);

    assert_eq!(
        result.keywords,
        vec![
            "javascript",
            "java",
            "node.js",
            "aws",
            "docker",
            "leadership",
            "communication",
            "5+ years experience"
        ]
    );

    let labels: Vec<&str> = result.suggestions.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Professional Summary", "Work Experience - Entry 1", "Skills"]
    );

    let letter = engine.generate_cover_letter(&job, &cv, None, &result.keywords);
    assert!(letter.contains("the Senior Software Engineer position at Acme Technologies."));
    assert!(letter.contains("• 5+ years of experience with JavaScript and Node: "));
    assert!(letter.contains("• Bachelor's degree or equivalent experience: Proficient in javascript and java"));
}

#[tokio::test]
async fn test_markdown_resume_segments_like_text() {
    let mut manager = InputManager::new();
    let text_cv = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let markdown_cv = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let engine = AnalysisEngine::new();
    let text_kinds: Vec<_> = engine.segment(&text_cv).kinds().collect();
    let markdown_kinds: Vec<_> = engine.segment(&markdown_cv).kinds().collect();
    assert_eq!(text_kinds, markdown_kinds);
    assert_eq!(text_kinds.len(), 4);
}
