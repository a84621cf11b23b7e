//! Heading-based resume section segmentation

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Skills,
    Education,
}

/// Heading markers in precedence order. A line mentioning markers from more
/// than one group is assigned to the first group listed here.
const HEADING_MARKERS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Summary, &["summary", "profile", "objective"]),
    (SectionKind::Experience, &["experience", "employment", "work history"]),
    (SectionKind::Skills, &["skill", "competenc", "technical"]),
    (SectionKind::Education, &["education", "qualification"]),
];

impl SectionKind {
    /// Classify a single line as a section heading.
    pub fn classify_heading(line: &str) -> Option<Self> {
        let normalized = line.trim().to_lowercase();

        HEADING_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|marker| normalized.contains(marker)))
            .map(|(kind, _)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Summary => write!(f, "Summary"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Skills => write!(f, "Skills"),
            SectionKind::Education => write!(f, "Education"),
        }
    }
}

/// Resume text split into named blocks. Only detected sections are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvSections {
    blocks: BTreeMap<SectionKind, String>,
}

impl CvSections {
    /// Walk the resume line by line. Heading lines switch the active section
    /// and are not stored; every other line is appended to the active block.
    /// Text before the first heading belongs to no section.
    pub fn segment(cv_content: &str) -> Self {
        let mut blocks = BTreeMap::new();
        let mut current: Option<SectionKind> = None;
        let mut buffer = String::new();

        for line in cv_content.split('\n') {
            match SectionKind::classify_heading(line) {
                Some(kind) => {
                    if let Some(previous) = current {
                        blocks.insert(previous, std::mem::take(&mut buffer));
                    }
                    buffer.clear();
                    current = Some(kind);
                }
                None => {
                    buffer.push_str(line);
                    buffer.push('\n');
                }
            }
        }

        if let Some(last) = current {
            blocks.insert(last, buffer);
        }

        debug!(
            "Detected resume sections: {:?}",
            blocks.keys().map(|k| k.as_str()).collect::<Vec<_>>()
        );

        Self { blocks }
    }

    /// Block text for a section, including empty blocks.
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.blocks.get(&kind).map(String::as_str)
    }

    /// Block text for a section, treating an empty block as absent.
    pub fn non_empty(&self, kind: SectionKind) -> Option<&str> {
        self.get(kind).filter(|text| !text.is_empty())
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.blocks.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.blocks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
