//! Text analysis pipeline: keyword extraction, section segmentation,
//! suggestion generation and cover letter templating

pub mod keywords;
pub mod sections;
pub mod suggestions;
pub mod cover_letter;
pub mod analyzer;
