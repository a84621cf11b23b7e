pub mod formatter;
pub mod report;

pub use formatter::{save_letter, save_report_to_file, ReportGenerator};
pub use report::ApplicationReport;
