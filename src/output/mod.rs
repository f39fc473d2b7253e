//! Rendering and export of analysis results

pub mod formatter;
pub mod report;

pub use formatter::{export_text, render_report, OutputFormatter};
pub use report::{display_keywords, FitReport, EMPTY_LIST_SENTINEL};
