//! Report renderers for testdiff
//!
//! Turns a ComparisonReport into one of three output formats: a sectioned
//! plain-text report, pretty-printed JSON, or a standalone HTML page. All
//! three expose the same underlying numeric values for the same report.

mod error;
mod html;
mod json;
mod text;

pub use error::{RenderError, RenderResult};

use testdiff_core::ComparisonReport;
use tracing::debug;

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Html,
}

/// Render a report in the requested format
pub fn render(report: &ComparisonReport, format: Format) -> RenderResult<String> {
    debug!(format = ?format, "rendering comparison report");
    match format {
        Format::Text => Ok(text::render_text(report)),
        Format::Json => json::render_json(report),
        Format::Html => html::render_html(report),
    }
}
