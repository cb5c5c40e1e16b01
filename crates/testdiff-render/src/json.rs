//! JSON report renderer

use crate::error::RenderResult;
use testdiff_core::ComparisonReport;

/// Serialize the report as pretty-printed JSON
///
/// The machine format is the report structure itself; values are emitted
/// exactly as computed, with no re-rounding on the way out.
pub fn render_json(report: &ComparisonReport) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
