//! JSON reporter
//!
//! One object per document: source, grade, suggestion summary, then the
//! full `AnalysisResult` fields. A single document renders as an object,
//! several as an array.

use super::DocumentReport;
use crate::models::SuggestionsSummary;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    grade: &'static str,
    summary: SuggestionsSummary,
    #[serde(flatten)]
    report: &'a DocumentReport,
}

fn views(reports: &[DocumentReport]) -> Vec<JsonReport<'_>> {
    reports
        .iter()
        .map(|report| JsonReport {
            grade: report.grade(),
            summary: report.result.summary(),
            report,
        })
        .collect()
}

/// Render reports as pretty-printed JSON
pub fn render(reports: &[DocumentReport]) -> Result<String> {
    let views = views(reports);
    Ok(match views.as_slice() {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    })
}
