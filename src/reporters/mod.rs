//! Output reporters for contentscore analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One analyzed document, as handed to a reporter
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Where the document came from (usually a path)
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Rendered score explanation, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl DocumentReport {
    pub fn new(source: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            result,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: String) -> Self {
        self.explanation = Some(explanation);
        self
    }

    pub fn grade(&self) -> &'static str {
        self.result.score.grade()
    }
}

/// Render reports in the specified format
pub fn report(reports: &[DocumentReport], format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(reports, fmt)
}

/// Render reports using an OutputFormat enum
pub fn report_with_format(reports: &[DocumentReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports),
        OutputFormat::Json => json::render(reports),
        OutputFormat::Markdown => markdown::render(reports),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}
