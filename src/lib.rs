//! contentscore - content metrics and scoring engine
//!
//! Scores a document (title, meta description, body markup, keywords)
//! against a fixed rubric and derives prioritized suggestions from the
//! same metrics. An optional remediation pass rewrites the document so
//! that the next analysis scores higher.
//!
//! ```
//! use contentscore::{analyze, remediate, ContentDocument};
//!
//! let doc = ContentDocument::new("Tea", "", "<h1>Tea</h1><p>Boil water.</p>");
//! let result = analyze(&doc);
//! assert!(result.score.total <= 100);
//!
//! let catalog = vec!["green tea".to_string(), "black tea".to_string()];
//! let revised = remediate(&doc, &result.suggestions, &catalog);
//! assert!(analyze(&revised).score.total >= result.score.total);
//! ```
//!
//! The engine does no I/O and keeps no state between calls. Loading
//! documents, catalogs and configuration from disk lives in `loader` and
//! `config`, for hosts such as the bundled CLI.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod markup;
pub mod metrics;
pub mod models;
pub mod remediation;
pub mod reporters;
pub mod scoring;
pub mod suggestions;

pub use config::{EngineConfig, KeywordCatalog};
pub use engine::{Convergence, Engine};
pub use error::{LoadError, LoadResult};
pub use models::{
    AnalysisResult, ContentDocument, KeywordSet, Metrics, Severity, Suggestion, SuggestionKind,
};
pub use scoring::ScoreBreakdown;

/// Analyze a document with the default configuration
pub fn analyze(document: &ContentDocument) -> AnalysisResult {
    Engine::default().analyze(document)
}

/// Remediate a document with the default configuration.
///
/// `catalog` is the host's ranked keyword list; it is only read.
pub fn remediate(
    document: &ContentDocument,
    suggestions: &[Suggestion],
    catalog: &[String],
) -> ContentDocument {
    Engine::default().remediate(document, suggestions, catalog)
}
