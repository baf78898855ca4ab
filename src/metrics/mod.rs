//! Metric extraction
//!
//! One pass per document:
//!
//! ```text
//! body ──► markup::normalize ──┬─► lexical     (words, unique ratio, density)
//!                              ├─► structure   (headings, elements, meta windows)
//!                              └─► readability (sentences, syllables)
//! ```
//!
//! Every function here is total: empty or missing fields produce zero
//! metrics, never an error.

pub mod lexical;
pub mod readability;
pub mod structure;

pub use lexical::{keyword_density, unique_word_ratio, word_count};
pub use readability::{readability, syllables, ReadabilityScorer};
pub use structure::{analyze_structure, StructuralReport};

use crate::config::EngineConfig;
use crate::markup::normalize;
use crate::models::{ContentDocument, Metrics};
use tracing::debug;

/// Extracts `Metrics` from documents with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct MetricsExtractor {
    readability: ReadabilityScorer,
    strict_keywords: bool,
}

impl MetricsExtractor {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            readability: ReadabilityScorer::new(&config.readability.extra_simple_words),
            strict_keywords: config.scoring.strict_keyword_matching,
        }
    }

    /// Count keywords on word boundaries only
    pub fn with_strict_keywords(mut self, strict: bool) -> Self {
        self.strict_keywords = strict;
        self
    }

    pub fn extract(&self, document: &ContentDocument) -> Metrics {
        let markup = normalize(&document.body);
        let text = markup.plain_text.as_str();
        let report = analyze_structure(document, &markup);

        let metrics = Metrics {
            word_count: word_count(text),
            unique_word_ratio: unique_word_ratio(text),
            readability_index: self.readability.score(text),
            keyword_density_percent: keyword_density(text, &document.keywords, self.strict_keywords),
            keyword_count: document.keywords.len(),
            heading_counts: report.headings,
            structure_counts: report.structure,
            title_length: report.title_length,
            description_length: report.description_length,
            title_optimal: report.title_optimal,
            description_optimal: report.description_optimal,
        };

        debug!(
            "Metrics: {} words, readability {:.1}, density {:.2}%, h1/h2/h3 {}/{}/{}",
            metrics.word_count,
            metrics.readability_index,
            metrics.keyword_density_percent,
            metrics.heading_counts.h1,
            metrics.heading_counts.h2,
            metrics.heading_counts.h3
        );

        metrics
    }
}

/// Extract metrics with the default configuration
pub fn extract(document: &ContentDocument) -> Metrics {
    MetricsExtractor::default().extract(document)
}
