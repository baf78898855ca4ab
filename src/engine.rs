//! Engine facade
//!
//! Wires extraction, scoring, suggestion and remediation together behind
//! the two host operations, `analyze` and `remediate`. An `Engine` holds
//! only its configuration, so one instance can serve any number of
//! concurrent callers.

use crate::config::EngineConfig;
use crate::metrics::MetricsExtractor;
use crate::models::{AnalysisResult, ContentDocument, Suggestion};
use crate::remediation::{RemediationEngine, TemplateRegistry};
use crate::scoring::ContentScorer;
use crate::suggestions::SuggestionEngine;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Default bound on `converge` rounds
pub const DEFAULT_MAX_ROUNDS: usize = 3;

#[derive(Debug, Default)]
pub struct Engine {
    extractor: MetricsExtractor,
    scorer: ContentScorer,
    suggester: SuggestionEngine,
    remediator: RemediationEngine,
}

/// Outcome of repeated remediate/analyze rounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Convergence {
    pub document: ContentDocument,
    /// Total before any round, then after each round
    pub history: Vec<u32>,
    /// Analysis of the final document
    pub result: AnalysisResult,
}

impl Convergence {
    pub fn rounds(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn initial_score(&self) -> u32 {
        self.history.first().copied().unwrap_or(0)
    }

    pub fn final_score(&self) -> u32 {
        self.result.score.total
    }
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        for unknown in config.unknown_rules() {
            warn!("Ignoring override for unknown rule '{}'", unknown);
        }
        Self {
            extractor: MetricsExtractor::new(config),
            scorer: ContentScorer::new(&config.scoring),
            suggester: SuggestionEngine::new(config),
            remediator: RemediationEngine::new(&config.remediation),
        }
    }

    /// Swap the remediation templates
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.remediator = self.remediator.with_templates(templates);
        self
    }

    pub fn scorer(&self) -> &ContentScorer {
        &self.scorer
    }

    /// Metrics, score and suggestions for one document. Total over all input.
    pub fn analyze(&self, document: &ContentDocument) -> AnalysisResult {
        let metrics = self.extractor.extract(document);
        let score = self.scorer.score(&metrics);
        let suggestions = self.suggester.suggest(&metrics);
        debug!(
            "Analyzed document: score {} with {} suggestion(s)",
            score.total,
            suggestions.len()
        );
        AnalysisResult {
            metrics,
            score,
            suggestions,
        }
    }

    /// Revised copy of `document` addressing `suggestions`
    pub fn remediate(
        &self,
        document: &ContentDocument,
        suggestions: &[Suggestion],
        catalog: &[String],
    ) -> ContentDocument {
        self.remediator.remediate(document, suggestions, catalog)
    }

    /// Alternate `analyze` and `remediate` until nothing auto-fixable is
    /// left, the document stops changing, or `max_rounds` is reached.
    pub fn converge(
        &self,
        document: &ContentDocument,
        catalog: &[String],
        max_rounds: usize,
    ) -> Convergence {
        let mut current = document.clone();
        let mut result = self.analyze(&current);
        let mut history = vec![result.score.total];

        for round in 1..=max_rounds {
            if !result.has_auto_fixes() {
                debug!("Round {}: nothing left to fix", round);
                break;
            }
            let revised = self.remediate(&current, &result.suggestions, catalog);
            if revised == current {
                debug!("Round {}: document unchanged, stopping", round);
                break;
            }
            current = revised;
            result = self.analyze(&current);
            history.push(result.score.total);
            debug!("Round {}: score {}", round, result.score.total);
        }

        info!(
            "Remediation: {} -> {} in {} round(s)",
            history.first().copied().unwrap_or(0),
            result.score.total,
            history.len() - 1
        );

        Convergence {
            document: current,
            history,
            result,
        }
    }
}
