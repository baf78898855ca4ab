//! Suggestion generation
//!
//! Rules are evaluated independently against one `Metrics` snapshot, so
//! any number may fire. The result is ordered High, then Medium, then Low,
//! keeping rule-evaluation order within a tier.
//!
//! Rules can be disabled or re-prioritized through `[rules.<name>]` in
//! the engine configuration.

mod rules;

pub use rules::{
    FewKeywordsRule, KeywordStuffingRule, LowReadabilityRule, MissingTitleRule, NoListsRule,
    ShortContentRule, ShortDescriptionRule, WeakHeadingsRule, MAX_KEYWORD_DENSITY,
    MIN_DESCRIPTION_LENGTH, MIN_H2, MIN_KEYWORDS, MIN_READABILITY, MIN_TITLE_LENGTH,
    MIN_WORD_COUNT,
};

use crate::config::EngineConfig;
use crate::models::{Action, Metrics, Severity, Suggestion, SuggestionKind};
use tracing::debug;

/// Rule evaluation order
pub const RULE_ORDER: &[SuggestionKind] = &[
    SuggestionKind::ShortContent,
    SuggestionKind::LowReadability,
    SuggestionKind::FewKeywords,
    SuggestionKind::WeakHeadings,
    SuggestionKind::MissingTitle,
    SuggestionKind::ShortDescription,
    SuggestionKind::NoLists,
    SuggestionKind::KeywordStuffing,
];

/// A single rubric check
///
/// # Example Implementation
///
/// ```ignore
/// pub struct NoImagesRule;
///
/// impl SuggestionRule for NoImagesRule {
///     fn kind(&self) -> SuggestionKind { ... }
///     fn default_severity(&self) -> Severity { Severity::Low }
///     fn description(&self) -> &'static str { "Body has no images" }
///     fn evaluate(&self, metrics: &Metrics) -> Option<String> {
///         (metrics.structure_counts.images == 0).then(|| "Add an image".to_string())
///     }
///     fn action(&self) -> Action { ... }
/// }
/// ```
pub trait SuggestionRule: Send + Sync {
    fn kind(&self) -> SuggestionKind;

    /// Config-facing name, e.g. "no-lists"
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn default_severity(&self) -> Severity;

    /// Human-readable description of the condition
    fn description(&self) -> &'static str;

    /// Message for the author when the condition holds, `None` otherwise
    fn evaluate(&self, metrics: &Metrics) -> Option<String>;

    /// How to fix it
    fn action(&self) -> Action;
}

/// All built-in rules in evaluation order
pub fn default_rules() -> Vec<Box<dyn SuggestionRule>> {
    vec![
        Box::new(ShortContentRule),
        Box::new(LowReadabilityRule),
        Box::new(FewKeywordsRule),
        Box::new(WeakHeadingsRule),
        Box::new(MissingTitleRule),
        Box::new(ShortDescriptionRule),
        Box::new(NoListsRule),
        Box::new(KeywordStuffingRule),
    ]
}

struct ActiveRule {
    rule: Box<dyn SuggestionRule>,
    severity: Severity,
}

/// Runs the enabled rules with their effective severities
pub struct SuggestionEngine {
    rules: Vec<ActiveRule>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl std::fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| (r.rule.name(), r.severity)))
            .finish()
    }
}

impl SuggestionEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let rules = default_rules()
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.kind());
                if !enabled {
                    debug!("Rule {} disabled by config", rule.name());
                }
                enabled
            })
            .map(|rule| {
                let severity = config
                    .severity_override(rule.kind())
                    .unwrap_or_else(|| rule.default_severity());
                ActiveRule { rule, severity }
            })
            .collect();
        Self { rules }
    }

    /// Kinds this engine can emit, in evaluation order
    pub fn active_kinds(&self) -> Vec<SuggestionKind> {
        self.rules.iter().map(|r| r.rule.kind()).collect()
    }

    pub fn suggest(&self, metrics: &Metrics) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .rules
            .iter()
            .filter_map(|active| {
                active.rule.evaluate(metrics).map(|message| Suggestion {
                    kind: active.rule.kind(),
                    severity: active.severity,
                    message,
                    remediation: Some(active.rule.action()),
                })
            })
            .collect();

        // Stable, so evaluation order survives within a tier
        suggestions.sort_by(|a, b| b.severity.cmp(&a.severity));

        debug!("{} suggestion(s) fired", suggestions.len());
        suggestions
    }
}

/// Suggestions from the built-in rules at default severities
pub fn suggest(metrics: &Metrics) -> Vec<Suggestion> {
    SuggestionEngine::default().suggest(metrics)
}
