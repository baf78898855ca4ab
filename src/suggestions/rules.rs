//! Built-in suggestion rules
//!
//! Each rule checks one rubric condition against the extracted metrics.
//! Thresholds are the points at which the rubric starts withholding
//! score, so a document that clears all of them gets no suggestions.

use super::SuggestionRule;
use crate::models::{Action, Metrics, Severity, SuggestionKind};

pub const MIN_WORD_COUNT: usize = 500;
pub const MIN_READABILITY: f64 = 70.0;
pub const MIN_KEYWORDS: usize = 3;
pub const MIN_H2: usize = 3;
pub const MIN_TITLE_LENGTH: usize = 30;
pub const MIN_DESCRIPTION_LENGTH: usize = 120;
pub const MAX_KEYWORD_DENSITY: f64 = 5.0;

pub struct ShortContentRule;

impl SuggestionRule for ShortContentRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::ShortContent
    }

    fn default_severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Body has fewer than 500 words"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        (metrics.word_count < MIN_WORD_COUNT).then(|| {
            format!(
                "Content is {} words; aim for at least {}",
                metrics.word_count, MIN_WORD_COUNT
            )
        })
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Expand the body with more sections",
            vec![
                "Add sections that answer the questions readers ask most".to_string(),
                "Give each section its own heading".to_string(),
                "Use a list for steps or key points".to_string(),
            ],
        )
    }
}

pub struct LowReadabilityRule;

impl SuggestionRule for LowReadabilityRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::LowReadability
    }

    fn default_severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Readability index below 70"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        (metrics.readability_index < MIN_READABILITY).then(|| {
            format!(
                "Readability index is {:.1}; aim for {:.0} or higher",
                metrics.readability_index, MIN_READABILITY
            )
        })
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Use shorter sentences and plainer words",
            vec![
                "Split long sentences in two".to_string(),
                "Swap long words for short, common ones".to_string(),
            ],
        )
    }
}

pub struct FewKeywordsRule;

impl SuggestionRule for FewKeywordsRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::FewKeywords
    }

    fn default_severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Fewer than 3 keywords"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        (metrics.keyword_count < MIN_KEYWORDS).then(|| {
            format!(
                "Only {} keyword(s) set; add at least {}",
                metrics.keyword_count, MIN_KEYWORDS
            )
        })
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Add keywords from the keyword catalog",
            vec![
                "Pick phrases your audience searches for".to_string(),
                "Use each keyword at least once in the body".to_string(),
            ],
        )
    }
}

pub struct WeakHeadingsRule;

impl SuggestionRule for WeakHeadingsRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::WeakHeadings
    }

    fn default_severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Fewer than 3 second-level headings"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        let h2 = metrics.heading_counts.h2;
        (h2 < MIN_H2).then(|| format!("{} h2 heading(s); use at least {} to break up the body", h2, MIN_H2))
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Add section headings",
            vec![
                "Give each main topic an <h2>".to_string(),
                "Use <h3> for sub-points inside a section".to_string(),
            ],
        )
    }
}

pub struct MissingTitleRule;

impl SuggestionRule for MissingTitleRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::MissingTitle
    }

    fn default_severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Title missing or shorter than 30 characters"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        match metrics.title_length {
            0 => Some("Title is missing".to_string()),
            n if n < MIN_TITLE_LENGTH => Some(format!(
                "Title is {} characters; aim for at least {}",
                n, MIN_TITLE_LENGTH
            )),
            _ => None,
        }
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Write a descriptive title",
            vec![
                "Name the topic in the first few words".to_string(),
                "Keep it between 30 and 60 characters".to_string(),
            ],
        )
    }
}

pub struct ShortDescriptionRule;

impl SuggestionRule for ShortDescriptionRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::ShortDescription
    }

    fn default_severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Meta description missing or shorter than 120 characters"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        match metrics.description_length {
            0 => Some("Meta description is missing".to_string()),
            n if n < MIN_DESCRIPTION_LENGTH => Some(format!(
                "Meta description is {} characters; aim for {} to 160",
                n, MIN_DESCRIPTION_LENGTH
            )),
            _ => None,
        }
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Write a fuller meta description",
            vec![
                "Summarize what the reader will learn".to_string(),
                "Keep it between 120 and 160 characters".to_string(),
            ],
        )
    }
}

pub struct NoListsRule;

impl SuggestionRule for NoListsRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::NoLists
    }

    fn default_severity(&self) -> Severity {
        Severity::Low
    }

    fn description(&self) -> &'static str {
        "Body has no lists"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        (metrics.structure_counts.lists == 0)
            .then(|| "No lists found; lists make key points easy to scan".to_string())
    }

    fn action(&self) -> Action {
        Action::automatic(
            "Add a list of key points",
            vec!["Turn a run of steps or tips into a <ul> or <ol>".to_string()],
        )
    }
}

pub struct KeywordStuffingRule;

impl SuggestionRule for KeywordStuffingRule {
    fn kind(&self) -> SuggestionKind {
        SuggestionKind::KeywordStuffing
    }

    fn default_severity(&self) -> Severity {
        Severity::Low
    }

    fn description(&self) -> &'static str {
        "Keyword density above 5%"
    }

    fn evaluate(&self, metrics: &Metrics) -> Option<String> {
        (metrics.keyword_density_percent > MAX_KEYWORD_DENSITY).then(|| {
            format!(
                "Keyword density is {:.1}%; keep it at or below {:.0}%",
                metrics.keyword_density_percent, MAX_KEYWORD_DENSITY
            )
        })
    }

    fn action(&self) -> Action {
        Action::manual(
            "Use keywords less often",
            vec![
                "Replace some repeats with natural wording".to_string(),
                "Add more body text around the keywords".to_string(),
            ],
        )
    }
}
