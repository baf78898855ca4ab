//! Core data models for contentscore
//!
//! These models are used throughout the crate for representing the
//! content under analysis, the metrics derived from it, and the
//! suggestions and results handed back to the host.

use crate::scoring::ScoreBreakdown;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A piece of content to analyze: title, meta description, body markup
/// and the keyword set the author is targeting.
///
/// The engine never mutates a document; remediation returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meta_description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default)]
    pub keywords: KeywordSet,
}

impl ContentDocument {
    pub fn new(
        title: impl Into<String>,
        meta_description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            meta_description: meta_description.into(),
            body: body.into(),
            keywords: KeywordSet::new(),
        }
    }

    /// Replace the keyword set
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords.into_iter().collect();
        self
    }

    /// Title length in characters, ignoring surrounding whitespace
    pub fn title_length(&self) -> usize {
        self.title.trim().chars().count()
    }

    /// Meta description length in characters, ignoring surrounding whitespace
    pub fn description_length(&self) -> usize {
        self.meta_description.trim().chars().count()
    }
}

/// Ordered set of keyword phrases.
///
/// Insertion order is preserved. Duplicates (compared trimmed and
/// case-insensitively) and blank entries are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct KeywordSet {
    /// lowercase key -> phrase as entered (trimmed)
    entries: IndexMap<String, String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Returns false if it was blank or already present.
    pub fn insert(&mut self, keyword: impl AsRef<str>) -> bool {
        let phrase = keyword.as_ref().trim();
        if phrase.is_empty() {
            return false;
        }
        let key = phrase.to_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, phrase.to_string());
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(&keyword.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// First keyword inserted, if any
    pub fn first(&self) -> Option<&str> {
        self.entries.values().next().map(String::as_str)
    }
}

// IndexMap equality ignores order; keyword sets compare in order.
impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.values().eq(other.entries.values())
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

impl From<Option<Vec<String>>> for KeywordSet {
    fn from(keywords: Option<Vec<String>>) -> Self {
        keywords.unwrap_or_default().into_iter().collect()
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.entries.into_values().collect()
    }
}

/// Counts of `h1`/`h2`/`h3` tags in the body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// Counts of block/inline structural tags in the body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCounts {
    pub paragraphs: usize,
    /// Ordered and unordered list containers
    pub lists: usize,
    pub links: usize,
    pub images: usize,
}

/// Measurable signals extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub word_count: usize,
    /// Distinct case-insensitive tokens / total tokens, 0.0 for no tokens
    pub unique_word_ratio: f64,
    /// In [50, 100], or exactly 0.0 when the text has no sentence or word
    pub readability_index: f64,
    pub keyword_density_percent: f64,
    pub keyword_count: usize,
    pub heading_counts: HeadingCounts,
    pub structure_counts: StructureCounts,
    pub title_length: usize,
    pub description_length: usize,
    pub title_optimal: bool,
    pub description_optimal: bool,
}

/// Severity of a suggestion. Ordered so that `High` sorts last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Every rubric condition a suggestion can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    MissingTitle,
    ShortDescription,
    ShortContent,
    LowReadability,
    FewKeywords,
    WeakHeadings,
    NoLists,
    KeywordStuffing,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::MissingTitle => "missing-title",
            SuggestionKind::ShortDescription => "short-description",
            SuggestionKind::ShortContent => "short-content",
            SuggestionKind::LowReadability => "low-readability",
            SuggestionKind::FewKeywords => "few-keywords",
            SuggestionKind::WeakHeadings => "weak-headings",
            SuggestionKind::NoLists => "no-lists",
            SuggestionKind::KeywordStuffing => "keyword-stuffing",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to act on a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// One-line summary of the fix
    pub summary: String,
    /// Step-by-step instructions for the author
    pub steps: Vec<String>,
    /// Whether the remediation engine can apply this fix itself
    pub auto_applicable: bool,
}

impl Action {
    /// A fix the remediation engine applies on its own
    pub fn automatic(summary: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            steps,
            auto_applicable: true,
        }
    }

    /// Advice the author has to act on by hand
    pub fn manual(summary: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            steps,
            auto_applicable: false,
        }
    }
}

/// A prioritized statement that one rubric condition is unmet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub remediation: Option<Action>,
}

impl Suggestion {
    pub fn is_auto_applicable(&self) -> bool {
        self.remediation
            .as_ref()
            .is_some_and(|action| action.auto_applicable)
    }
}

/// Summary of suggestions by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl SuggestionsSummary {
    pub fn from_suggestions(suggestions: &[Suggestion]) -> Self {
        let mut summary = Self::default();
        for s in suggestions {
            match s.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// Everything one `analyze()` pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metrics: Metrics,
    pub score: ScoreBreakdown,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisResult {
    pub fn summary(&self) -> SuggestionsSummary {
        SuggestionsSummary::from_suggestions(&self.suggestions)
    }

    pub fn has_high_severity(&self) -> bool {
        self.suggestions
            .iter()
            .any(|s| s.severity == Severity::High)
    }

    /// Whether any suggestion carries a fix the engine can apply
    pub fn has_auto_fixes(&self) -> bool {
        self.suggestions.iter().any(Suggestion::is_auto_applicable)
    }
}

/// Letter grade for a 0-100 total
pub fn grade_from_score(total: u32) -> &'static str {
    match total {
        s if s >= 90 => "A",
        s if s >= 80 => "B",
        s if s >= 70 => "C",
        s if s >= 60 => "D",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set_rejects_duplicates() {
        let mut set = KeywordSet::new();
        assert!(set.insert("Coffee Beans"));
        assert!(!set.insert("coffee beans"));
        assert!(!set.insert("  COFFEE BEANS "));
        assert!(!set.insert("   "));
        assert!(set.insert("espresso"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Coffee Beans", "espresso"]);
    }

    #[test]
    fn test_keyword_set_equality_is_ordered() {
        let a: KeywordSet = ["one", "two"].into_iter().collect();
        let b: KeywordSet = ["two", "one"].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, ["one", "two"].into_iter().collect());
    }

    #[test]
    fn test_document_null_fields() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"title": null, "metaDescription": null, "body": null, "keywords": null}"#,
        )
        .expect("parse document");
        assert_eq!(doc, ContentDocument::default());

        let doc: ContentDocument = serde_json::from_str("{}").expect("parse empty document");
        assert!(doc.keywords.is_empty());
    }

    #[test]
    fn test_document_keywords_deduplicated_on_load() {
        let doc: ContentDocument =
            serde_json::from_str(r#"{"keywords": ["tea", "Tea", "green tea"]}"#)
                .expect("parse document");
        assert_eq!(doc.keywords.len(), 2);
        let json = serde_json::to_value(&doc).expect("serialize document");
        assert_eq!(json["keywords"], serde_json::json!(["tea", "green tea"]));
    }

    #[test]
    fn test_summary_counts() {
        let suggestions = vec![
            Suggestion {
                kind: SuggestionKind::ShortContent,
                severity: Severity::High,
                message: String::new(),
                remediation: None,
            },
            Suggestion {
                kind: SuggestionKind::NoLists,
                severity: Severity::Low,
                message: String::new(),
                remediation: None,
            },
        ];
        let summary = SuggestionsSummary::from_suggestions(&suggestions);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 0);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_from_score(100), "A");
        assert_eq!(grade_from_score(90), "A");
        assert_eq!(grade_from_score(89), "B");
        assert_eq!(grade_from_score(70), "C");
        assert_eq!(grade_from_score(60), "D");
        assert_eq!(grade_from_score(0), "F");
    }
}
