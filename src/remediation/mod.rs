//! Remediation engine
//!
//! Applies one corrective transform per suggestion kind present, in a
//! fixed order, to a working copy of the document:
//!
//! ```text
//! MissingTitle → ShortDescription → FewKeywords
//!   → ShortContent → WeakHeadings → NoLists → LowReadability
//! ```
//!
//! Each transform re-checks its own condition against the working copy,
//! so a transform whose problem was already solved by an earlier one is
//! a no-op. Nothing here can fail. The caller re-runs `analyze()` on the
//! result to see the new score.

mod simplify;
mod templates;

pub use simplify::{Simplifier, SIMPLIFICATIONS};
pub use templates::{render, render_markup, Template, TemplateRegistry, SUBJECT};

use crate::config::RemediationConfig;
use crate::markup::{count_tags, first_heading_text, strip_tags};
use crate::metrics::word_count;
use crate::models::{ContentDocument, Suggestion, SuggestionKind};
use crate::suggestions::{MIN_DESCRIPTION_LENGTH, MIN_H2, MIN_KEYWORDS, MIN_TITLE_LENGTH, MIN_WORD_COUNT};
use std::collections::HashMap;
use tracing::debug;

/// Order transforms run in
pub const TRANSFORM_ORDER: &[SuggestionKind] = &[
    SuggestionKind::MissingTitle,
    SuggestionKind::ShortDescription,
    SuggestionKind::FewKeywords,
    SuggestionKind::ShortContent,
    SuggestionKind::WeakHeadings,
    SuggestionKind::NoLists,
    SuggestionKind::LowReadability,
];

pub const MAX_TITLE_LENGTH: usize = 60;
pub const MAX_DESCRIPTION_LENGTH: usize = 180;
/// Keeps the built-in title inside the optimal window
pub const MAX_SUBJECT_LENGTH: usize = 39;
pub const FALLBACK_SUBJECT: &str = "Your Topic";
/// Below this many words, unreadable content is replaced rather than simplified
pub const SIMPLIFY_MIN_WORDS: usize = 100;

const MAX_FILLER_REPEATS: usize = 8;
const MAX_APPENDED_SECTIONS: usize = 32;

/// Working copy shared by the transforms of one `remediate` call
struct Draft<'a> {
    document: ContentDocument,
    subject: String,
    catalog: &'a [String],
    cursors: HashMap<SuggestionKind, usize>,
}

impl Draft<'_> {
    fn body_words(&self) -> usize {
        word_count(&strip_tags(&self.document.body))
    }

    fn append(&mut self, block: &str) {
        if !self.document.body.is_empty() && !self.document.body.ends_with('\n') {
            self.document.body.push('\n');
        }
        self.document.body.push_str(block);
    }

    /// Next block of a section template, cycling when exhausted
    fn next_section(&mut self, templates: &TemplateRegistry, kind: SuggestionKind) -> Option<String> {
        let sections = templates.sections(kind);
        if sections.is_empty() {
            return None;
        }
        let cursor = self.cursors.entry(kind).or_insert(0);
        let section = &sections[*cursor % sections.len()];
        *cursor += 1;
        Some(render_markup(section, &self.subject))
    }
}

#[derive(Debug, Clone)]
pub struct RemediationEngine {
    config: RemediationConfig,
    templates: TemplateRegistry,
}

impl Default for RemediationEngine {
    fn default() -> Self {
        Self::new(&RemediationConfig::default())
    }
}

impl RemediationEngine {
    pub fn new(config: &RemediationConfig) -> Self {
        Self {
            config: config.clone(),
            templates: TemplateRegistry::builtin(),
        }
    }

    /// Swap the template registry
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    fn target_keywords(&self) -> usize {
        self.config.target_keyword_count.max(MIN_KEYWORDS)
    }

    fn target_words(&self) -> usize {
        self.config.target_word_count.max(MIN_WORD_COUNT)
    }

    /// Return a revised copy of `document` addressing `suggestions`.
    ///
    /// `catalog` is the ranked keyword list for the document's audience;
    /// it is only read.
    pub fn remediate(
        &self,
        document: &ContentDocument,
        suggestions: &[Suggestion],
        catalog: &[String],
    ) -> ContentDocument {
        let mut draft = Draft {
            document: document.clone(),
            subject: self.subject_for(document, catalog),
            catalog,
            cursors: HashMap::new(),
        };

        for &kind in TRANSFORM_ORDER {
            if !suggestions.iter().any(|s| s.kind == kind) {
                continue;
            }
            let changed = match kind {
                SuggestionKind::MissingTitle => self.fix_title(&mut draft),
                SuggestionKind::ShortDescription => self.fix_description(&mut draft),
                SuggestionKind::FewKeywords => self.fix_keywords(&mut draft),
                SuggestionKind::ShortContent => self.fix_content_length(&mut draft),
                SuggestionKind::WeakHeadings => self.fix_headings(&mut draft),
                SuggestionKind::NoLists => self.fix_lists(&mut draft),
                SuggestionKind::LowReadability => self.fix_readability(&mut draft),
                SuggestionKind::KeywordStuffing => false,
            };
            debug!(
                "Transform {}: {}",
                kind,
                if changed { "applied" } else { "no-op" }
            );
        }

        draft.document
    }

    /// Topic name used by templates
    pub fn subject_for(&self, document: &ContentDocument, catalog: &[String]) -> String {
        let candidates = [
            self.config.subject.clone(),
            document.keywords.first().map(str::to_string),
            catalog.first().cloned(),
            Some(document.title.clone()),
            first_heading_text(&document.body),
        ];
        let subject = candidates
            .into_iter()
            .flatten()
            .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_SUBJECT.to_string());
        truncate_words(&subject, MAX_SUBJECT_LENGTH)
    }

    fn fix_title(&self, draft: &mut Draft<'_>) -> bool {
        if draft.document.title_length() >= MIN_TITLE_LENGTH {
            return false;
        }
        let Some((text, filler)) = self.templates.line(SuggestionKind::MissingTitle) else {
            return false;
        };
        draft.document.title = fill_line(
            render(text, &draft.subject),
            filler,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        );
        true
    }

    fn fix_description(&self, draft: &mut Draft<'_>) -> bool {
        if draft.document.description_length() >= MIN_DESCRIPTION_LENGTH {
            return false;
        }
        let Some((text, filler)) = self.templates.line(SuggestionKind::ShortDescription) else {
            return false;
        };
        draft.document.meta_description = fill_line(
            render(text, &draft.subject),
            filler,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        );
        true
    }

    fn fix_keywords(&self, draft: &mut Draft<'_>) -> bool {
        let target = self.target_keywords();
        let before = draft.document.keywords.len();
        for phrase in draft.catalog {
            if draft.document.keywords.len() >= target {
                break;
            }
            draft.document.keywords.insert(phrase);
        }
        let added = draft.document.keywords.len() - before;
        if added > 0 {
            debug!("Added {} keyword(s) from catalog", added);
        }
        added > 0
    }

    /// Grow the body to the target word count, then make sure it has an
    /// `h1` and a list
    fn fix_content_length(&self, draft: &mut Draft<'_>) -> bool {
        let target = self.target_words();
        let mut changed = false;

        let mut appended = 0;
        while draft.body_words() < target && appended < MAX_APPENDED_SECTIONS {
            let Some(section) = draft.next_section(&self.templates, SuggestionKind::ShortContent)
            else {
                break;
            };
            draft.append(&section);
            appended += 1;
            changed = true;
        }

        let (headings, structure) = count_tags(&draft.document.body);
        if headings.h1 == 0 {
            let heading = render_markup("<h1>{subject}</h1>\n", &draft.subject);
            draft.document.body.insert_str(0, &heading);
            changed = true;
        }
        if structure.lists == 0 {
            changed |= self.fix_lists(draft);
        }

        changed
    }

    fn fix_headings(&self, draft: &mut Draft<'_>) -> bool {
        let mut changed = false;
        let mut appended = 0;
        while count_tags(&draft.document.body).0.h2 < MIN_H2 && appended < MAX_APPENDED_SECTIONS {
            let Some(section) = draft.next_section(&self.templates, SuggestionKind::WeakHeadings)
            else {
                break;
            };
            draft.append(&section);
            appended += 1;
            changed = true;
        }
        changed
    }

    fn fix_lists(&self, draft: &mut Draft<'_>) -> bool {
        if count_tags(&draft.document.body).1.lists > 0 {
            return false;
        }
        match draft.next_section(&self.templates, SuggestionKind::NoLists) {
            Some(checklist) => {
                draft.append(&checklist);
                true
            }
            None => false,
        }
    }

    /// Simplify substantial bodies; replace short ones outright
    fn fix_readability(&self, draft: &mut Draft<'_>) -> bool {
        if draft.body_words() > SIMPLIFY_MIN_WORDS {
            let simplifier = Simplifier::new(&draft.document.keywords);
            let (body, replaced) = simplifier.simplify(&draft.document.body);
            debug!("Simplified {} word(s)", replaced);
            draft.document.body = body;
            return replaced > 0;
        }

        let sections = self.templates.sections(SuggestionKind::LowReadability);
        if sections.is_empty() {
            return false;
        }
        let mut body = render_markup("<h1>{subject}</h1>", &draft.subject);
        for section in sections {
            body.push('\n');
            body.push_str(&render_markup(section, &draft.subject));
        }
        draft.document.body = body;
        true
    }
}

/// Pad `line` with `filler` up to `min` characters, then cap it at `max`
fn fill_line(mut line: String, filler: &str, min: usize, max: usize) -> String {
    let mut repeats = 0;
    while line.trim().chars().count() < min && !filler.is_empty() && repeats < MAX_FILLER_REPEATS {
        line.push_str(filler);
        repeats += 1;
    }
    let line = line.trim();
    if line.chars().count() > max {
        truncate_words(line, max)
    } else {
        line.to_string()
    }
}

/// Cut to at most `max` characters, preferring a word boundary
fn truncate_words(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let next_is_break = text.chars().nth(max).is_some_and(char::is_whitespace);
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(idx) if !next_is_break && idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    trimmed.trim_end().to_string()
}

/// Remediate with the default configuration and built-in templates
pub fn remediate(
    document: &ContentDocument,
    suggestions: &[Suggestion],
    catalog: &[String],
) -> ContentDocument {
    RemediationEngine::default().remediate(document, suggestions, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn suggestion(kind: SuggestionKind) -> Suggestion {
        Suggestion {
            kind,
            severity: Severity::High,
            message: String::new(),
            remediation: None,
        }
    }

    fn catalog() -> Vec<String> {
        ["pour over", "french press", "cold brew", "latte art", "espresso"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_subject_precedence() {
        let engine = RemediationEngine::default();
        let doc = ContentDocument::new("Brewing", "", "<h2>Beans</h2>").with_keywords(["coffee"]);
        assert_eq!(engine.subject_for(&doc, &catalog()), "coffee");

        let doc = ContentDocument::new("Brewing", "", "<h2>Beans</h2>");
        assert_eq!(engine.subject_for(&doc, &catalog()), "pour over");
        assert_eq!(engine.subject_for(&doc, &[]), "Brewing");

        let doc = ContentDocument::new("  ", "", "<h2>Beans</h2>");
        assert_eq!(engine.subject_for(&doc, &[]), "Beans");
        assert_eq!(
            engine.subject_for(&ContentDocument::default(), &[]),
            FALLBACK_SUBJECT
        );

        let config = RemediationConfig {
            subject: Some("Tea".to_string()),
            ..Default::default()
        };
        let doc = ContentDocument::default().with_keywords(["coffee"]);
        assert_eq!(RemediationEngine::new(&config).subject_for(&doc, &[]), "Tea");
    }

    #[test]
    fn test_long_subject_is_truncated_on_a_word() {
        let engine = RemediationEngine::default();
        let doc = ContentDocument::default()
            .with_keywords(["the very best single origin light roast coffee beans of the year"]);
        let subject = engine.subject_for(&doc, &[]);
        assert!(subject.chars().count() <= MAX_SUBJECT_LENGTH);
        assert_eq!(subject, "the very best single origin light roast");
    }

    #[test]
    fn test_title_stays_in_window() {
        let engine = RemediationEngine::default();
        for subject in ["A", "Tea", "Home Espresso", "the very best single origin light roast"] {
            let doc = ContentDocument::default().with_keywords([subject]);
            let revised = engine.remediate(&doc, &[suggestion(SuggestionKind::MissingTitle)], &[]);
            let len = revised.title_length();
            assert!((30..=60).contains(&len), "{:?} -> {} chars", revised.title, len);
        }
    }

    #[test]
    fn test_description_stays_in_window() {
        let engine = RemediationEngine::default();
        for subject in ["A", "Home Espresso", "the very best single origin light roast"] {
            let doc = ContentDocument::default().with_keywords([subject]);
            let revised =
                engine.remediate(&doc, &[suggestion(SuggestionKind::ShortDescription)], &[]);
            let len = revised.description_length();
            assert!((120..=180).contains(&len), "{} chars", len);
        }
    }

    #[test]
    fn test_long_title_is_left_alone() {
        let doc = ContentDocument::new("A perfectly fine title for this page", "", "");
        let revised = remediate(&doc, &[suggestion(SuggestionKind::MissingTitle)], &[]);
        assert_eq!(revised.title, doc.title);
    }

    #[test]
    fn test_keywords_fill_without_duplicates() {
        let doc = ContentDocument::default().with_keywords(["Cold Brew"]);
        let revised = remediate(&doc, &[suggestion(SuggestionKind::FewKeywords)], &catalog());
        let keywords: Vec<&str> = revised.keywords.iter().collect();
        assert_eq!(
            keywords,
            vec!["Cold Brew", "pour over", "french press", "latte art", "espresso"]
        );
        // caller's copy untouched
        assert_eq!(doc.keywords.len(), 1);
    }

    #[test]
    fn test_keywords_with_short_catalog() {
        let doc = ContentDocument::default();
        let short = vec!["one".to_string(), "  ".to_string(), "ONE".to_string()];
        let revised = remediate(&doc, &[suggestion(SuggestionKind::FewKeywords)], &short);
        assert_eq!(revised.keywords.len(), 1);
    }

    #[test]
    fn test_short_content_reaches_target() {
        let doc = ContentDocument::new("", "", "<p>Just a few words here.</p>");
        let revised = remediate(&doc, &[suggestion(SuggestionKind::ShortContent)], &[]);
        assert!(word_count(&strip_tags(&revised.body)) >= MIN_WORD_COUNT);
        let (headings, structure) = count_tags(&revised.body);
        assert_eq!(headings.h1, 1);
        assert!(structure.lists >= 1);
        assert!(revised.body.contains("<p>Just a few words here.</p>"));
    }

    #[test]
    fn test_short_content_with_empty_templates() {
        let engine = RemediationEngine::default().with_templates(TemplateRegistry::empty());
        let doc = ContentDocument::new("", "", "<p>Tiny.</p>");
        let revised = engine.remediate(&doc, &[suggestion(SuggestionKind::ShortContent)], &[]);
        // h1 is still added; nothing else to draw from
        assert!(revised.body.starts_with("<h1>"));
        assert!(revised.body.ends_with("<p>Tiny.</p>"));
    }

    #[test]
    fn test_weak_headings_adds_h2() {
        let doc = ContentDocument::new("", "", "<h2>One</h2><p>Text.</p>");
        let revised = remediate(&doc, &[suggestion(SuggestionKind::WeakHeadings)], &[]);
        assert_eq!(count_tags(&revised.body).0.h2, 3);
    }

    #[test]
    fn test_no_lists_only_touches_body() {
        let doc = ContentDocument::new("Title", "Description", "<p>Body.</p>")
            .with_keywords(["a", "b"]);
        let revised = remediate(&doc, &[suggestion(SuggestionKind::NoLists)], &catalog());
        assert_eq!(revised.title, doc.title);
        assert_eq!(revised.meta_description, doc.meta_description);
        assert_eq!(revised.keywords, doc.keywords);
        assert_ne!(revised.body, doc.body);
        assert_eq!(count_tags(&revised.body).1.lists, 1);
    }

    #[test]
    fn test_short_unreadable_body_is_replaced() {
        let doc = ContentDocument::new(
            "",
            "",
            "<p>Notwithstanding considerable organizational complexity, implementation necessitates interdepartmental coordination.</p>",
        )
        .with_keywords(["logistics"]);
        let revised = remediate(&doc, &[suggestion(SuggestionKind::LowReadability)], &[]);
        assert!(revised.body.starts_with("<h1>logistics</h1>"));
        assert!(word_count(&strip_tags(&revised.body)) >= MIN_WORD_COUNT);
    }

    #[test]
    fn test_long_body_is_simplified() {
        let sentence = "We utilize numerous tools to facilitate the work. ";
        let body = format!("<p>{}</p>", sentence.repeat(15));
        let doc = ContentDocument::new("", "", body.clone());
        let revised = remediate(&doc, &[suggestion(SuggestionKind::LowReadability)], &[]);
        assert!(revised.body.contains("We use many tools to help the work."));
        assert_eq!(
            word_count(&strip_tags(&revised.body)),
            word_count(&strip_tags(&body))
        );
    }

    #[test]
    fn test_no_suggestions_no_change() {
        let doc = ContentDocument::new("T", "D", "<p>B.</p>").with_keywords(["k"]);
        assert_eq!(remediate(&doc, &[], &catalog()), doc);
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("short", 10), "short");
        assert_eq!(truncate_words("one two three", 7), "one two");
        assert_eq!(truncate_words("one two three", 8), "one two");
        assert_eq!(truncate_words("abcdefghij", 4), "abcd");
    }
}
