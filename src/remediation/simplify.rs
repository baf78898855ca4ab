//! Lexical simplification
//!
//! Swaps long words for short synonyms, one word for one word, so the
//! word count never changes. Markup tags are left untouched.

use crate::models::KeywordSet;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Complex word and its plain replacement
pub const SIMPLIFICATIONS: &[(&str, &str)] = &[
    ("accomplish", "do"),
    ("additional", "more"),
    ("adequate", "enough"),
    ("anticipate", "expect"),
    ("approximately", "about"),
    ("ascertain", "learn"),
    ("assistance", "help"),
    ("beneficial", "useful"),
    ("capability", "skill"),
    ("commence", "start"),
    ("component", "part"),
    ("consequently", "so"),
    ("demonstrate", "show"),
    ("endeavor", "try"),
    ("facilitate", "help"),
    ("frequently", "often"),
    ("however", "but"),
    ("indicate", "show"),
    ("individuals", "people"),
    ("initial", "first"),
    ("inquire", "ask"),
    ("magnitude", "size"),
    ("methodology", "method"),
    ("modify", "change"),
    ("nevertheless", "still"),
    ("numerous", "many"),
    ("objective", "goal"),
    ("obtain", "get"),
    ("optimal", "best"),
    ("primary", "main"),
    ("principal", "main"),
    ("purchase", "buy"),
    ("regarding", "about"),
    ("remainder", "rest"),
    ("require", "need"),
    ("significant", "big"),
    ("subsequently", "later"),
    ("sufficient", "enough"),
    ("terminate", "end"),
    ("therefore", "so"),
    ("transmit", "send"),
    ("utilise", "use"),
    ("utilize", "use"),
    ("visualize", "see"),
];

static TAG_SPLIT: OnceLock<Regex> = OnceLock::new();

fn tag_split() -> &'static Regex {
    TAG_SPLIT.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// Word-boundary replacer built from the table minus protected terms
#[derive(Debug, Clone)]
pub struct Simplifier {
    table: HashMap<&'static str, &'static str>,
    pattern: Option<Regex>,
}

impl Simplifier {
    /// Skip any table entry that overlaps a keyword, so keyword
    /// occurrences in the body are never rewritten away.
    pub fn new(keywords: &KeywordSet) -> Self {
        let protected: Vec<String> = keywords.iter().map(str::to_lowercase).collect();
        let table: HashMap<&'static str, &'static str> = SIMPLIFICATIONS
            .iter()
            .filter(|(complex, _)| {
                !protected
                    .iter()
                    .any(|k| k.contains(complex) || complex.contains(k.as_str()))
            })
            .copied()
            .collect();

        let pattern = if table.is_empty() {
            None
        } else {
            let mut words: Vec<&str> = table.keys().copied().collect();
            words.sort_unstable();
            Regex::new(&format!(r"(?i)\b({})\b", words.join("|"))).ok()
        };

        Self { table, pattern }
    }

    /// Rewrite `body`, returning the new body and the number of swaps
    pub fn simplify(&self, body: &str) -> (String, usize) {
        let Some(pattern) = &self.pattern else {
            return (body.to_string(), 0);
        };

        let mut out = String::with_capacity(body.len());
        let mut replaced = 0;
        let mut last = 0;
        for tag in tag_split().find_iter(body) {
            replaced += self.simplify_text(pattern, &body[last..tag.start()], &mut out);
            out.push_str(tag.as_str());
            last = tag.end();
        }
        replaced += self.simplify_text(pattern, &body[last..], &mut out);

        (out, replaced)
    }

    fn simplify_text(&self, pattern: &Regex, text: &str, out: &mut String) -> usize {
        let mut replaced = 0;
        let rewritten = pattern.replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            match self.table.get(word.to_lowercase().as_str()) {
                Some(simple) => {
                    replaced += 1;
                    match_case(word, simple)
                }
                None => word.to_string(),
            }
        });
        out.push_str(&rewritten);
        replaced
    }
}

/// Carry a leading capital over to the replacement
fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::word_count;

    #[test]
    fn test_simplify_on_word_boundaries() {
        let simplifier = Simplifier::new(&KeywordSet::new());
        let (out, n) = simplifier.simplify("<p>Utilize the tools. We utilized none.</p>");
        assert_eq!(out, "<p>Use the tools. We utilized none.</p>");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_tags_are_untouched() {
        let simplifier = Simplifier::new(&KeywordSet::new());
        let (out, n) = simplifier.simplify(r#"<a href="/purchase">Purchase now</a>"#);
        assert_eq!(out, r#"<a href="/purchase">Buy now</a>"#);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_word_count_is_preserved() {
        let simplifier = Simplifier::new(&KeywordSet::new());
        let body = "However, numerous individuals require additional assistance.";
        let (out, _) = simplifier.simplify(body);
        assert_eq!(out, "But, many people need more help.");
        assert_eq!(word_count(&out), word_count(body));
    }

    #[test]
    fn test_keywords_are_protected() {
        let keywords: KeywordSet = ["purchase guide"].into_iter().collect();
        let simplifier = Simplifier::new(&keywords);
        let (out, n) = simplifier.simplify("Purchase guide: purchase wisely and obtain value.");
        assert_eq!(out, "Purchase guide: purchase wisely and get value.");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_nothing_to_do() {
        let simplifier = Simplifier::new(&KeywordSet::new());
        let (out, n) = simplifier.simplify("Short and plain.");
        assert_eq!(out, "Short and plain.");
        assert_eq!(n, 0);
    }
}
