//! Markup normalizer
//!
//! Turns body markup into running plain text (for word and sentence
//! counting) and, in an independent pass over the same input, counts the
//! structural tags the rubric cares about. Tag matching is case-insensitive
//! and tolerates attributes. Entities are left as opaque text.

use crate::models::{HeadingCounts, StructureCounts};
use regex::Regex;
use std::sync::OnceLock;

static TAG: OnceLock<Regex> = OnceLock::new();
static OPENING_TAG: OnceLock<Regex> = OnceLock::new();
static HEADING_TEXT: OnceLock<Regex> = OnceLock::new();

fn tag() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn opening_tag() -> &'static Regex {
    // Only opening tags: `</p>` never matches because of the `/`
    OPENING_TAG.get_or_init(|| {
        Regex::new(r"(?i)<\s*(h1|h2|h3|p|ul|ol|a|img)\b[^>]*>").expect("valid opening tag regex")
    })
}

fn heading_text() -> &'static Regex {
    HEADING_TEXT.get_or_init(|| {
        Regex::new(r"(?is)<\s*h[1-3]\b[^>]*>(.*?)<\s*/\s*h[1-3]\s*>")
            .expect("valid heading regex")
    })
}

/// Output of one normalization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedMarkup {
    pub plain_text: String,
    pub headings: HeadingCounts,
    pub structure: StructureCounts,
}

/// Strip markup and count structural tags. Empty input yields empty text
/// and all-zero counts.
pub fn normalize(body: &str) -> NormalizedMarkup {
    if body.trim().is_empty() {
        return NormalizedMarkup::default();
    }

    let (headings, structure) = count_tags(body);
    NormalizedMarkup {
        plain_text: strip_tags(body),
        headings,
        structure,
    }
}

/// Replace every tag with a space so words from adjacent blocks never fuse
pub fn strip_tags(body: &str) -> String {
    tag().replace_all(body, " ").into_owned()
}

/// Count heading and structural opening tags
pub fn count_tags(body: &str) -> (HeadingCounts, StructureCounts) {
    let mut headings = HeadingCounts::default();
    let mut structure = StructureCounts::default();

    for cap in opening_tag().captures_iter(body) {
        let Some(name) = cap.get(1) else { continue };
        match name.as_str().to_ascii_lowercase().as_str() {
            "h1" => headings.h1 += 1,
            "h2" => headings.h2 += 1,
            "h3" => headings.h3 += 1,
            "p" => structure.paragraphs += 1,
            "ul" | "ol" => structure.lists += 1,
            "a" => structure.links += 1,
            "img" => structure.images += 1,
            _ => {}
        }
    }

    (headings, structure)
}

/// Plain text of the first `h1`-`h3` heading, if any
pub fn first_heading_text(body: &str) -> Option<String> {
    heading_text()
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| strip_tags(m.as_str()).split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        let normalized = normalize("");
        assert_eq!(normalized, NormalizedMarkup::default());
        assert_eq!(normalize("   \n ").plain_text, "");
    }

    #[test]
    fn test_counts_are_case_insensitive_with_attributes() {
        let body = r#"<H1 class="hero">Hi</H1>
            <p>One</p><P style="x">Two</P>
            <UL><li>a</li></UL><ol start="3"><li>b</li></ol>
            <a href="/x">link</a><IMG src="a.png" alt="a"/>
            <h2>A</h2><h2 id="b">B</h2><h3>C</h3>"#;
        let normalized = normalize(body);
        assert_eq!(normalized.headings, HeadingCounts { h1: 1, h2: 2, h3: 1 });
        assert_eq!(
            normalized.structure,
            StructureCounts {
                paragraphs: 2,
                lists: 2,
                links: 1,
                images: 1
            }
        );
    }

    #[test]
    fn test_similar_tag_names_not_counted() {
        let (headings, structure) = count_tags("<pre>x</pre><abbr>y</abbr><article>z</article><h4>w</h4>");
        assert_eq!(headings, HeadingCounts::default());
        assert_eq!(structure, StructureCounts::default());
    }

    #[test]
    fn test_strip_keeps_words_apart() {
        let text = normalize("<p>one</p><p>two</p>").plain_text;
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_entities_are_opaque() {
        let text = strip_tags("<p>fish &amp; chips</p>");
        assert!(text.contains("&amp;"));
    }

    #[test]
    fn test_first_heading_text() {
        assert_eq!(
            first_heading_text("<p>x</p><h2> Brewing <em>Tea</em> </h2><h1>Later</h1>"),
            Some("Brewing Tea".to_string())
        );
        assert_eq!(first_heading_text("<p>none</p>"), None);
    }
}
