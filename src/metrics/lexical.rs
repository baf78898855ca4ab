//! Lexical metrics: word count, unique-word ratio and keyword density

use crate::models::KeywordSet;
use regex::Regex;
use std::collections::HashSet;

/// Whitespace-separated tokens, empty tokens dropped
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// Distinct case-insensitive tokens divided by total tokens
pub fn unique_word_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut distinct = HashSet::new();
    for token in tokens(text) {
        total += 1;
        distinct.insert(token.to_lowercase());
    }
    if total == 0 {
        0.0
    } else {
        distinct.len() as f64 / total as f64
    }
}

/// Keyword occurrences per hundred tokens.
///
/// By default every keyword is counted as a raw, case-insensitive substring
/// of the text, so "cat" also matches inside "category". With `strict` set,
/// only whole-word occurrences count. An empty keyword set is defined as
/// zero density.
pub fn keyword_density(text: &str, keywords: &KeywordSet, strict: bool) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let words = word_count(text);
    if words == 0 {
        return 0.0;
    }

    let lowered = text.to_lowercase();
    let occurrences: usize = keywords
        .iter()
        .map(|keyword| count_occurrences(&lowered, &keyword.to_lowercase(), strict))
        .sum();

    occurrences as f64 / words as f64 * 100.0
}

/// Non-overlapping occurrences of `needle` in `haystack` (both lowercase)
pub fn count_occurrences(haystack: &str, needle: &str, strict: bool) -> usize {
    if needle.is_empty() {
        return 0;
    }
    if strict {
        let pattern = format!(r"\b{}\b", regex::escape(needle));
        if let Ok(re) = Regex::new(&pattern) {
            return re.find_iter(haystack).count();
        }
    }
    haystack.matches(needle).count()
}
