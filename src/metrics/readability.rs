//! Readability scorer
//!
//! A lenient reading-ease variant, biased upward for short, simple,
//! domain-flavored sentences:
//!
//! ```text
//! base  = 206.835 - 0.8 × words/sentence - 70 × syllables/word
//! bonus = +10 if words/sentence ≤ 15
//!         +15 if syllables/word ≤ 1.5
//!         +10 if more than 30% of tokens are on the simple-word allowlist
//! index = clamp(base + bonus, 50, 100)
//! ```
//!
//! Text without a sentence or without a word scores exactly 0.

use super::lexical::tokens;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::trace;

pub const MIN_INDEX: f64 = 50.0;
pub const MAX_INDEX: f64 = 100.0;

const SHORT_SENTENCE_WORDS: f64 = 15.0;
const SHORT_SENTENCE_BONUS: f64 = 10.0;
const SIMPLE_SYLLABLES: f64 = 1.5;
const SIMPLE_SYLLABLES_BONUS: f64 = 15.0;
const SIMPLE_WORD_RATIO: f64 = 0.3;
const SIMPLE_WORD_BONUS: f64 = 10.0;

/// Common function words plus everyday content terms
pub const SIMPLE_WORDS: &[&str] = &[
    "a", "about", "all", "also", "an", "and", "are", "as", "at", "be", "best", "but", "by",
    "can", "do", "easy", "fast", "for", "free", "from", "get", "good", "great", "guide",
    "has", "have", "help", "how", "if", "in", "is", "it", "its", "just", "learn", "like",
    "make", "more", "most", "new", "no", "not", "now", "of", "on", "one", "or", "our", "out",
    "so", "start", "step", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "tip", "tips", "to", "top", "up", "use", "want", "way", "we", "what",
    "when", "which", "who", "why", "will", "with", "you", "your",
];

static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();
static SILENT_ENDING: OnceLock<Regex> = OnceLock::new();
static LEADING_Y: OnceLock<Regex> = OnceLock::new();
static VOWEL_GROUP: OnceLock<Regex> = OnceLock::new();

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence regex"))
}

fn silent_ending() -> &'static Regex {
    SILENT_ENDING.get_or_init(|| {
        Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid silent ending regex")
    })
}

fn leading_y() -> &'static Regex {
    LEADING_Y.get_or_init(|| Regex::new(r"^y").expect("valid leading y regex"))
}

fn vowel_group() -> &'static Regex {
    VOWEL_GROUP.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("valid vowel regex"))
}

/// Sentences split on runs of `.`, `!`, `?`, blanks discarded
pub fn sentence_count(text: &str) -> usize {
    sentence_break()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Estimated syllables in a single word
pub fn syllables(word: &str) -> usize {
    let word = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = silent_ending().replace(&word, "");
    let stripped = leading_y().replace(&stripped, "");
    match vowel_group().find_iter(&stripped).count() {
        0 => 1,
        n => n,
    }
}

/// Scores text readability against a simple-word allowlist
#[derive(Debug, Clone)]
pub struct ReadabilityScorer {
    simple_words: HashSet<String>,
}

impl Default for ReadabilityScorer {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl ReadabilityScorer {
    /// Build a scorer with the built-in allowlist plus `extra_words`
    pub fn new<I, S>(extra_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut simple_words: HashSet<String> =
            SIMPLE_WORDS.iter().map(|w| w.to_string()).collect();
        simple_words.extend(
            extra_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { simple_words }
    }

    fn is_simple(&self, token: &str) -> bool {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        self.simple_words.contains(&word)
    }

    /// Readability index in [50, 100], or 0 for text without sentences or words
    pub fn score(&self, text: &str) -> f64 {
        let sentences = sentence_count(text);
        let words: Vec<&str> = tokens(text).collect();
        if sentences == 0 || words.is_empty() {
            return 0.0;
        }

        let word_total = words.len() as f64;
        let syllable_total: usize = words.iter().map(|w| syllables(w)).sum();
        let words_per_sentence = word_total / sentences as f64;
        let syllables_per_word = syllable_total as f64 / word_total;

        let mut index = 206.835 - 0.8 * words_per_sentence - 70.0 * syllables_per_word;
        if words_per_sentence <= SHORT_SENTENCE_WORDS {
            index += SHORT_SENTENCE_BONUS;
        }
        if syllables_per_word <= SIMPLE_SYLLABLES {
            index += SIMPLE_SYLLABLES_BONUS;
        }

        let simple = words.iter().filter(|w| self.is_simple(w)).count();
        let simple_ratio = simple as f64 / word_total;
        if simple_ratio > SIMPLE_WORD_RATIO {
            index += SIMPLE_WORD_BONUS;
        }

        trace!(
            "readability: {:.2} words/sentence, {:.2} syllables/word, {:.0}% simple, raw {:.1}",
            words_per_sentence,
            syllables_per_word,
            simple_ratio * 100.0,
            index
        );

        index.clamp(MIN_INDEX, MAX_INDEX)
    }
}

/// Readability with the default allowlist
pub fn readability(text: &str) -> f64 {
    ReadabilityScorer::default().score(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables_short_words() {
        assert_eq!(syllables("a"), 1);
        assert_eq!(syllables("the"), 1);
        assert_eq!(syllables("Cat."), 1);
    }

    #[test]
    fn test_syllables_silent_endings() {
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("walked"), 1);
        assert_eq!(syllables("boxes"), 1);
        // "le" is not a silent ending
        assert_eq!(syllables("table"), 2);
    }

    #[test]
    fn test_syllables_longer_words() {
        assert_eq!(syllables("readability"), 5);
        assert_eq!(syllables("content"), 2);
        assert_eq!(syllables("yellow"), 2);
    }

    #[test]
    fn test_zero_for_no_sentences_or_words() {
        assert_eq!(readability(""), 0.0);
        assert_eq!(readability("   "), 0.0);
        assert_eq!(readability("...!!!???"), 0.0);
    }

    #[test]
    fn test_simple_text_hits_ceiling() {
        let text = "The cat sat on the mat. It was a good day. We can get more tips now.";
        assert_eq!(readability(text), MAX_INDEX);
    }

    #[test]
    fn test_dense_text_hits_floor() {
        let text = "Institutional organizational interdependencies necessitate comprehensive \
                    multidisciplinary reconceptualization notwithstanding considerable \
                    administrative complications characteristically accompanying implementation";
        assert_eq!(readability(text), MIN_INDEX);
    }

    #[test]
    fn test_bounds_hold_for_mixed_text() {
        for text in [
            "One.",
            "Hello world",
            "Complicated words everywhere, exceptionally articulated. Short one.",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        ] {
            let score = readability(text);
            assert!((MIN_INDEX..=MAX_INDEX).contains(&score), "{} -> {}", text, score);
        }
    }

    #[test]
    fn test_extra_simple_words_count_toward_bonus() {
        // Without the extras the allowlist ratio stays under 30%
        let text = "Espresso crema tastes rich. Baristas pour espresso slowly.";
        let base = ReadabilityScorer::default().score(text);
        let tuned = ReadabilityScorer::new(["espresso", "crema", "baristas"]).score(text);
        assert!(tuned >= base);
    }
}
