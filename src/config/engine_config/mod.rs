//! Engine configuration support
//!
//! Loads configuration from `contentscore.toml` or `.contentscorerc.json`
//! in a directory. Every field has a default, so a missing or partial file
//! is fine.
//!
//! # Configuration Format
//!
//! ```toml
//! # contentscore.toml
//!
//! [scoring]
//! technical_bonus = 10            # 0..=10
//! strict_keyword_matching = false
//!
//! [readability]
//! extra_simple_words = ["espresso", "barista"]
//!
//! [remediation]
//! subject = "Home Espresso"
//! target_keyword_count = 5
//! target_word_count = 500
//!
//! [rules.no-lists]
//! enabled = false
//!
//! [rules.weak-headings]
//! severity = "low"
//!
//! [defaults]
//! format = "text"
//! fail_under = 70
//! ```

use crate::error::{LoadError, LoadResult};
use crate::models::{Severity, SuggestionKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// File names searched, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["contentscore.toml", ".contentscorerc.json"];

/// Upper bound of the synthetic technical contribution
pub const MAX_TECHNICAL_BONUS: u32 = 10;

/// Engine configuration loaded from contentscore.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Readability tuning
    #[serde(default)]
    pub readability: ReadabilityConfig,

    /// Remediation templates and targets
    #[serde(default)]
    pub remediation: RemediationConfig,

    /// Per-rule overrides, keyed by rule name (e.g. `no-lists`)
    #[serde(default)]
    pub rules: HashMap<String, RuleOverride>,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Scoring configuration for the composite score
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Fixed technical-quality contribution (default: 10, capped at 10)
    #[serde(default = "default_technical_bonus")]
    pub technical_bonus: u32,

    /// Count keyword occurrences on word boundaries only (default: false)
    #[serde(default)]
    pub strict_keyword_matching: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            technical_bonus: default_technical_bonus(),
            strict_keyword_matching: false,
        }
    }
}

impl ScoringConfig {
    /// Technical bonus clamped to its cap
    pub fn effective_technical_bonus(&self) -> u32 {
        self.technical_bonus.min(MAX_TECHNICAL_BONUS)
    }
}

fn default_technical_bonus() -> u32 {
    MAX_TECHNICAL_BONUS
}

/// Readability tuning
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReadabilityConfig {
    /// Words added to the simple-word allowlist (domain terms)
    #[serde(default)]
    pub extra_simple_words: Vec<String>,
}

/// Remediation targets
#[derive(Debug, Clone, Deserialize)]
pub struct RemediationConfig {
    /// Subject entity name used in templates (derived from the document if unset)
    #[serde(default)]
    pub subject: Option<String>,

    /// Keyword count the keyword transform fills up to (default: 5)
    #[serde(default = "default_target_keyword_count")]
    pub target_keyword_count: usize,

    /// Word count the content transform extends the body to (default: 500)
    #[serde(default = "default_target_word_count")]
    pub target_word_count: usize,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            subject: None,
            target_keyword_count: default_target_keyword_count(),
            target_word_count: default_target_word_count(),
        }
    }
}

fn default_target_keyword_count() -> usize {
    5
}
fn default_target_word_count() -> usize {
    500
}

/// Configuration override for a single suggestion rule
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuleOverride {
    /// Whether the rule is enabled (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Override the rule's default severity
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Exit non-zero when any score is below this total
    #[serde(default)]
    pub fail_under: Option<u32>,
}

impl EngineConfig {
    fn rule_override(&self, kind: SuggestionKind) -> Option<&RuleOverride> {
        self.rules.get(kind.as_str()).or_else(|| {
            self.rules
                .iter()
                .find(|(name, _)| normalize_rule_name(name) == kind.as_str())
                .map(|(_, o)| o)
        })
    }

    /// Check if a rule is enabled (defaults to true if not specified)
    pub fn is_rule_enabled(&self, kind: SuggestionKind) -> bool {
        self.rule_override(kind)
            .and_then(|o| o.enabled)
            .unwrap_or(true)
    }

    /// Severity override for a rule (if any)
    pub fn severity_override(&self, kind: SuggestionKind) -> Option<Severity> {
        self.rule_override(kind).and_then(|o| o.severity)
    }

    /// Rule names in the config that match no known rule
    pub fn unknown_rules(&self) -> Vec<String> {
        let known: Vec<&str> = crate::suggestions::RULE_ORDER
            .iter()
            .map(|k| k.as_str())
            .collect();
        let mut unknown: Vec<String> = self
            .rules
            .keys()
            .filter(|name| !known.contains(&normalize_rule_name(name).as_str()))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }
}

/// Load engine configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `contentscore.toml`
/// 2. `.contentscorerc.json`
///
/// Returns default configuration if no config file is found or the file
/// cannot be parsed.
pub fn load_engine_config(dir: &Path) -> EngineConfig {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded engine config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No engine config found, using defaults");
    EngineConfig::default()
}

/// Load configuration from an explicit TOML or JSON file
pub fn load_config_file(path: &Path) -> LoadResult<EngineConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Normalize a rule name for config lookup.
/// Converts various formats to kebab-case for matching.
pub fn normalize_rule_name(name: &str) -> String {
    // ShortContent -> short-content
    // NoListsRule -> no-lists
    // short_content -> short-content

    let mut result = String::new();
    let chars: Vec<char> = name.trim().chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_is_lower = i > 0 && chars[i - 1].is_lowercase();
            let is_acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && i + 1 < chars.len()
                && chars[i + 1].is_lowercase();

            if prev_is_lower || is_acronym_end {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else if *c == '_' || *c == ' ' {
            result.push('-');
        } else {
            result.push(*c);
        }
    }

    result.trim_end_matches("-rule").to_string()
}

#[cfg(test)]
mod tests;
