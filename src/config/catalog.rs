//! Keyword catalog: the host-supplied, versioned lookup table of candidate
//! keyword phrases, ranked per audience.
//!
//! ```toml
//! version = "2024-06"
//!
//! [audiences]
//! default = ["coffee grinder", "espresso machine", "latte art"]
//! beginners = ["how to make espresso", "coffee basics"]
//! ```
//!
//! Entries that are not strings (or are blank) are dropped on load rather
//! than failing the whole catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Audience used when no audience is requested or the requested one is missing
pub const DEFAULT_AUDIENCE: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    #[serde(default)]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_audiences")]
    pub audiences: IndexMap<String, Vec<String>>,
}

fn lenient_audiences<'de, D>(deserializer: D) -> Result<IndexMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(audience, entries)| {
            let phrases = string_entries(&audience, entries);
            (audience, phrases)
        })
        .collect())
}

/// Keep string entries, drop everything else with a warning
pub(crate) fn string_entries(audience: &str, entries: Vec<serde_json::Value>) -> Vec<String> {
    let total = entries.len();
    let phrases: Vec<String> = entries
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
        .collect();
    if phrases.len() < total {
        warn!(
            "Ignored {} malformed keyword catalog entries for audience '{}'",
            total - phrases.len(),
            audience
        );
    }
    phrases
}

impl KeywordCatalog {
    /// Catalog with a single default audience
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut audiences = IndexMap::new();
        audiences.insert(
            DEFAULT_AUDIENCE.to_string(),
            phrases.into_iter().map(Into::into).collect(),
        );
        Self {
            version: String::new(),
            audiences,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Ranked phrases for an audience.
    ///
    /// Falls back to the default audience, then to the first audience
    /// listed, then to an empty list.
    pub fn lookup(&self, audience: Option<&str>) -> &[String] {
        audience
            .and_then(|a| self.audiences.get(a))
            .or_else(|| self.audiences.get(DEFAULT_AUDIENCE))
            .or_else(|| self.audiences.values().next())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.audiences.values().all(Vec::is_empty)
    }
}
