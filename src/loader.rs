//! Host-side loading of documents and keyword catalogs
//!
//! Formats are picked by extension: `.json` or `.toml`.

use crate::config::{string_entries, KeywordCatalog, DEFAULT_AUDIENCE};
use crate::error::{LoadError, LoadResult};
use crate::models::ContentDocument;
use std::path::Path;

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> LoadResult<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn read(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a `ContentDocument`. Missing or null fields become empty.
pub fn load_document(path: &Path) -> LoadResult<ContentDocument> {
    let format = format_of(path)?;
    let content = read(path)?;
    let document = match format {
        Format::Json => serde_json::from_str(&content)?,
        Format::Toml => toml::from_str(&content)?,
    };
    Ok(document)
}

/// Load a keyword catalog.
///
/// A bare JSON array of phrases is accepted as the default audience.
pub fn load_catalog(path: &Path) -> LoadResult<KeywordCatalog> {
    let format = format_of(path)?;
    let content = read(path)?;
    match format {
        Format::Toml => Ok(toml::from_str(&content)?),
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            match value {
                serde_json::Value::Array(entries) => {
                    let phrases = string_entries(DEFAULT_AUDIENCE, entries);
                    Ok(KeywordCatalog::from_phrases(phrases))
                }
                other => Ok(serde_json::from_value(other)?),
            }
        }
    }
}
