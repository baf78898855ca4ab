//! Errors for host-side loading of documents, catalogs and configs
//!
//! The scoring engine itself has no error type: every input maps to a
//! well-defined metric. Only reading data from disk can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported file format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

pub type LoadResult<T> = Result<T, LoadError>;
