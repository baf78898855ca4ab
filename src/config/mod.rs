//! Configuration module for contentscore
//!
//! This module handles:
//! - Engine configuration (contentscore.toml)
//! - Rule enable/severity overrides
//! - Scoring and remediation tuning
//! - The keyword catalog handed to remediation
//! - CLI defaults

mod catalog;
mod engine_config;

pub use catalog::{KeywordCatalog, DEFAULT_AUDIENCE};
pub(crate) use catalog::string_entries;
pub use engine_config::{
    CliDefaults,
    EngineConfig,
    ReadabilityConfig,
    RemediationConfig,
    RuleOverride,
    ScoringConfig,
    load_config_file,
    load_engine_config,
    normalize_rule_name,
    CONFIG_FILE_NAMES,
    MAX_TECHNICAL_BONUS,
};
