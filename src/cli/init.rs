//! Init command - write a starter contentscore.toml

use crate::config::CONFIG_FILE_NAMES;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub(crate) const DEFAULT_CONFIG: &str = r#"# contentscore configuration
# Every setting is optional; remove what you do not need.

[scoring]
# Fixed technical-quality contribution to the total (0-10)
technical_bonus = 10

# Count keyword occurrences on word boundaries only.
# Off by default: "cat" also matches inside "category".
strict_keyword_matching = false

[readability]
# Extra words that count as simple when scoring readability
extra_simple_words = []

[remediation]
# Topic name used by generated titles and sections
# (default: first keyword, then catalog, then title, then first heading)
# subject = "Home Espresso"

# Keywords to reach when adding from the catalog
target_keyword_count = 5

# Words to reach when expanding short content
target_word_count = 500

# Per-rule overrides: short-content, low-readability, few-keywords,
# weak-headings, missing-title, short-description, no-lists, keyword-stuffing
#
# [rules.no-lists]
# enabled = false
#
# [rules.weak-headings]
# severity = "low"

[defaults]
# Default output format (text, json, markdown)
format = "text"

# Fail `analyze` when any document scores below this
# fail_under = 70
"#;

/// Run the init command
pub fn run(path: &Path, force: bool) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!(
            "{} Config already exists at {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Score a document", style("contentscore analyze post.json").cyan());
    println!(
        "  {} Apply fixes",
        style("contentscore fix post.json --catalog keywords.json").cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_default_config_parses() {
        let config: EngineConfig = toml::from_str(DEFAULT_CONFIG).expect("parse default config");
        assert_eq!(config.scoring.technical_bonus, 10);
        assert_eq!(config.defaults.format.as_deref(), Some("text"));
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("contentscore.toml");
        std::fs::write(&path, "# mine\n").expect("write config");

        run(dir.path(), false).expect("init");
        assert_eq!(std::fs::read_to_string(&path).expect("read config"), "# mine\n");

        run(dir.path(), true).expect("init --force");
        assert_eq!(std::fs::read_to_string(&path).expect("read config"), DEFAULT_CONFIG);
    }
}
