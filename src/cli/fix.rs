//! Fix command implementation
//!
//! Runs remediate/analyze rounds on one document and writes the revised
//! document as JSON.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::{EngineConfig, KeywordCatalog};
use crate::engine::Engine;
use crate::loader::{load_catalog, load_document};

/// Run the fix command
pub fn run(
    config: &EngineConfig,
    file: &Path,
    catalog_path: Option<&Path>,
    audience: Option<&str>,
    rounds: usize,
    output_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let document = load_document(file)
        .with_context(|| format!("Failed to load document {}", file.display()))?;

    let catalog = match catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load keyword catalog {}", path.display()))?,
        None => KeywordCatalog::default(),
    };
    if catalog.is_empty() {
        tracing::warn!("Keyword catalog is empty; keywords will not be added");
    } else if !catalog.version.is_empty() {
        tracing::info!("Using keyword catalog version {}", catalog.version);
    }
    let phrases = catalog.lookup(audience);

    let engine = Engine::new(config);
    let outcome = engine.converge(&document, phrases, rounds);

    let trajectory = outcome
        .history
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    eprintln!(
        "\n{} {}  score {}  ({} round(s))",
        style("🔧").bold(),
        style(file.display()).cyan(),
        style(trajectory).bold(),
        outcome.rounds()
    );

    let summary = outcome.result.summary();
    if summary.total == 0 {
        eprintln!("{} Nothing left to fix", style("✓").green());
    } else {
        eprintln!("   {} suggestion(s) remain:", summary.total);
        for suggestion in &outcome.result.suggestions {
            let fix = if suggestion.is_auto_applicable() {
                ""
            } else {
                " (manual)"
            };
            eprintln!(
                "   - [{}] {}{}",
                suggestion.severity,
                suggestion.message,
                style(fix).dim()
            );
        }
    }

    if dry_run {
        eprintln!("{}", style("Dry run: document not written").dim());
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&outcome.document)
        .context("Failed to serialize revised document")?;
    match output_path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Revised document written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
