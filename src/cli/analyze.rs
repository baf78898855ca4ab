//! Analyze command implementation
//!
//! 1. Load every document (in parallel)
//! 2. Run `Engine::analyze` on each
//! 3. Render with the selected reporter
//! 4. Apply the `--fail-under` threshold

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::loader::load_document;
use crate::reporters::{self, DocumentReport};

use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Run the analyze command
pub fn run(
    config: &EngineConfig,
    files: &[PathBuf],
    format: &str,
    output_path: Option<&Path>,
    explain_score: bool,
    fail_under: Option<u32>,
) -> Result<()> {
    let start = Instant::now();
    let engine = Engine::new(config);

    let reports = analyze_files(&engine, files, explain_score)?;
    info!(
        "Analyzed {} document(s) in {:.2?}",
        reports.len(),
        start.elapsed()
    );

    let output = reporters::report(&reports, format)?;
    if let Some(path) = output_path {
        std::fs::write(path, &output)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        // stderr keeps stdout clean for piping
        eprintln!(
            "\n📄 Report written to: {}",
            style(path.display()).cyan()
        );
    } else {
        if format != "json" {
            println!();
        }
        println!("{}", output);
    }

    check_fail_threshold(fail_under, &reports)
}

/// Load and analyze `files` in parallel, keeping input order
fn analyze_files(
    engine: &Engine,
    files: &[PathBuf],
    explain_score: bool,
) -> Result<Vec<DocumentReport>> {
    use rayon::prelude::*;

    files
        .par_iter()
        .map(|path| {
            let document = load_document(path)
                .with_context(|| format!("Failed to load document {}", path.display()))?;
            let result = engine.analyze(&document);
            let mut report = DocumentReport::new(path.display().to_string(), result);
            if explain_score {
                let explanation = engine
                    .scorer()
                    .explain(&report.result.metrics, &report.result.score);
                report = report.with_explanation(explanation);
            }
            Ok(report)
        })
        .collect()
}

/// Exit with code 1 if any document scores below the threshold
fn check_fail_threshold(fail_under: Option<u32>, reports: &[DocumentReport]) -> Result<()> {
    let Some(threshold) = fail_under else {
        return Ok(());
    };
    let failing: Vec<&DocumentReport> = reports
        .iter()
        .filter(|r| r.result.score.total < threshold)
        .collect();
    if !failing.is_empty() {
        for report in &failing {
            eprintln!(
                "{} {} scored {} (below {})",
                style("✗").red(),
                report.source,
                report.result.score.total,
                threshold
            );
        }
        eprintln!("Failing due to --fail-under={} threshold", threshold);
        std::process::exit(1);
    }
    Ok(())
}
