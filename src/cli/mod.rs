//! CLI command definitions and handlers
//!
//! The binary is a thin host around the engine: it reads documents and
//! catalogs from disk, hands them to `Engine` as plain data, and renders
//! or writes what comes back.

mod analyze;
mod fix;
mod init;

use crate::config::{load_config_file, load_engine_config, EngineConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate a score threshold (0-100)
fn parse_score(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n > 100 {
        Err("score threshold cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// contentscore - content quality scoring
#[derive(Parser, Debug)]
#[command(name = "contentscore")]
#[command(
    version,
    about = "Score written content against a fixed quality rubric and fix what fails",
    long_about = "contentscore measures length, structure, keyword use and readability of \
a document, combines them into a 0-100 score, and lists what to improve. \
The fix command applies automatic remediation until the score settles.",
    after_help = "\
Examples:
  contentscore analyze post.json                   Score one document
  contentscore analyze posts/*.json -f json        JSON output for scripting
  contentscore analyze post.json --fail-under 70   Exit code 1 below 70 (CI mode)
  contentscore fix post.json --catalog kw.json     Remediate using a keyword catalog
  contentscore init                                Write a contentscore.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file, or directory to look for contentscore.toml in (default: current directory)
    #[arg(long, global = true, env = "CONTENTSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a contentscore.toml config file with example settings
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Analyze documents and report score and suggestions
    #[command(after_help = "\
Examples:
  contentscore analyze post.json                      Text report on stdout
  contentscore analyze a.json b.toml -f markdown -o report.md
  contentscore analyze post.json --explain-score      Show full scoring breakdown
  contentscore analyze post.json --strict-keywords    Count keywords on word boundaries")]
    Analyze {
        /// Documents to analyze (.json or .toml)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Explain the scoring formula with full breakdown
        #[arg(long)]
        explain_score: bool,

        /// Exit with code 1 if any document scores below this
        #[arg(long, value_parser = parse_score)]
        fail_under: Option<u32>,

        /// Count keyword occurrences on word boundaries only
        #[arg(long)]
        strict_keywords: bool,
    },

    /// Apply automatic fixes to a document until its score settles
    #[command(after_help = "\
Examples:
  contentscore fix post.json --dry-run                 Show the score trajectory only
  contentscore fix post.json --catalog kw.toml --audience beginners -o fixed.json")]
    Fix {
        /// Document to fix (.json or .toml)
        file: PathBuf,

        /// Keyword catalog (.json or .toml) used to add keywords
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Catalog audience to draw keywords from
        #[arg(long)]
        audience: Option<String>,

        /// Maximum remediate/analyze rounds
        #[arg(long, default_value = "3")]
        rounds: usize,

        /// Where to write the revised document as JSON (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Report the score trajectory without writing the document
        #[arg(long)]
        dry_run: bool,
    },
}

/// Resolve the engine config from `--config`.
///
/// An explicit file must parse; a directory (or nothing) falls back to
/// defaults when no usable config is found.
pub(crate) fn resolve_config(config: Option<&Path>) -> Result<EngineConfig> {
    match config {
        Some(path) if path.is_file() => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        Some(dir) => Ok(load_engine_config(dir)),
        None => Ok(load_engine_config(Path::new("."))),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),

        Commands::Analyze {
            files,
            format,
            output,
            explain_score,
            fail_under,
            strict_keywords,
        } => {
            let mut config = resolve_config(cli.config.as_deref())?;
            if strict_keywords {
                config.scoring.strict_keyword_matching = true;
            }
            let format = format
                .or_else(|| config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            let fail_under = fail_under.or(config.defaults.fail_under);

            analyze::run(
                &config,
                &files,
                &format,
                output.as_deref(),
                explain_score,
                fail_under,
            )
        }

        Commands::Fix {
            file,
            catalog,
            audience,
            rounds,
            output,
            dry_run,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            fix::run(
                &config,
                &file,
                catalog.as_deref(),
                audience.as_deref(),
                rounds,
                output.as_deref(),
                dry_run,
            )
        }
    }
}
