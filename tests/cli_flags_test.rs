//! CLI flag contract tests
//!
//! Verifies that the `fix` and `init` commands and the global flags
//! (--config, --log-level) behave as documented.

use std::path::Path;
use std::process::{Command, Output};

fn contentscore_bin() -> String {
    env!("CARGO_BIN_EXE_contentscore").to_string()
}

fn setup_workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(
        dir.path().join("post.json"),
        r#"{"title": "Tea", "metaDescription": null, "body": "<p>Boil the water.</p>", "keywords": ["tea"]}"#,
    )
    .expect("write document");
    std::fs::write(
        dir.path().join("catalog.toml"),
        r#"version = "2024-06"

[audiences]
default = ["green tea", "black tea", "herbal tea", "tea pot"]
experts = ["gyokuro", "sencha", "matcha", "hojicha"]
"#,
    )
    .expect("write catalog");
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(contentscore_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run contentscore")
}

fn score_of(dir: &Path, file: &str) -> u64 {
    let out = run(dir, &["analyze", file, "-f", "json"]);
    let parsed: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("analyze JSON output");
    parsed["score"]["total"].as_u64().expect("total")
}

#[test]
fn test_fix_writes_improved_document() {
    let dir = setup_workspace();
    let out = run(
        dir.path(),
        &["fix", "post.json", "--catalog", "catalog.toml", "-o", "fixed.json"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let fixed: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("fixed.json")).expect("fixed document"),
    )
    .expect("fixed JSON");
    let keywords: Vec<&str> = fixed["keywords"]
        .as_array()
        .expect("keywords")
        .iter()
        .filter_map(|k| k.as_str())
        .collect();
    assert_eq!(keywords, vec!["tea", "green tea", "black tea", "herbal tea", "tea pot"]);

    assert!(score_of(dir.path(), "fixed.json") > score_of(dir.path(), "post.json"));
}

#[test]
fn test_fix_audience() {
    let dir = setup_workspace();
    let out = run(
        dir.path(),
        &["fix", "post.json", "--catalog", "catalog.toml", "--audience", "experts"],
    );
    assert!(out.status.success());

    let fixed: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout JSON");
    assert_eq!(fixed["keywords"][1], "gyokuro");
}

#[test]
fn test_fix_dry_run_writes_nothing() {
    let dir = setup_workspace();
    let out = run(
        dir.path(),
        &["fix", "post.json", "--dry-run", "-o", "fixed.json"],
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!dir.path().join("fixed.json").exists());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("score"));
    assert!(stderr.contains("Dry run"));
}

#[test]
fn test_fix_zero_rounds_keeps_document() {
    let dir = setup_workspace();
    let out = run(dir.path(), &["fix", "post.json", "--rounds", "0"]);
    assert!(out.status.success());
    let fixed: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout JSON");
    assert_eq!(fixed["title"], "Tea");
    assert_eq!(fixed["metaDescription"], "");
}

#[test]
fn test_init_then_analyze_uses_config() {
    let dir = setup_workspace();
    let out = run(dir.path(), &["init"]);
    assert!(out.status.success());
    let config_path = dir.path().join("contentscore.toml");
    assert!(config_path.exists());

    // disable the technical bonus and check it shows up in the score
    let config = std::fs::read_to_string(&config_path)
        .expect("read config")
        .replace("technical_bonus = 10", "technical_bonus = 0");
    std::fs::write(&config_path, config).expect("write config");

    let out = run(dir.path(), &["analyze", "post.json", "-f", "json"]);
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(parsed["score"]["technicalBonus"], 0);
}

#[test]
fn test_explicit_config_file() {
    let dir = setup_workspace();
    std::fs::write(
        dir.path().join("strict.json"),
        r#"{"rules": {"no-lists": {"enabled": false}}}"#,
    )
    .expect("write config");

    let out = run(
        dir.path(),
        &["--config", "strict.json", "analyze", "post.json", "-f", "json"],
    );
    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    let kinds: Vec<&str> = parsed["suggestions"]
        .as_array()
        .expect("suggestions")
        .iter()
        .filter_map(|s| s["kind"].as_str())
        .collect();
    assert!(!kinds.contains(&"no-lists"));
}

#[test]
fn test_broken_explicit_config_fails() {
    let dir = setup_workspace();
    std::fs::write(dir.path().join("bad.toml"), "[scoring\n").expect("write config");
    let out = run(dir.path(), &["--config", "bad.toml", "analyze", "post.json"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad.toml"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let dir = setup_workspace();
    let out = run(dir.path(), &["--log-level", "loud", "analyze", "post.json"]);
    assert!(!out.status.success());
}
