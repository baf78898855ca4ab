use super::*;

#[test]
fn test_normalize_rule_name() {
    assert_eq!(normalize_rule_name("ShortContent"), "short-content");
    assert_eq!(normalize_rule_name("short_content"), "short-content");
    assert_eq!(normalize_rule_name("short-content"), "short-content");
    assert_eq!(normalize_rule_name("NoListsRule"), "no-lists");
    assert_eq!(normalize_rule_name("HTMLHeadings"), "html-headings");
}

#[test]
fn test_default_config() {
    let config = EngineConfig::default();

    assert_eq!(config.scoring.technical_bonus, 10);
    assert!(!config.scoring.strict_keyword_matching);
    assert!(config.readability.extra_simple_words.is_empty());
    assert_eq!(config.remediation.target_keyword_count, 5);
    assert_eq!(config.remediation.target_word_count, 500);
    assert!(config.remediation.subject.is_none());

    assert!(config.is_rule_enabled(SuggestionKind::NoLists));
    assert!(config.severity_override(SuggestionKind::NoLists).is_none());
}

#[test]
fn test_parse_toml_config() {
    let toml_content = r#"
[scoring]
technical_bonus = 4
strict_keyword_matching = true

[readability]
extra_simple_words = ["espresso", "crema"]

[remediation]
subject = "Home Espresso"
target_keyword_count = 6

[rules.no-lists]
enabled = false

[rules.WeakHeadings]
severity = "low"

[defaults]
format = "json"
fail_under = 75
"#;

    let config: EngineConfig = toml::from_str(toml_content).expect("parse engine config");

    assert_eq!(config.scoring.technical_bonus, 4);
    assert!(config.scoring.strict_keyword_matching);
    assert_eq!(config.readability.extra_simple_words, vec!["espresso", "crema"]);
    assert_eq!(config.remediation.subject.as_deref(), Some("Home Espresso"));
    assert_eq!(config.remediation.target_keyword_count, 6);
    assert_eq!(config.remediation.target_word_count, 500);

    assert!(!config.is_rule_enabled(SuggestionKind::NoLists));
    assert!(config.is_rule_enabled(SuggestionKind::WeakHeadings));
    assert_eq!(
        config.severity_override(SuggestionKind::WeakHeadings),
        Some(Severity::Low)
    );

    assert_eq!(config.defaults.format, Some("json".to_string()));
    assert_eq!(config.defaults.fail_under, Some(75));
    assert!(config.unknown_rules().is_empty());
}

#[test]
fn test_technical_bonus_is_capped() {
    let config: EngineConfig =
        toml::from_str("[scoring]\ntechnical_bonus = 40").expect("parse scoring config");
    assert_eq!(config.scoring.effective_technical_bonus(), MAX_TECHNICAL_BONUS);
}

#[test]
fn test_unknown_rules_reported() {
    let config: EngineConfig =
        toml::from_str("[rules.no-such-rule]\nenabled = false").expect("parse rules config");
    assert_eq!(config.unknown_rules(), vec!["no-such-rule".to_string()]);
}

#[test]
fn test_invalid_severity_is_error() {
    let result = toml::from_str::<EngineConfig>("[rules.no-lists]\nseverity = \"critical\"");
    assert!(result.is_err());
}

#[test]
fn test_load_prefers_toml() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(
        dir.path().join("contentscore.toml"),
        "[scoring]\ntechnical_bonus = 3\n",
    )
    .expect("write toml config");
    std::fs::write(
        dir.path().join(".contentscorerc.json"),
        r#"{"scoring": {"technical_bonus": 7}}"#,
    )
    .expect("write json config");

    let config = load_engine_config(dir.path());
    assert_eq!(config.scoring.technical_bonus, 3);
}

#[test]
fn test_load_json_config() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(
        dir.path().join(".contentscorerc.json"),
        r#"{"remediation": {"target_word_count": 800}}"#,
    )
    .expect("write json config");

    let config = load_engine_config(dir.path());
    assert_eq!(config.remediation.target_word_count, 800);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("contentscore.toml"), "[scoring\nbroken")
        .expect("write broken config");

    let config = load_engine_config(dir.path());
    assert_eq!(config.scoring.technical_bonus, 10);
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = load_engine_config(dir.path());
    assert!(config.rules.is_empty());
}
