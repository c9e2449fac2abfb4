//! Configuration tests
//!
//! Guard the file format: whatever `to_toml()` writes must parse back into the
//! same effective configuration.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("config should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "light".to_string();
    config.toast_timeout_secs = 9;
    config.source.kind = SourceKind::Http;
    config.source.api_url = "https://immo.example.com/api".to_string();
    config.source.failure_rate = 0.25;
    config.source.latency_ms = 0;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);

    assert_eq!(resolved.theme, "light");
    assert_eq!(resolved.toast_timeout_secs, 9);
    assert_eq!(resolved.source.kind, SourceKind::Http);
    assert_eq!(resolved.source.api_url, "https://immo.example.com/api");
    assert_eq!(resolved.source.failure_rate, 0.25);
    assert_eq!(resolved.source.latency_ms, 0);
    assert_eq!(resolved.logging.level, "debug");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(parse(""), no_env);
    let defaults = Config::default();

    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.toast_timeout_secs, 5);
    assert_eq!(config.source.kind, SourceKind::Fixture);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "light"

[source]
kind = "fixture"
failure_rate = 0.1

[logging]
level = "warn"
"#,
    );
    let env = env_from(&[
        ("IMMO_THEME", "terminal"),
        ("IMMO_SOURCE", "http"),
        ("IMMO_API_URL", "http://10.0.0.2:8000"),
        ("IMMO_FAILURE_RATE", "1"),
        ("IMMO_LOG_LEVEL", "trace"),
    ]);

    let config = Config::resolve(file, env);

    assert_eq!(config.theme, "terminal");
    assert_eq!(config.source.kind, SourceKind::Http);
    assert_eq!(config.source.api_url, "http://10.0.0.2:8000");
    assert_eq!(config.source.failure_rate, 1.0);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_unparseable_env_number_falls_back_to_file() {
    let file = parse("[source]\nfailure_rate = 0.5\n");
    let config = Config::resolve(file, env_from(&[("IMMO_FAILURE_RATE", "often")]));
    assert_eq!(config.source.failure_rate, 0.5);
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let file = parse("[source]\nkind = \"carrier-pigeon\"\n[logging]\nfile_rotation = \"weekly\"\n");
    let config = Config::resolve(file, no_env);
    assert_eq!(config.source.kind, SourceKind::Fixture);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_malformed_file_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("theme = light");
    assert!(parsed.is_err());
}
