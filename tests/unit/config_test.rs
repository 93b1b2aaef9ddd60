//! Tests for configuration management

use std::fs;

use nonsense::config::{BulkConfig, Config, ConfigError, FilterConfig, ServerConfig};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.server, ServerConfig { host: "127.0.0.1".to_string(), port: 3000 });
    assert_eq!(config.bulk, BulkConfig { max_items: 10_000, workers: 0 });
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_filters_match_standard_battery() {
    let built = FilterConfig::default().build();
    let standard = nonsense::Classifier::standard();
    assert_eq!(built.filter_names(), standard.filter_names());
}

#[test]
fn test_entries_list_every_filter() {
    let mut filters = FilterConfig::default();
    filters.pure_punctuation.enabled = false;

    let entries = filters.entries();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0].name, "Trigram Filter");
    assert_eq!(entries[0].settings, "min_unique_ratio=0.35, min_trigrams=8");
    assert!(!entries[6].enabled);
    assert!(entries[6].settings.is_empty());
}

// =============================================================================
// TOML
// =============================================================================

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: Config = toml::from_str(
        r#"
[filters.character_repetition]
max_run = 2

[filters.word_repetition]
enabled = false

[server]
port = 8080
"#,
    )
    .unwrap();

    assert_eq!(config.filters.character_repetition.max_run, 2);
    assert!(config.filters.character_repetition.enabled);
    assert!(!config.filters.word_repetition.enabled);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.bulk, BulkConfig::default());
}

#[test]
fn test_disabled_filter_is_not_built() {
    let mut filters = FilterConfig::default();
    filters.trigram.enabled = false;
    filters.dominant_character.enabled = false;

    let classifier = filters.build();
    assert_eq!(classifier.len(), 5);
    assert!(!classifier.filter_names().contains(&"Trigram Filter"));

    let result = classifier.classify("aaaaaaaaaa");
    let names: Vec<&str> = result.flagged_by.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Character Repetition Filter"]);
}

#[test]
fn test_thresholds_reach_the_filters() {
    let mut config = Config::default();
    config.filters.character_repetition.max_run = 2;

    let result = config.classifier().classify("booo");
    assert!(result.is_flagged_by("Character Repetition Filter"));
}

#[test]
fn test_toml_round_trip() {
    let mut config = Config::default();
    config.filters.word_length.max_average = 20.0;
    config.bulk.workers = 2;

    let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

// =============================================================================
// FILES
// =============================================================================

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.server.port = 9000;
    config.save(&path).unwrap();

    assert!(path.exists());
    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded.server.port, 9000);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(Some(&temp.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[filters\nnot toml").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_rejects_out_of_range_percentage() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[filters.dominant_word]\nmax_percentage = 150.0\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("filters.dominant_word.max_percentage"));
}

#[test]
fn test_rejects_bad_trigram_ratio() {
    let mut config = Config::default();
    config.filters.trigram.min_unique_ratio = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_non_positive_word_length() {
    let mut config = Config::default();
    config.filters.word_length.max_average = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_zero_max_items() {
    let mut config = Config::default();
    config.bulk.max_items = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("bulk.max_items"));
}
