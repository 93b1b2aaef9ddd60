//! Integration tests for config files and the `config` subcommand

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::{nonsense, nonsense_in};

#[test]
fn test_config_init_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf").join("nonsense.toml");

    nonsense()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[filters.trigram]"));
    assert!(content.contains("[server]"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonsense.toml");
    fs::write(&path, "[server]\nport = 1\n").unwrap();

    nonsense()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 1\n");

    nonsense()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[filters.trigram]"));
}

#[test]
fn test_config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[bulk]\nworkers = 2\n").unwrap();

    nonsense()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workers = 2"));
}

#[test]
fn test_local_config_changes_thresholds() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("nonsense.toml"),
        "[filters.character_repetition]\nmax_run = 2\n",
    )
    .unwrap();

    nonsense_in(&dir)
        .args(["check", "--strict", "booo"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Character Repetition Filter"));
}

#[test]
fn test_disabled_filter_is_not_listed_as_on() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("nonsense.toml"), "[filters.trigram]\nenabled = false\n").unwrap();

    let output = nonsense_in(&dir).args(["--json", "filters"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["filters"][0]["name"], "Trigram Filter");
    assert_eq!(json["filters"][0]["enabled"], false);
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[filters.trigram]\nmin_unique_ratio = 7.0\n").unwrap();

    nonsense()
        .arg("--config")
        .arg(&path)
        .args(["check", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_unique_ratio"));
}
