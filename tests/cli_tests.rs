//! Integration tests for the knightpath CLI
//!
//! These tests run the knightpath binary and check global flags, exit codes
//! and config handling.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for knightpath that ignores any user config
fn knightpath() -> Command {
    let mut cmd = cargo_bin_cmd!("knightpath");
    cmd.env(
        "KNIGHTPATH_CONFIG_DIR",
        std::env::temp_dir().join("knightpath-tests-no-config"),
    )
    .env_remove("KNIGHTPATH_CONFIG")
    .env_remove("KNIGHTPATH_LOG")
    .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    knightpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: knightpath"))
        .stdout(predicate::str::contains("moves"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("distances"));
}

#[test]
fn test_version_flag() {
    knightpath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("knightpath"));
}

#[test]
fn test_subcommand_help() {
    knightpath()
        .args(["path", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shortest knight path"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    knightpath()
        .args(["--format", "xml", "moves", "a1"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_square_exit_code_2() {
    knightpath().args(["moves", "z9"]).assert().code(2);
}

#[test]
fn test_off_board_square_exit_code_2() {
    knightpath()
        .args(["path", "a1", "9,9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("off the 8x8 board"));
}

#[test]
fn test_zero_max_nodes_exit_code_2() {
    knightpath()
        .args(["--max-nodes", "0", "path", "a1", "h8"])
        .assert()
        .code(2);
}

#[test]
fn test_budget_exceeded_exit_code_1() {
    knightpath()
        .args(["--max-nodes", "5", "path", "a1", "h8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("node budget of 5"));
}

#[test]
fn test_json_error_envelope() {
    let output = knightpath()
        .args(["--format", "json", "path", "a1", "8,0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "off_board");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_json_error_envelope_for_parse_failure() {
    let output = knightpath()
        .args(["--format", "json", "moves", "q7"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    knightpath()
        .args(["--quiet", "distances", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_sets_default_format() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    let output = knightpath()
        .arg("--config")
        .arg(&config)
        .args(["moves", "a1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["moves"].as_array().unwrap().len(), 2);
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    knightpath()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "moves", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Knight moves from a1"));
}

#[test]
fn test_config_dir_env_is_used() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[search]\nmax_nodes = 3\n",
    )
    .unwrap();

    knightpath()
        .env("KNIGHTPATH_CONFIG_DIR", dir.path())
        .args(["path", "a1", "h8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("node budget of 3"));
}

#[test]
fn test_max_nodes_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[search]\nmax_nodes = 3\n",
    )
    .unwrap();

    knightpath()
        .env("KNIGHTPATH_CONFIG_DIR", dir.path())
        .args(["--max-nodes", "64", "path", "a1", "h8"])
        .assert()
        .success();
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[search\n").unwrap();

    knightpath()
        .arg("--config")
        .arg(&config)
        .args(["moves", "a1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_config_with_invalid_values_exit_code_3() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");

    for content in ["format = \"yaml\"\n", "[search]\nmax_nodes = 0\n"] {
        fs::write(&config, content).unwrap();
        knightpath()
            .arg("--config")
            .arg(&config)
            .args(["moves", "a1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid config"));
    }
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();

    knightpath()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["moves", "a1"])
        .assert()
        .code(3);
}

#[test]
fn test_verbose_logs_to_stderr() {
    knightpath()
        .args(["--verbose", "path", "a1", "c2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("path found"));
}
