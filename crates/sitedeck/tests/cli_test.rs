//! Integration tests for the `sitedeck` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live platform API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `sitedeck` binary with env isolation.
///
/// Clears all `SITEDECK_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn sitedeck_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("sitedeck");
    cmd.env("HOME", "/tmp/sitedeck-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/sitedeck-cli-test-nonexistent")
        .env_remove("SITEDECK_PROFILE")
        .env_remove("SITEDECK_HOST")
        .env_remove("SITEDECK_SESSION_TOKEN")
        .env_remove("SITEDECK_OUTPUT")
        .env_remove("SITEDECK_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = sitedeck_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("Usage"),
        "Expected 'Usage' in output:\n{text}"
    );
}

#[test]
fn test_help_flag() {
    sitedeck_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("static-site")
            .and(predicate::str::contains("sites"))
            .and(predicate::str::contains("builds"))
            .and(predicate::str::contains("orgs")),
    );
}

#[test]
fn test_version_flag() {
    sitedeck_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitedeck"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    sitedeck_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    sitedeck_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    sitedeck_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = sitedeck_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_sites_list_no_config() {
    sitedeck_cmd()
        .args(["sites", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    sitedeck_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_use_unknown_profile() {
    let output = sitedeck_cmd()
        .args(["config", "use", "nonexistent"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4), "Expected exit code 4");
    let text = combined_output(&output);
    assert!(
        text.contains("nonexistent"),
        "Expected error naming the missing profile:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = sitedeck_cmd()
        .args(["--output", "invalid", "sites", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing host config, not about argument parsing.
    sitedeck_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--yes",
            "--timeout",
            "60",
            "sites",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_sites_subcommands_exist() {
    sitedeck_cmd()
        .args(["sites", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("branch-config")),
        );
}

#[test]
fn test_builds_subcommands_exist() {
    sitedeck_cmd()
        .args(["builds", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("restart"))
                .and(predicate::str::contains("logs"))
                .and(predicate::str::contains("tasks")),
        );
}

#[test]
fn test_orgs_subcommands_exist() {
    sitedeck_cmd()
        .args(["orgs", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("members")
                .and(predicate::str::contains("invite"))
                .and(predicate::str::contains("roles")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    sitedeck_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-token")),
        );
}

#[test]
fn test_sites_add_requires_owner_and_repository() {
    let output = sitedeck_cmd().args(["sites", "add"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("--owner") || text.contains("--repository"),
        "Expected error about required flags:\n{text}"
    );
}
