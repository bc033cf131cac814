//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The interactive session needs a real terminal, so we focus on
//! argument handling, configuration errors, and the behavior when no
//! terminal is attached.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Encrypted password vault for the terminal",
        ))
        .stdout(predicate::str::contains("--vault"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--no-banner"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn unknown_flag_fails() {
    passvault()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_config_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".passvault.toml")
        .write_str("not valid {{toml")
        .unwrap();

    passvault()
        .arg("--no-banner")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));

    tmp.child("passwords").assert(predicate::path::missing());
}

#[test]
fn missing_explicit_config_is_fatal() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["--no-banner", "--config", "nope.toml"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn without_a_terminal_no_vault_is_created() {
    let tmp = TempDir::new().unwrap();

    // Piped stdin is not a terminal, so the first passphrase prompt fails.
    passvault()
        .args(["--no-banner", "--vault"])
        .arg(tmp.child("passwords").path())
        .current_dir(tmp.path())
        .write_stdin("Abcdef1!\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt failed"));

    tmp.child("passwords").assert(predicate::path::missing());
}
