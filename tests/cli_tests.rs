//! CLI and basic command tests

mod common;

use common::fpt;
use predicates::prelude::*;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    fpt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("production inventory"));
}

#[test]
fn test_version_displays() {
    fpt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fpt"));
}

#[test]
fn test_unknown_command_fails() {
    fpt()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_mat_help_lists_subcommands() {
    fpt()
        .args(["mat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List materials"))
        .stdout(predicate::str::contains("Delete a material"))
        .stdout(predicate::str::contains("List the products that use a material"));
}

#[test]
fn test_prod_help_lists_subcommands() {
    fpt()
        .args(["prod", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List products"))
        .stdout(predicate::str::contains("List product types"));
}

#[test]
fn test_completions_generate() {
    fpt()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fpt"));
}

#[test]
fn test_invalid_port_rejected_by_parser() {
    fpt()
        .args(["--port", "not-a-port", "mat", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
