//! Config command tests - starter file creation and precedence of flags,
//! environment variables, and the config file

mod common;

use common::fpt;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_init_writes_starter_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");

    fpt()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized config"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("host: localhost"));
    assert!(content.contains("port: 5432"));
}

#[test]
fn test_config_init_does_not_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "host: keep-me\n").unwrap();

    fpt()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "host: keep-me\n");
}

#[test]
fn test_config_init_force_overwrites() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "host: keep-me\n").unwrap();

    fpt()
        .args(["config", "init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized config"));

    assert!(fs::read_to_string(&path).unwrap().contains("host: localhost"));
}

#[test]
fn test_config_show_defaults() {
    fpt()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("host: localhost"))
        .stdout(predicate::str::contains("port: 5432"))
        .stdout(predicate::str::contains("database: production"))
        .stdout(predicate::str::contains("user: postgres"))
        .stdout(predicate::str::contains("password: (none)"));
}

#[test]
fn test_config_show_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "host: db.internal\nport: 5433\n").unwrap();

    fpt()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("host: db.internal"))
        .stdout(predicate::str::contains("port: 5433"));
}

#[test]
fn test_flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "host: db.internal\nport: 5433\n").unwrap();

    fpt()
        .args(["config", "show", "--host", "flag-host", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("host: flag-host"))
        .stdout(predicate::str::contains("port: 5433"));
}

#[test]
fn test_env_vars_supply_connection_settings() {
    fpt()
        .args(["config", "show"])
        .env("FPT_PG_HOST", "env-host")
        .env("FPT_PG_PORT", "5444")
        .assert()
        .success()
        .stdout(predicate::str::contains("host: env-host"))
        .stdout(predicate::str::contains("port: 5444"));
}

#[test]
fn test_password_is_masked_in_show_output() {
    fpt()
        .args(["config", "show"])
        .env("FPT_PG_PASSWORD", "hunter2")
        .assert()
        .success()
        .stdout(predicate::str::contains("password: ***"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_missing_explicit_config_file_fails() {
    fpt()
        .args(["config", "show", "--config", "/nonexistent/fpt.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
