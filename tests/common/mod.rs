//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;

/// Helper to get an fpt command with the host environment kept out of
/// config resolution
pub fn fpt() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("fpt"));
    for var in [
        "FPT_PG_HOST",
        "FPT_PG_PORT",
        "FPT_PG_DATABASE",
        "FPT_PG_USER",
        "FPT_PG_PASSWORD",
        "FPT_CONFIG",
        "HOME",
        "XDG_CONFIG_HOME",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// The flags for a fully specified, valid material draft
pub fn valid_new_args() -> Vec<&'static str> {
    vec![
        "mat",
        "new",
        "--name",
        "Oak Plank",
        "--type",
        "1",
        "--price",
        "12.50",
        "--quantity",
        "100",
        "--min-quantity",
        "10",
        "--package-quantity",
        "5.0",
        "--unit",
        "pcs",
    ]
}
