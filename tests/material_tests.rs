//! Material command tests - client-side validation, confirmation rules,
//! and store-unreachable behavior. None of these need a live database:
//! validation and confirmation checks run before any connection is made,
//! and the connection tests point at a closed port.

mod common;

use common::fpt;
use predicates::prelude::*;

// ============================================================================
// Validation happens before the store is reached
// ============================================================================

#[test]
fn test_new_rejects_empty_name() {
    fpt()
        .args([
            "mat",
            "new",
            "--name",
            "",
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
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must not be empty"));
}

#[test]
fn test_new_rejects_empty_unit() {
    fpt()
        .args([
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
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit of measure must not be empty"));
}

#[test]
fn test_new_rejects_negative_price() {
    fpt()
        .args([
            "mat",
            "new",
            "--name",
            "Oak Plank",
            "--type",
            "1",
            "--price=-0.50",
            "--quantity",
            "100",
            "--min-quantity",
            "10",
            "--package-quantity",
            "5.0",
            "--unit",
            "pcs",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit price must not be negative"));
}

#[test]
fn test_new_rejects_negative_quantity() {
    fpt()
        .args([
            "mat",
            "new",
            "--name",
            "Oak Plank",
            "--type",
            "1",
            "--price",
            "12.50",
            "--quantity=-1",
            "--min-quantity",
            "10",
            "--package-quantity",
            "5.0",
            "--unit",
            "pcs",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "quantity in stock must not be negative",
        ));
}

#[test]
fn test_new_rejects_negative_min_quantity() {
    fpt()
        .args([
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
            "--min-quantity=-10",
            "--package-quantity",
            "5.0",
            "--unit",
            "pcs",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "minimum quantity must not be negative",
        ));
}

#[test]
fn test_new_rejects_negative_package_quantity() {
    fpt()
        .args([
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
            "--package-quantity=-5.0",
            "--unit",
            "pcs",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "package quantity must not be negative",
        ));
}

// ============================================================================
// Non-interactive invocations never prompt
// ============================================================================

#[test]
fn test_new_without_fields_requires_terminal() {
    fpt()
        .args(["mat", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing fields"));
}

#[test]
fn test_delete_requires_confirmation_flag() {
    fpt()
        .args(["mat", "delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation required"));
}

#[test]
fn test_edit_requires_id() {
    fpt()
        .args(["mat", "edit", "--name", "Oak Plank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("material id required"));
}

#[test]
fn test_edit_with_no_changes_is_rejected() {
    fpt()
        .args(["mat", "edit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_usage_requires_id() {
    fpt()
        .args(["mat", "usage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("material id required"));
}

// ============================================================================
// Store errors are reported, not swallowed
// ============================================================================

#[test]
fn test_list_reports_unreachable_store() {
    fpt()
        .args(["--host", "127.0.0.1", "--port", "1", "mat", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not connect to the database at 127.0.0.1:1",
        ));
}

#[test]
fn test_valid_new_reports_unreachable_store() {
    let mut args = common::valid_new_args();
    args.extend(["--host", "127.0.0.1", "--port", "1"]);
    fpt()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not connect to the database at 127.0.0.1:1",
        ));
}

#[test]
fn test_confirmed_delete_reports_unreachable_store() {
    fpt()
        .args([
            "--host",
            "127.0.0.1",
            "--port",
            "1",
            "mat",
            "delete",
            "3",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not connect to the database at 127.0.0.1:1",
        ));
}
