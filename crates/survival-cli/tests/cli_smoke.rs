//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `survival` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

const DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/passengers.csv");

fn cmd() -> Command {
    Command::cargo_bin("survival").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("tree"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("survival"));
}

// ---------------------------------------------------------------------------
// evaluate
// ---------------------------------------------------------------------------

#[test]
fn evaluate_no_data_errors() {
    cmd().arg("evaluate").assert().failure();
}

#[test]
fn evaluate_nonexistent_data_errors() {
    cmd()
        .args(["evaluate", "/nonexistent/passengers.csv"])
        .assert()
        .failure();
}

#[test]
fn evaluate_prints_report_table() {
    cmd()
        .args(["evaluate", DATA, "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hypothesis"))
        .stdout(predicate::str::contains("Everyone dies"))
        .stdout(predicate::str::contains("Females survive"))
        .stdout(predicate::str::contains("Unpruned tree"))
        .stdout(predicate::str::contains("Pruned tree"));
}

#[test]
fn evaluate_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");
    cmd()
        .args(["evaluate", DATA, "--seed", "3", "-o"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["name"], "Everyone dies");
}

#[test]
fn evaluate_rejects_bad_seed() {
    cmd()
        .args(["evaluate", DATA, "--seed", "minus-one"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

#[test]
fn tree_prints_pruning_record() {
    cmd()
        .args(["tree", DATA, "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pruned tree"))
        .stdout(predicate::str::contains("Pruning sequence leaf counts"));
}

#[test]
fn tree_unpruned_flag() {
    cmd()
        .args(["tree", DATA, "--seed", "5", "--unpruned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpruned tree"));
}
