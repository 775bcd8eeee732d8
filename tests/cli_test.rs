// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the gears CLI

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gears() -> Command {
    let mut cmd = Command::cargo_bin("gears").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test basic help command
#[test]
fn test_help_command() {
    gears()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lathe change-gear calculator"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("chart"));
}

#[test]
fn test_version_command() {
    gears()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gears"));
}

#[test]
fn test_search_table() {
    gears()
        .args(["search", "20tpi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Gear A | Gear B | Gear C | Gear D | Actual TPI",
        ))
        .stdout(predicate::str::contains("ANY"))
        .stdout(predicate::str::contains("48"))
        .stdout(predicate::str::contains("Actual Pitch").not());
}

#[test]
fn test_search_json() {
    let output = gears()
        .args(["search", "1mm", "--leadscrew", "metric", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["target"]["kind"], "pitch");
    let solutions = doc["solutions"].as_array().unwrap();
    assert_eq!(solutions.len(), 4);
    assert_eq!(solutions[0]["gears"], serde_json::json!([20, null, null, 30]));
}

#[test]
fn test_search_without_solutions() {
    gears()
        .args(["search", "1mm", "-l", "metric", "-g", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ERROR: Could not find any gear combinations that work.",
        ));
}

#[test]
fn test_search_rejects_bare_number() {
    gears()
        .args(["search", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit suffix"));
}

#[test]
fn test_too_many_gear_lists() {
    gears()
        .args(["search", "1mm", "-g", "20", "-g", "30", "-g", "40", "-g", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At most 3 gear lists"));
}

#[test]
fn test_chart_table() {
    gears()
        .args(["chart", "8tpi", "20tpi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target"))
        .stdout(predicate::str::contains("8tpi"))
        .stdout(predicate::str::contains("20tpi"));
}

#[test]
fn test_chart_json_marks_missing_rows() {
    let output = gears()
        .args(["chart", "-l", "metric", "-f", "json", "--", "1mm", "-1mm"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = doc.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["solution"]["gears"], serde_json::json!([20, null, null, 30]));
    assert!(rows[1]["solution"].is_null());
}

#[test]
fn test_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("nested").join("settings.json");
    let file = file.to_str().unwrap();

    gears()
        .args(["settings", "save", "mini", "--settings", file])
        .args(["-g", "20,25,30", "-l", "metric"])
        .assert()
        .success();

    gears()
        .args(["settings", "list", "--settings", file])
        .assert()
        .success()
        .stdout(predicate::str::diff("mini\n"));

    gears()
        .args(["settings", "show", "mini", "--settings", file])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"metric\""))
        .stdout(predicate::str::contains("20,25,30"));

    let output = gears()
        .args(["search", "1mm", "-f", "json", "--profile", "mini", "--settings", file])
        .output()
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["solutions"].as_array().unwrap().len(), 1);

    gears()
        .args(["settings", "remove", "mini", "--settings", file])
        .assert()
        .success();

    gears()
        .args(["settings", "list", "--settings", file])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_profile() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("settings.json");

    gears()
        .args(["search", "1mm", "--profile", "missing", "--settings"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved settings named \"missing\""));
}
