//! End-to-end runs of the `callscope` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/calls")
        .join(name)
}

/// Run with an isolated HOME and config root so no real config leaks in.
fn callscope(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_callscope"))
        .env("HOME", home.path())
        .env_remove("USERPROFILE")
        .env_remove("CALLSCOPE_LOG")
        .args(["--config-root", &home.path().display().to_string()])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn simulate_prints_projection() {
    let home = TempDir::new().unwrap();
    let out = callscope(
        &home,
        &["simulate", "--drop-rate", "10", "--agents", "10", "--aht", "5"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Projected calls handled: 680"));
    assert!(stdout.contains("Projected dropped calls: 68"));
}

#[test]
fn degenerate_scenario_reports_error_code() {
    let home = TempDir::new().unwrap();
    let out = callscope(
        &home,
        &["simulate", "--drop-rate", "10", "--agents", "10", "--aht", "0", "--acw", "0"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[SCENARIO_ERROR]"));
}

#[test]
fn analyze_writes_every_export() {
    let home = TempDir::new().unwrap();
    let exports = home.path().join("exports");
    let file = fixture("mapped_calls.csv");
    let out = callscope(
        &home,
        &[
            "analyze",
            &file.display().to_string(),
            "--date",
            "Call Date",
            "--time",
            "Call Time",
            "--agent",
            "Agent Name",
            "--outcome",
            "Disposition",
            "--talk-time",
            "Talk Seconds",
            "--talk-time-unit",
            "seconds",
            "--out",
            &exports.display().to_string(),
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total Calls: 12"));

    for name in [
        "call_records",
        "agent_performance",
        "hourly",
        "daily",
        "anomalies",
        "insights_matrix",
        "alerts",
    ] {
        assert!(exports.join(format!("{name}.csv")).exists(), "missing {name}.csv");
    }
}

#[test]
fn unknown_column_is_reported() {
    let home = TempDir::new().unwrap();
    let file = fixture("mapped_calls.csv");
    let out = callscope(
        &home,
        &[
            "analyze",
            &file.display().to_string(),
            "--date",
            "Timestamp",
            "--agent",
            "Agent Name",
            "--outcome",
            "Disposition",
            "--talk-time",
            "Talk Seconds",
        ],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[UNKNOWN_COLUMN]"));
}

#[test]
fn sample_path_and_extraction() {
    let home = TempDir::new().unwrap();
    let sample_csv = home.path().join("sample.csv");
    let source = fixture("sample_source.csv");

    let out = callscope(
        &home,
        &[
            "make-sample",
            &source.display().to_string(),
            "--out",
            &sample_csv.display().to_string(),
            "--rows",
            "12",
        ],
    );
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("with 12 rows"));

    let exports = home.path().join("sample-exports");
    let out = callscope(
        &home,
        &[
            "sample",
            &sample_csv.display().to_string(),
            "--out",
            &exports.display().to_string(),
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Total Calls: 12"));
}

#[test]
fn agent_filter_drills_into_single_agent() {
    let home = TempDir::new().unwrap();
    let exports = home.path().join("alice");
    let file = fixture("mapped_calls.csv");
    let out = callscope(
        &home,
        &[
            "analyze",
            &file.display().to_string(),
            "--date",
            "Call Date",
            "--time",
            "Call Time",
            "--agent",
            "Agent Name",
            "--outcome",
            "Disposition",
            "--talk-time",
            "Talk Seconds",
            "--talk-time-unit",
            "seconds",
            "--agent-filter",
            "alice",
            "--out",
            &exports.display().to_string(),
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("== Alice Moreno =="));
    assert!(stdout.contains("4 calls"));

    let history = std::fs::read_to_string(exports.join("agent_history.csv")).unwrap();
    assert_eq!(history.lines().count(), 5);
}
