use assert_cmd::{Command, cargo_bin_cmd};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::PathBuf;

fn engine() -> Command {
    cargo_bin_cmd!("labour-engine")
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_prints_best_and_worst_hours() {
    engine()
        .args([
            "--shifts",
            &fixture("week_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
        ])
        .assert()
        .success()
        .stdout(contains("Best hour: 17:00").and(contains("Worst hour: 16:00")));
}

#[test]
fn test_report_prints_every_hour() {
    engine()
        .args([
            "--shifts",
            &fixture("week_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
            "--report",
        ])
        .assert()
        .success()
        .stdout(
            contains("Hour")
                .and(contains("09:00"))
                .and(contains("18:00"))
                .and(contains("32.79"))
                .and(contains("Best hour: 17:00")),
        );
}

#[test]
fn test_json_output() {
    let output = engine()
        .args([
            "--shifts",
            &fixture("week_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best_hour"], "17:00");
    assert_eq!(json["worst_hour"], "16:00");
    assert_eq!(json["hours"].as_array().unwrap().len(), 10);
}

#[test]
fn test_skip_flag_changes_result() {
    engine()
        .args([
            "--shifts",
            &fixture("truncated_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
            "--skip-bad-shifts",
        ])
        .assert()
        .success()
        .stdout(contains("Best hour: 12:00").and(contains("Worst hour: 16:00")));
}

#[test]
fn test_config_file_policy() {
    engine()
        .args([
            "--shifts",
            &fixture("truncated_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
            "--config",
            &fixture("config/skip.yaml"),
        ])
        .assert()
        .success()
        .stdout(contains("Best hour: 12:00"));
}

#[test]
fn test_missing_source_fails() {
    engine()
        .args([
            "--shifts",
            "blabla_not_a-file asd",
            "--sales",
            &fixture("week_transactions.csv"),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Source file not found"));
}

#[test]
fn test_zero_cost_hour_fails() {
    engine()
        .args([
            "--shifts",
            &fixture("good_shifts.csv"),
            "--sales",
            &fixture("good_transactions.csv"),
        ])
        .assert()
        .failure()
        .stderr(contains("Labour cost for 16:00 is zero"));
}

#[test]
fn test_invalid_config_fails() {
    engine()
        .args([
            "--shifts",
            &fixture("week_shifts.csv"),
            "--sales",
            &fixture("week_transactions.csv"),
            "--config",
            &fixture("config/invalid.yaml"),
        ])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration file"));
}
