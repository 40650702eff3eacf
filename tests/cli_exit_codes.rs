//! CLI exit-code contract: 0 clean, 1 findings at threshold, 2 usage, 3
//! decode errors. Also covers the write-baseline → baseline suppression
//! round trip.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn daml_sast() -> Command {
    Command::cargo_bin("daml-sast").unwrap()
}

#[test]
fn test_clean_scan_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("clean.dar");
    common::dar_clean(&dar);
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .args(["--fail-on", "LOW"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_findings_at_threshold_exit_one() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .args(["--fail-on", "LOW"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("DAML-AUTH-001"));
}

#[test]
fn test_findings_below_threshold_exit_zero() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .args(["--fail-on", "CRITICAL"])
        .assert()
        .success();
}

#[test]
fn test_missing_input_exits_two() {
    daml_sast().arg("scan").assert().code(2);
}

#[test]
fn test_bad_config_exits_two() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("clean.dar");
    common::dar_clean(&dar);
    let config = tmp.path().join("bad.toml");
    std::fs::write(&config, "[scanner]\nseverity = \"SCARY\"\n").unwrap();
    daml_sast()
        .args(["scan", "--config"])
        .arg(&config)
        .arg("--dar")
        .arg(&dar)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_garbage_dar_exits_three() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("garbage.dar");
    std::fs::write(&dar, b"this is not a zip").unwrap();
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed archive"));
}

#[test]
fn test_ci_mode_defaults_fail_on_to_medium() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    // DAML-AUTH-001 is MEDIUM, so --ci alone gates the run.
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .arg("--ci")
        .assert()
        .code(1);
}

#[test]
fn test_baseline_round_trip_suppresses_findings() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    let baseline = tmp.path().join("baseline.json");

    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .arg("--write-baseline")
        .arg(&baseline)
        .args(["--fail-on", "LOW"])
        .assert()
        .code(1);
    assert!(baseline.exists());

    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .arg("--baseline")
        .arg(&baseline)
        .args(["--fail-on", "LOW"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_legacy_baseline_exits_two() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    let baseline = tmp.path().join("legacy.json");
    std::fs::write(&baseline, "[\"aa\"]").unwrap();
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .arg("--baseline")
        .arg(&baseline)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("legacy"));
}

#[test]
fn test_rule_filters() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .args(["--exclude", "DAML-AUTH-001", "--fail-on", "LOW"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_sarif_output_to_file() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    let out = tmp.path().join("report.sarif");
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .args(["--format", "sarif", "--out"])
        .arg(&out)
        .assert()
        .success();
    let sarif: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(sarif["version"], "2.1.0");
    assert_eq!(sarif["runs"][0]["results"][0]["ruleId"], "DAML-AUTH-001");
}

#[test]
fn test_suppressions_file() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("auth.dar");
    common::dar_controller_not_aligned(&dar);
    let sup = tmp.path().join("suppressions.txt");
    std::fs::write(&sup, "# accepted risk\nDAML-AUTH-001 Main *\n").unwrap();
    daml_sast()
        .args(["scan", "--dar"])
        .arg(&dar)
        .arg("--suppressions")
        .arg(&sup)
        .args(["--fail-on", "LOW"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}
