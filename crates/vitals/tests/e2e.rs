//! End-to-end CLI integration tests.
//!
//! Only one-shot modes are exercised here; the dashboard needs a TTY.

use assert_cmd::Command;
use predicates::prelude::*;

fn vitals() -> Command {
    let mut cmd = Command::cargo_bin("vitals").expect("binary not found");
    cmd.env("NO_COLOR", "1").env_remove("VITALS_LOG_FILE");
    cmd
}

#[test]
fn help_flag() {
    vitals()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wellness dashboard"))
        .stdout(predicate::str::contains("--glucose"));
}

#[test]
fn version_flag() {
    vitals()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vitals"));
}

#[test]
fn glucose_low() {
    vitals()
        .args(["--glucose", "65", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::diff("low\n"));
}

#[test]
fn glucose_thresholds_are_normal() {
    for reading in ["70", "180"] {
        vitals()
            .args(["--glucose", reading, "-q"])
            .assert()
            .success()
            .stdout(predicate::str::diff("normal\n"));
    }
}

#[test]
fn glucose_high() {
    vitals()
        .args(["--glucose", "181", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::diff("high\n"));
}

#[test]
fn glucose_negative_reading() {
    vitals()
        .args(["--glucose", "-5", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::diff("low\n"));
}

#[test]
fn glucose_full_message() {
    vitals()
        .args(["--glucose", "95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] 95 mg/dL: Normal glucose level."));
}

#[test]
fn glucose_non_numeric_fails() {
    vitals()
        .args(["--glucose", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid glucose reading"));
}

#[test]
fn glucose_empty_fails() {
    vitals().args(["--glucose", ""]).assert().code(2);
}

#[test]
fn bmi_quiet() {
    vitals()
        .args(["--weight", "70", "--height", "175", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::diff("22.9 Normal\n"));
}

#[test]
fn bmi_full_message() {
    vitals()
        .args(["--weight", "90", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 27.8 (Overweight)"));
}

#[test]
fn bmi_zero_height_fails() {
    vitals()
        .args(["--weight", "70", "--height", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-zero"));
}

#[test]
fn weight_without_height_is_usage_error() {
    vitals().args(["--weight", "70"]).assert().failure();
}

#[test]
fn log_file_receives_debug_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("vitals.log");
    vitals()
        .env("RUST_LOG", "debug")
        .args(["--glucose", "250", "-q", "--log-file", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("high\n"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("presenting glucose"));
}

#[test]
fn unwritable_log_file_is_config_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("vitals.log");
    vitals()
        .args(["--glucose", "90", "--log-file", path.to_str().unwrap()])
        .assert()
        .code(4);
}

#[test]
fn shell_completion_bash() {
    vitals()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitals"));
}

#[test]
fn shell_completion_zsh() {
    vitals()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitals"));
}
