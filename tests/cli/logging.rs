use crate::cli::support::{mathrec, sample_bank};
use predicates::prelude::*;

#[test]
fn test_quiet_by_default() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args(["matrix", "--bank", bank.to_str().unwrap()])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_logs_phases() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "--verbose",
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "trig-1",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("fit_transform"))
        .stderr(predicate::str::contains("select"));
}

#[test]
fn test_log_json() {
    let (_dir, bank) = sample_bank();
    let output = mathrec()
        .args([
            "--log-json",
            "--log-level",
            "debug",
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "trig-1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("at least one log line");
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(event["level"], "DEBUG");
}

#[test]
fn test_mathrec_log_env_var() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .env("MATHREC_LOG", "mathrec_core=trace")
        .args(["similar", "--bank", bank.to_str().unwrap(), "--problem", "trig-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("vectorize_bank"));
}
