use crate::cli::support::{mathrec, run_json, sample_bank};
use predicates::prelude::*;

#[test]
fn test_cluster_groups_topics() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "cluster",
        "--bank",
        bank.to_str().unwrap(),
        "--threshold",
        "0.1",
    ]));
    assert_eq!(
        json["clusters"],
        serde_json::json!([["trig-1", "trig-2", "trig-3"], ["log-1", "log-2"]])
    );
    assert_eq!(json["threshold"], 0.1);
}

#[test]
fn test_cluster_high_threshold_yields_singletons() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "cluster",
        "--bank",
        bank.to_str().unwrap(),
        "--threshold",
        "0.99",
    ]));
    assert_eq!(json["clusters"].as_array().unwrap().len(), 5);
}

#[test]
fn test_cluster_human_output() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "cluster",
            "--bank",
            bank.to_str().unwrap(),
            "--threshold",
            "0.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster 1: trig-1, trig-2, trig-3"))
        .stdout(predicate::str::contains("cluster 2: log-1, log-2"));
}
