use crate::cli::support::{mathrec, run_json, sample_bank, write_bank};
use predicates::prelude::*;

#[test]
fn test_similar_ranks_neighbors() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "similar",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--top",
        "2",
    ]));
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "trig-3");
    assert_eq!(results[1]["id"], "trig-2");
    assert!(results[0]["similarity"].as_f64() >= results[1]["similarity"].as_f64());
}

#[test]
fn test_similar_is_unfiltered() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "similar",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--top",
        "10",
    ]));
    // every other problem, including zero-similarity ones
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[test]
fn test_similar_with_other_metrics() {
    let (_dir, bank) = sample_bank();
    for metric in ["jaccard", "euclidean", "manhattan"] {
        mathrec()
            .args([
                "similar",
                "--bank",
                bank.to_str().unwrap(),
                "--problem",
                "log-1",
                "--metric",
                metric,
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("log-1").not());
    }
}

#[test]
fn test_similar_duplicate_ids_rejected() {
    let (_dir, bank) = write_bank(r#"[{"id": "a", "statement": "x"}, {"id": "a"}]"#);
    mathrec()
        .args(["similar", "--bank", bank.to_str().unwrap(), "--problem", "a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate problem id"));
}
