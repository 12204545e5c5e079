use crate::cli::support::{mathrec, run_json, sample_bank};
use predicates::prelude::*;

#[test]
fn test_stats_json() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args(["--format", "json", "stats", "--bank", bank.to_str().unwrap()]));

    assert_eq!(json["similarity"]["count"], 10);
    assert_eq!(json["tfidf"]["documents_count"], 5);
    let min = json["similarity"]["min"].as_f64().unwrap();
    let max = json["similarity"]["max"].as_f64().unwrap();
    let median = json["similarity"]["median"].as_f64().unwrap();
    assert!(min <= median && median <= max);
    assert!(json["tfidf"]["most_discriminative_terms"].as_array().unwrap().len() <= 10);
}

#[test]
fn test_stats_human() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args(["stats", "--bank", bank.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("problems:    5"))
        .stdout(predicate::str::contains("pairs:       10"));
}
