use crate::cli::support::{mathrec, run_json};
use predicates::prelude::*;

#[test]
fn test_normalize_latex_statement() {
    mathrec()
        .args(["normalize", r"\text{Oblicz } \sin(45°)"])
        .assert()
        .success()
        .stdout("oblicz sinus 45 stopnie\n");
}

#[test]
fn test_normalize_degree_synonyms_agree() {
    let a = mathrec().args(["normalize", "30 stopni"]).output().unwrap();
    let b = mathrec().args(["normalize", "30 stopień"]).output().unwrap();
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(String::from_utf8_lossy(&a.stdout), "30 stopnie\n");
}

#[test]
fn test_normalize_json() {
    let json = run_json(mathrec().args(["--format", "json", "normalize", "tg x"]));
    assert_eq!(json["tokens"], serde_json::json!(["tangens", "x"]));
}

#[test]
fn test_normalize_from_stdin() {
    mathrec()
        .args(["normalize", "-"])
        .write_stdin("Rozwiąż równanie")
        .assert()
        .success()
        .stdout("rozwiaz rownanie\n");
}

#[test]
fn test_normalize_empty_text() {
    mathrec()
        .args(["normalize", ""])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_normalize_trace_human() {
    mathrec()
        .args(["normalize", "--trace", r"\frac{1}{2} + x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleaned:    (1)/(2) + x"))
        .stdout(predicate::str::contains("entities:"))
        .stdout(predicate::str::contains("operator:+"));
}

#[test]
fn test_normalize_trace_json() {
    let json = run_json(mathrec().args(["--format", "json", "normalize", "--trace", "sin x = 1"]));
    assert_eq!(json["normalized"], "sinus x = 1");
    assert_eq!(json["final_tokens"], serde_json::json!(["sinus", "x", "=", "1"]));
    let entities = json["entities"].as_array().unwrap();
    assert!(entities
        .iter()
        .any(|e| e["type"] == "operator" && e["value"] == "="));
}
