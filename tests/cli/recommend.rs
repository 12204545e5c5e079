use crate::cli::support::{mathrec, run_json, sample_bank, write_bank};
use predicates::prelude::*;

#[test]
fn test_recommend_for_problem() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
    ]));

    let recs = json["recommendations"].as_array().unwrap();
    assert!(!recs.is_empty());
    assert_eq!(recs[0]["id"], "trig-3");
    assert_eq!(recs[0]["index"], 3);
    assert_eq!(json["metric"], "cosine");
    assert_eq!(json["fallback"], false);
    for rec in recs {
        assert_ne!(rec["id"], "trig-1");
        assert!(rec["similarity"].as_f64().unwrap() > 0.1);
    }
}

#[test]
fn test_recommend_human_output() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args(["recommend", "--bank", bank.to_str().unwrap(), "-p", "trig-1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("trig-3\t0."));
}

#[test]
fn test_recommend_skips_completed() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--completed",
        "trig-3",
        "--completed",
        "trig-2",
    ]));
    let recs = json["recommendations"].as_array().unwrap();
    assert!(recs
        .iter()
        .all(|r| r["id"] != "trig-3" && r["id"] != "trig-2"));
}

#[test]
fn test_recommend_for_text() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--text",
        "oblicz logarytm przy podstawie 2",
    ]));
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs[0]["id"], "log-2");
    assert_eq!(recs[0]["index"], 4);
}

#[test]
fn test_recommend_fallback_to_next_in_order() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--min-similarity",
        "0.9",
        "--fallback",
    ]));
    assert_eq!(json["fallback"], true);
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["id"], "trig-2");
}

#[test]
fn test_recommend_nothing_above_threshold() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "trig-1",
            "--min-similarity",
            "0.9",
        ])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No recommendations"));
}

#[test]
fn test_recommend_top_limits_results() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "log-1",
        "--min-similarity",
        "-1",
        "--top",
        "2",
    ]));
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_recommend_unknown_problem_exit_code_3() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "geo-9",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("problem not found: geo-9"));
}

#[test]
fn test_recommend_unknown_problem_json_envelope() {
    let (_dir, bank) = sample_bank();
    let output = mathrec()
        .args([
            "--format",
            "json",
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "geo-9",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "problem_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_recommend_min_similarity_out_of_range() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "trig-1",
            "--min-similarity",
            "2",
        ])
        .assert()
        .code(2);
}

/// Sample statements with solution steps: trig-1 medium, trig-2 easy,
/// trig-3 hard, log-1 hard when matched against text
const STEPPED_BANK: &str = r#"[
    {"id": "trig-1", "statement": "Oblicz \\sin(30°) oraz cosinus kąta", "steps": [1, 2, 3, 4, 5]},
    {"id": "trig-2", "statement": "Oblicz \\sin 60° i tangens kąta ostrego", "steps": [1]},
    {"id": "log-1", "statement": "Rozwiąż równanie logarytm x = 2", "steps": [1, 2, 3, 4, 5, 6, 7, 8, 9]},
    {"id": "trig-3", "statement": "Wyznacz sinus i cosinus kąta 45 stopni", "steps": [1, 2, 3, 4, 5, 6, 7, 8]},
    {"id": "log-2", "statement": "Oblicz logarytm z 8 przy podstawie 2"}
]"#;

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_recommend_by_difficulty_after_slow_solve() {
    let (_dir, bank) = write_bank(STEPPED_BANK);
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--min-similarity",
        "0",
        "--top",
        "5",
        "--by-difficulty",
        "--solve-time",
        "1000",
    ]));
    assert_eq!(json["by_difficulty"], true);

    let ids = ids(&json);
    let pos = |id: &str| ids.iter().position(|x| x == id).unwrap();
    assert!(pos("trig-2") < pos("trig-3"), "{:?}", ids);

    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs[pos("trig-3")]["difficulty"], "hard");
    assert_eq!(recs[pos("trig-2")]["difficulty"], "easy");
}

#[test]
fn test_recommend_by_difficulty_after_fast_solve() {
    let (_dir, bank) = write_bank(STEPPED_BANK);
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--by-difficulty",
        "--solve-time",
        "60",
    ]));
    assert_eq!(ids(&json)[0], "trig-3");
}

#[test]
fn test_recommend_text_by_difficulty() {
    let (_dir, bank) = write_bank(STEPPED_BANK);
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "recommend",
        "--bank",
        bank.to_str().unwrap(),
        "--text",
        "oblicz logarytm przy podstawie 2",
        "--by-difficulty",
    ]));
    assert_eq!(ids(&json)[0], "log-1");
    for rec in json["recommendations"].as_array().unwrap() {
        assert!(rec["score"].as_f64().unwrap() > 0.15);
    }
}

#[test]
fn test_recommend_by_difficulty_human_output() {
    let (_dir, bank) = write_bank(STEPPED_BANK);
    mathrec()
        .args([
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "-p",
            "trig-1",
            "--by-difficulty",
            "--solve-time",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("trig-3\t0."))
        .stdout(predicate::str::contains("\thard\tsimilarity 0."));
}

#[test]
fn test_recommend_solve_time_requires_by_difficulty() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args([
            "recommend",
            "--bank",
            bank.to_str().unwrap(),
            "--problem",
            "trig-1",
            "--solve-time",
            "60",
        ])
        .assert()
        .code(2);
}
