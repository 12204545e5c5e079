use crate::cli::support::{mathrec, run_json, sample_bank};

#[test]
fn test_terms_prefers_rare_tokens() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args([
        "--format",
        "json",
        "terms",
        "--bank",
        bank.to_str().unwrap(),
        "--problem",
        "trig-1",
        "--top",
        "2",
    ]));
    let terms = json["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0]["term"], "30");
    assert_eq!(terms[1]["term"], "cosinus");
    assert_eq!(json["id"], "trig-1");
}

#[test]
fn test_terms_unknown_problem() {
    let (_dir, bank) = sample_bank();
    mathrec()
        .args(["terms", "--bank", bank.to_str().unwrap(), "--problem", "nope"])
        .assert()
        .code(3);
}
