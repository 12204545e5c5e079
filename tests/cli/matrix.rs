use crate::cli::support::{mathrec, run_json, sample_bank, write_bank};

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let (_dir, bank) = sample_bank();
    let json = run_json(mathrec().args(["--format", "json", "matrix", "--bank", bank.to_str().unwrap()]));

    assert_eq!(json["ids"].as_array().unwrap().len(), 5);
    let rows = json["matrix"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    for i in 0..5 {
        assert_eq!(rows[i][i], 1.0);
        for j in 0..5 {
            assert_eq!(rows[i][j], rows[j][i]);
        }
    }
}

#[test]
fn test_matrix_human_has_header_and_rows() {
    let (_dir, bank) = sample_bank();
    let output = mathrec()
        .args(["matrix", "--bank", bank.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("trig-1\ttrig-2"));
    assert!(lines[1].starts_with("trig-1\t1.00"));
}

#[test]
fn test_matrix_of_wrapped_bank() {
    let (_dir, bank) = write_bank(
        r#"{"problems": [{"id": "a", "statement": "sinus"}, {"id": "b", "statement": "cosinus"}]}"#,
    );
    let json = run_json(mathrec().args(["--format", "json", "matrix", "--bank", bank.to_str().unwrap()]));
    assert_eq!(json["ids"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_matrix_of_empty_bank() {
    let (_dir, bank) = write_bank("[]");
    let json = run_json(mathrec().args(["--format", "json", "matrix", "--bank", bank.to_str().unwrap()]));
    assert_eq!(json["matrix"], serde_json::json!([]));
}

#[test]
fn test_matrix_malformed_bank_exit_code_3() {
    let (_dir, bank) = write_bank("{\"problems\": 7}");
    mathrec()
        .args(["matrix", "--bank", bank.to_str().unwrap()])
        .assert()
        .code(3);
}
