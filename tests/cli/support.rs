use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for mathrec, isolated from any user config
pub fn mathrec() -> Command {
    let mut cmd = cargo_bin_cmd!("mathrec");
    cmd.env("MATHREC_CONFIG_DIR", "/nonexistent/mathrec-config")
        .env_remove("RUST_LOG")
        .env_remove("MATHREC_LOG");
    cmd
}

/// Trigonometry and logarithm problems in two clear groups
pub const SAMPLE_BANK: &str = r#"[
    {"id": "trig-1", "statement": "Oblicz \\sin(30°) oraz cosinus kąta"},
    {"id": "trig-2", "statement": "Oblicz \\sin 60° i tangens kąta ostrego"},
    {"id": "log-1", "statement": "Rozwiąż równanie logarytm x = 2"},
    {"id": "trig-3", "statement": "Wyznacz sinus i cosinus kąta 45 stopni"},
    {"id": "log-2", "statement": "Oblicz logarytm z 8 przy podstawie 2", "difficulty": 2}
]"#;

/// Write a problem bank into a fresh temp dir
pub fn write_bank(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

pub fn sample_bank() -> (TempDir, PathBuf) {
    write_bank(SAMPLE_BANK)
}

/// Run a command expected to succeed with JSON output and parse stdout
pub fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
