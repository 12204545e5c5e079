use crate::cli::support::{mathrec, run_json};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_explicit_config_aliases() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("engine.toml");
    fs::write(&config, "[term_aliases]\nsinusa = \"sinus\"\n").unwrap();

    let json = run_json(mathrec().args([
        "--format",
        "json",
        "--config",
        config.to_str().unwrap(),
        "normalize",
        "oblicz sinusa",
    ]));
    assert_eq!(json["tokens"], serde_json::json!(["oblicz", "sinus"]));
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let mut aliases = toml::Table::new();
    aliases.insert("cosinusa".into(), toml::Value::String("cosinus".into()));
    let mut config = toml::Table::new();
    config.insert("term_aliases".into(), toml::Value::Table(aliases));
    fs::write(
        dir.path().join("config.toml"),
        toml::to_string(&config).unwrap(),
    )
    .unwrap();

    let json = run_json(
        mathrec()
            .env("MATHREC_CONFIG_DIR", dir.path())
            .args(["--format", "json", "normalize", "cosinusa"]),
    );
    assert_eq!(json["tokens"], serde_json::json!(["cosinus"]));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("engine.toml");
    fs::write(&config, "min_similarity = 3.0\n").unwrap();

    mathrec()
        .args(["--config", config.to_str().unwrap(), "normalize", "x"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_metric_in_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("engine.toml");
    fs::write(&config, "metric = \"hamming\"\n").unwrap();

    mathrec()
        .args(["--config", config.to_str().unwrap(), "normalize", "x"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_fails() {
    mathrec()
        .args(["--config", "/nonexistent/engine.toml", "normalize", "x"])
        .assert()
        .code(1);
}
