//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::fixture::{write_config, write_listings};

use edgematch::testkit::domain::election_batch;

fn edgematch() -> Command {
    let mut cmd = cargo_bin_cmd!("edgematch");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn help_lists_commands() {
    edgematch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("similarity"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_binary() {
    edgematch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("edgematch"));
}

#[test]
fn run_with_sample_source_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    edgematch()
        .args(["run", "--no-export", "--log-level", "error", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Unified Products"))
        .stdout(predicate::str::contains("Arbitrage Opportunities"))
        .stdout(predicate::str::contains("Quick Statistics"));
}

#[test]
fn run_json_emits_single_report_document() {
    let dir = tempfile::tempdir().unwrap();
    let listings = write_listings(dir.path(), &election_batch());

    let assert = edgematch()
        .args(["--json", "run", "--no-export", "--log-level", "error", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("--input")
        .arg(&listings)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["command"], "run");
    assert_eq!(value["report"]["summary"]["unique_products"], 3);
    assert_eq!(value["report"]["arbitrage"].as_array().unwrap().len(), 1);
    assert!(value["exported"].as_array().unwrap().is_empty());
}

#[test]
fn run_exports_reports_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    edgematch()
        .args(["-q", "run", "--log-level", "error", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("unified_products.csv").exists());
    assert!(out.join("arbitrage_opportunities.csv").exists());
    assert!(out.join("summary.csv").exists());
    assert!(out.join("unified_products.json").exists());
    assert!(out.join("unified_products.xlsx").exists());
    assert!(out.join("prediction-market_products.csv").exists());
}

#[test]
fn run_rejects_invalid_listing() {
    let dir = tempfile::tempdir().unwrap();
    let listings = dir.path().join("listings.json");
    std::fs::write(
        &listings,
        r#"[{"site": "kalshi", "name": "Fed cuts rates", "price": 1.4, "url": "https://kalshi.example/fed"}]"#,
    )
    .unwrap();

    edgematch()
        .args(["run", "--no-export", "--log-level", "error", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("--input")
        .arg(&listings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 0"));
}

#[test]
fn run_rejects_out_of_range_threshold() {
    let dir = tempfile::tempdir().unwrap();
    edgematch()
        .args(["run", "--no-export", "--threshold", "1.5", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn similarity_reports_score() {
    let dir = tempfile::tempdir().unwrap();
    edgematch()
        .args([
            "similarity",
            "Trump wins 2024 Presidential Election",
            "Trump 2024 Election Victory",
            "--config",
        ])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0.500"))
        .stdout(predicate::str::contains("clustered together"));
}

#[test]
fn similarity_hint_names_exact_linking_threshold() {
    let dir = tempfile::tempdir().unwrap();
    edgematch()
        .args(["similarity", "a b c d", "a x y z", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("separate clusters"))
        .stdout(predicate::str::contains(format!(
            "at or below {} to link",
            1.0_f64 / 7.0
        )));
}

#[test]
fn similarity_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let assert = edgematch()
        .args(["--json", "similarity", "a b", "c d", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["similarity"], 0.0);
    assert_eq!(value["linked"], false);
}

#[test]
fn config_validate_fails_on_bad_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[unify]\nthreshold = 1.5\n");

    edgematch()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn config_validate_points_at_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[unify]\nthreshold = = 0.3\n");

    edgematch()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("edgematch::config"));
}

#[test]
fn config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    edgematch()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();

    edgematch()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}
