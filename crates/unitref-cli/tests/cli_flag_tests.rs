// Rust guideline compliant 2026-02-06

//! Regression tests for the `uref` binary and its global flags.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const CATALOG: &str = r#"["about.json", "app1.json", "test/app1.json", "test/app2.json", "prod/app1.json"]"#;

fn setup() -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_dir = temp_dir.path().join(".unitref");
    fs::create_dir(&config_dir).expect("create .unitref dir");
    fs::write(config_dir.join("catalog.json"), CATALOG).expect("write catalog");
    temp_dir
}

fn uref(temp_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uref"))
        .current_dir(temp_dir.path())
        .env_remove("UNITREF_CATALOG")
        .env_remove("UNITREF_OUTPUT_FORMAT")
        .env_remove("UNITREF_CASE_SENSITIVE")
        .args(args)
        .output()
        .expect("run uref")
}

#[test]
fn uref_search_json_flag_outputs_json() {
    let temp_dir = setup();
    let output = uref(&temp_dir, &["search", "app1", "--json"]);

    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["outcome"], "ambiguous");
    assert_eq!(value["matches"][0], "prod/app1");
    assert_eq!(value["matches"][1], "test/app1");
}

#[test]
fn uref_search_not_found_exits_with_failure() {
    let temp_dir = setup();
    let output = uref(&temp_dir, &["--format", "plain", "search", "nomatch"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "No matches for nomatch"
    );
}

#[test]
fn uref_resolve_plain_prints_application_id() {
    let temp_dir = setup();
    let output = uref(&temp_dir, &["--format", "plain", "resolve", "test", "app2"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "test/app2");
}

#[test]
fn uref_resolve_ambiguous_fails() {
    let temp_dir = setup();
    let output = uref(&temp_dir, &["resolve", "app"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("matched more than one candidate"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn uref_catalog_from_stdin() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_uref"))
        .current_dir(temp_dir.path())
        .env_remove("UNITREF_CATALOG")
        .env_remove("UNITREF_OUTPUT_FORMAT")
        .args(["--catalog", "-", "--format", "plain", "file", "prod/app1"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("spawn uref");

    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(b"test/app1.json\nprod/app1.yaml\n")
            .expect("write stdin");
    }

    let output = child.wait_with_output().expect("wait for uref");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "prod/app1.yaml");
}

#[test]
fn uref_missing_catalog_reports_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = uref(&temp_dir, &["all"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No candidate list"));
}
