//! End-to-end tests for the `testdiff` binary

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LOCAL_RESULTS: &str = r#"{
    "run_id": "local-7",
    "environment": {"type": "docker", "os_name": "ubuntu", "os_version": "22.04", "architecture": "x86_64"},
    "summary": {"total": 100, "passed": 95, "failed": 5, "pass_rate": 95.0},
    "results": {"unit": {"passed": 50, "failed": 0}, "integration": {"passed": 45, "failed": 5}}
}"#;

const GITHUB_RESULTS: &str = r#"{
    "run_id": "gh-1234",
    "environment": {"type": "github-actions", "os_name": "ubuntu", "os_version": "22.04", "architecture": "x86_64"},
    "summary": {"total": 100, "passed": 90, "failed": 10, "pass_rate": 90.0},
    "results": {"unit": {"passed": 48, "failed": 2}, "integration": {"passed": 45, "failed": 5}}
}"#;

fn run_testdiff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_testdiff"))
        .args(args)
        .output()
        .expect("testdiff should run")
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("fixture should be written");
}

fn write_pair(dir: &Path) -> (String, String) {
    let local = dir.join("local.json");
    let github = dir.join("github.json");
    write_file(&local, LOCAL_RESULTS);
    write_file(&github, GITHUB_RESULTS);
    (
        local.to_string_lossy().into_owned(),
        github.to_string_lossy().into_owned(),
    )
}

#[test]
fn text_report_for_explicit_files() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, github) = write_pair(temp.path());

    let output = run_testdiff(&["--local", &local, "--github", &github]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Test Results Comparison Report"));
    assert!(stdout.contains("Accuracy Score:        97.37%"));
    assert!(stdout.contains("Suite: unit"));
    assert!(stdout.contains("EXCELLENT - Results are highly consistent"));
}

#[test]
fn json_format_emits_the_report_structure() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, github) = write_pair(temp.path());

    let output = run_testdiff(&["--local", &local, "--github", &github, "--format", "json"]);

    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["local_run_id"], "local-7");
    assert_eq!(parsed["accuracy_metrics"]["accuracy_score"], 97.37);
    assert_eq!(parsed["discrepancies"][0]["suite"], "unit");
    assert_eq!(parsed["summary_comparison"]["total_diff"], 0);
}

#[test]
fn html_format_emits_a_page() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, github) = write_pair(temp.path());

    let output = run_testdiff(&["--local", &local, "--github", &github, "--format", "html"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<!DOCTYPE html>"));
    assert!(stdout.contains("EXCELLENT"));
    assert!(stdout.contains("97.37"));
}

#[test]
fn output_flag_writes_file_and_confirms() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, github) = write_pair(temp.path());
    let report_path = temp.path().join("report.txt");

    let output = run_testdiff(&[
        "--local",
        &local,
        "--github",
        &github,
        "--output",
        &report_path.to_string_lossy(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Report written to:"));
    assert!(!stdout.contains("ACCURACY METRICS"), "report should go to the file");

    let written = fs::read_to_string(&report_path).expect("report file should exist");
    assert!(written.contains("ACCURACY METRICS"));
}

#[test]
fn missing_inputs_exit_1_with_usage_hint() {
    let output = run_testdiff(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("must specify both --local and --github, or use --results"));
}

#[test]
fn results_dir_mixed_with_explicit_file_exits_1() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, _) = write_pair(temp.path());

    let output = run_testdiff(&["--results", &temp.path().to_string_lossy(), "--local", &local]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_file_exits_1() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (_, github) = write_pair(temp.path());
    let absent = temp.path().join("absent.json");

    let output = run_testdiff(&["--local", &absent.to_string_lossy(), "--github", &github]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read results file"));
    assert!(stderr.contains("absent.json"));
}

#[test]
fn malformed_json_exits_1() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (_, github) = write_pair(temp.path());
    let broken = temp.path().join("broken.json");
    write_file(&broken, "{not json");

    let output = run_testdiff(&["--local", &broken.to_string_lossy(), "--github", &github]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid JSON"));
}

#[test]
fn results_dir_discovery_picks_latest_pair() {
    let temp = TempDir::new().expect("tempdir should be created");
    // The stale local run has a different total; the report must not show it.
    write_file(
        &temp.path().join("test-results-local-20240101.json"),
        r#"{"summary": {"total": 7, "passed": 7, "failed": 0, "pass_rate": 100.0}}"#,
    );
    write_file(&temp.path().join("test-results-local-20240301.json"), LOCAL_RESULTS);
    write_file(&temp.path().join("test-results-github-20240301.json"), GITHUB_RESULTS);

    let output = run_testdiff(&["--results", &temp.path().to_string_lossy()]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Local Total Tests:     100"));
    assert!(!stdout.contains("Local Total Tests:     7"));
}

#[test]
fn results_dir_without_github_files_exits_1() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(&temp.path().join("test-results-local-20240301.json"), LOCAL_RESULTS);

    let output = run_testdiff(&["--results", &temp.path().to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no GitHub results found"));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let temp = TempDir::new().expect("tempdir should be created");
    let (local, github) = write_pair(temp.path());

    let output = run_testdiff(&[
        "--local", &local, "--github", &github, "--format", "json", "--verbose",
    ]);

    assert!(output.status.success());
    // stdout must stay parseable even with debug logging enabled
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["github_run_id"], "gh-1234");
}
