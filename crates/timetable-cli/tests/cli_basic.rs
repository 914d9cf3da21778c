//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a temporary data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_timetable-cli"))
        .args(args)
        .env("TIMETABLE_DATA_DIR", dir)
        .env_remove("TIMETABLE_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command and expect success.
fn run_cli_success(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(dir, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_generate_refuses_without_subjects() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["schedule", "generate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no study hours requested"), "stderr: {stderr}");
    assert!(!dir.path().join("state.json").exists());
}

#[test]
fn test_subject_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let id = run_cli_success(dir.path(), &["subject", "add", "Math", "--hours", "2", "--priority", "high"]);
    let id = id.trim();

    let list = parse_json(&run_cli_success(dir.path(), &["subject", "list", "--json"]));
    assert_eq!(list[0]["name"], "Math");
    assert_eq!(list[0]["hours_per_day"], 2);
    assert_eq!(list[0]["priority"], 3);

    run_cli_success(dir.path(), &["subject", "edit", id, "--hours", "4"]);
    let list = parse_json(&run_cli_success(dir.path(), &["subject", "list", "--json"]));
    assert_eq!(list[0]["hours_per_day"], 4);

    run_cli_success(dir.path(), &["subject", "remove", id]);
    let list = parse_json(&run_cli_success(dir.path(), &["subject", "list", "--json"]));
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[test]
fn test_generate_show_toggle_stats() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["config", "set", "scheduler.seed", "1"]);
    run_cli_success(dir.path(), &["subject", "add", "Math", "--hours", "2", "--priority", "high"]);
    run_cli_success(dir.path(), &["schedule", "generate"]);

    let day = parse_json(&run_cli_success(dir.path(), &["schedule", "show", "--day", "Mon"]));
    let slots = day.as_array().unwrap();
    assert_eq!(slots.len(), 20);
    assert_eq!(slots[0]["assigned"], "Fajr");
    let study = slots
        .iter()
        .position(|s| s["assigned"] == "Math")
        .expect("Math scheduled");

    let toggled = parse_json(&run_cli_success(
        dir.path(),
        &["schedule", "toggle", "Mon", &study.to_string()],
    ));
    assert_eq!(toggled["is_completed"], true);

    let stats = parse_json(&run_cli_success(dir.path(), &["stats", "--day", "Mon"]));
    assert_eq!(stats["daily_completion_rate"], 50.0);
    assert_eq!(stats["weekly_completed_hours"], 1);
    assert_eq!(stats["weekly_target_hours"], 14);
    assert_eq!(stats["subjects"][0]["completed_hours"], 1);
}

#[test]
fn test_toggle_obligation_is_no_change() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["subject", "add", "Math", "--hours", "1"]);
    run_cli_success(dir.path(), &["schedule", "generate"]);

    let out = run_cli_success(dir.path(), &["schedule", "toggle", "Mon", "0"]);
    assert_eq!(out.trim(), "no change");
    let out = run_cli_success(dir.path(), &["schedule", "assign", "Mon", "99", "Math"]);
    assert_eq!(out.trim(), "no change");
}

#[test]
fn test_assign_free_clears_completion() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["subject", "add", "Math", "--hours", "1"]);
    run_cli_success(dir.path(), &["schedule", "generate"]);

    let day = parse_json(&run_cli_success(dir.path(), &["schedule", "show", "--day", "Tue"]));
    let idx = day
        .as_array()
        .unwrap()
        .iter()
        .position(|s| s["assigned"] == "Math")
        .unwrap()
        .to_string();

    run_cli_success(dir.path(), &["schedule", "toggle", "Tue", &idx]);
    let slot = parse_json(&run_cli_success(dir.path(), &["schedule", "assign", "Tue", &idx, "Free"]));
    assert_eq!(slot["assigned"], "Free");
    assert_eq!(slot["is_completed"], false);
}

#[test]
fn test_select_changes_default_day() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["config", "set", "week.days", r#"["Fri"]"#]);
    run_cli_success(dir.path(), &["subject", "add", "Math", "--hours", "1"]);
    run_cli_success(dir.path(), &["schedule", "generate"]);

    let monday = parse_json(&run_cli_success(dir.path(), &["schedule", "show"]));
    assert_eq!(monday.as_array().unwrap().len(), 0);

    run_cli_success(dir.path(), &["schedule", "select", "friday"]);
    let friday = parse_json(&run_cli_success(dir.path(), &["schedule", "show"]));
    assert_eq!(friday.as_array().unwrap().len(), 20);
}

#[test]
fn test_config_get_set_reset() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["config", "get", "scheduler.max_consecutive_same_subject"]);
    assert_eq!(out.trim(), "3");

    run_cli_success(dir.path(), &["config", "set", "window.start_hour", "6"]);
    let out = run_cli_success(dir.path(), &["config", "get", "window.start_hour"]);
    assert_eq!(out.trim(), "6");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "window.start_hour", "25"]);
    assert_eq!(code, 1);

    run_cli_success(dir.path(), &["config", "reset"]);
    let out = run_cli_success(dir.path(), &["config", "get", "window.start_hour"]);
    assert_eq!(out.trim(), "4");
}

#[test]
fn test_invalid_day_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["schedule", "show", "--day", "Funday"]);
    assert_ne!(code, 0);
}
