//! CLI Integration Tests for taskflow
//!
//! Runs the built binary for the init, plan and config commands.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run taskflow with arguments
fn run_taskflow(args: &[&str], working_dir: Option<&Path>) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_taskflow"));
    cmd.args(args).env_remove("RUST_LOG");

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    cmd.output().expect("Failed to execute command")
}

fn write_tasks(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_taskflow(&["--help"], None);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("init"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_version_command() {
    let output = run_taskflow(&["--version"], None);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("taskflow"));
}

// =============================================================================
// Init Command Tests
// =============================================================================

#[test]
fn test_init_then_plan_sample() {
    let temp = TempDir::new().unwrap();

    let output = run_taskflow(&["--no-color", "init"], Some(temp.path()));
    assert!(output.status.success());
    assert!(temp.path().join("taskflow.toml").exists());
    assert!(temp.path().join("tasks.json").exists());

    let output = run_taskflow(
        &["plan", "tasks.json", "--start", "2024-01-15", "--json"],
        Some(temp.path()),
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schedule"]["summary"]["totalItems"], 4);
    assert_eq!(
        value["schedule"]["days"][0]["assignments"][0]["taskId"],
        "fix-login"
    );
}

#[test]
fn test_init_twice_fails_without_force() {
    let temp = TempDir::new().unwrap();

    assert!(run_taskflow(&["--no-color", "init"], Some(temp.path()))
        .status
        .success());
    assert!(!run_taskflow(&["--no-color", "init"], Some(temp.path()))
        .status
        .success());
    assert!(run_taskflow(&["--no-color", "init", "--force"], Some(temp.path()))
        .status
        .success());
}

// =============================================================================
// Plan Command Tests
// =============================================================================

#[test]
fn test_plan_csv_with_capacity_override() {
    let temp = TempDir::new().unwrap();
    write_tasks(
        temp.path(),
        "tasks.csv",
        "id,title,estimated_hours,priority,due_date,notes\n\
         a,Alpha,3,high,,\n\
         b,Beta,3,medium,,\n\
         c,Gamma,3,low,,\n",
    );

    let output = run_taskflow(
        &[
            "plan",
            "tasks.csv",
            "--start",
            "2024-01-19",
            "--capacity",
            "6",
            "--no-narrative",
            "--json",
        ],
        Some(temp.path()),
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = value["schedule"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-01-19");
    assert_eq!(days[1]["date"], "2024-01-22");
    assert!(value["narrative"].is_null());
}

#[test]
fn test_plan_table_output() {
    let temp = TempDir::new().unwrap();
    write_tasks(
        temp.path(),
        "tasks.json",
        r#"[{"id": "write-docs", "title": "Write docs", "estimated_hours": 2}]"#,
    );

    let output = run_taskflow(
        &["--no-color", "plan", "tasks.json", "--start", "2024-01-15"],
        Some(temp.path()),
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mon 2024-01-15"));
    assert!(stdout.contains("09:00-11:00"));
    assert!(stdout.contains("write-docs"));
}

#[test]
fn test_plan_invalid_capacity_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    write_tasks(temp.path(), "tasks.json", "[]");

    let output = run_taskflow(
        &["--no-color", "plan", "tasks.json", "--capacity", "0"],
        Some(temp.path()),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("capacity_hours_per_day"));
}

#[test]
fn test_plan_duplicate_ids_exit_non_zero() {
    let temp = TempDir::new().unwrap();
    write_tasks(
        temp.path(),
        "tasks.json",
        r#"[
            {"id": "a", "title": "A", "estimated_hours": 1},
            {"id": "a", "title": "A again", "estimated_hours": 2}
        ]"#,
    );

    let output = run_taskflow(&["--no-color", "plan", "tasks.json"], Some(temp.path()));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate"));
}

#[test]
fn test_plan_missing_file() {
    let temp = TempDir::new().unwrap();
    let output = run_taskflow(&["plan", "nope.json"], Some(temp.path()));
    assert!(!output.status.success());
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let output = run_taskflow(&["--no-color", "config", "--validate"], Some(temp.path()));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("using defaults"));
    assert!(stdout.contains("Configuration is valid"));
}

#[test]
fn test_config_full_prints_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("custom.toml"),
        "[scheduler]\ncapacity_hours_per_day = 6.5\n",
    )
    .unwrap();

    let output = run_taskflow(
        &["--no-color", "--config", "custom.toml", "config", "--full"],
        Some(temp.path()),
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("capacity_hours_per_day = 6.5"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("taskflow.toml"),
        "[scheduler]\nday_start_hour = 30\n",
    )
    .unwrap();

    let output = run_taskflow(&["config"], Some(temp.path()));
    assert!(!output.status.success());
}
