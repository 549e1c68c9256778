use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn sb_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sb").expect("Failed to find sb binary");
    cmd.arg("--no-color");
    cmd
}

/// Command bound to a database inside the given directory
fn sb_with_db(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = sb_cmd();
    cmd.args(["--database-file", db_path.to_str().unwrap()]);
    cmd
}

/// Extracts the first `<prefix>-<uuid>` token from command output
fn extract_id(output: &[u8], prefix: &str) -> String {
    let text = String::from_utf8_lossy(output);
    let start = text.find(prefix).expect("id in output");
    text[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

#[test]
fn test_cli_create_project_with_defaults() {
    let temp_dir = create_cli_test_environment();

    sb_with_db(&temp_dir)
        .args(["project", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: project-"))
        .stdout(predicate::str::contains("# Untitled project"))
        .stdout(predicate::str::contains("- Status: active"));
}

#[test]
fn test_cli_create_project_with_fields() {
    let temp_dir = create_cli_test_environment();

    sb_with_db(&temp_dir)
        .args([
            "project",
            "create",
            "Apollo",
            "--description",
            "Moonshot",
            "--start-date",
            "2025-01-06",
            "--status",
            "draft",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Apollo"))
        .stdout(predicate::str::contains("- Status: draft"))
        .stdout(predicate::str::contains("Moonshot"));
}

#[test]
fn test_cli_rejects_unknown_project_status() {
    let temp_dir = create_cli_test_environment();

    sb_with_db(&temp_dir)
        .args(["project", "create", "Apollo", "--status", "paused"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_projects() {
    let temp_dir = create_cli_test_environment();

    sb_with_db(&temp_dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));

    // No command lists projects too
    sb_with_db(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_update_project_keeps_other_fields() {
    let temp_dir = create_cli_test_environment();

    let output = sb_with_db(&temp_dir)
        .args(["project", "create", "Apollo", "--description", "Moonshot"])
        .output()
        .unwrap();
    let id = extract_id(&output.stdout, "project-");

    sb_with_db(&temp_dir)
        .args(["project", "update", &id, "--status", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated project with ID"))
        .stdout(predicate::str::contains("# Apollo"))
        .stdout(predicate::str::contains("- Status: archived"))
        .stdout(predicate::str::contains("Moonshot"));
}

#[test]
fn test_cli_show_missing_project_fails() {
    let temp_dir = create_cli_test_environment();

    sb_with_db(&temp_dir)
        .args(["project", "show", "project-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project with ID project-missing not found"));
}

#[test]
fn test_cli_sprint_lifecycle() {
    let temp_dir = create_cli_test_environment();

    let output = sb_with_db(&temp_dir)
        .args(["sprint", "create", "project-cli", "--title", "Sprint 1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let sprint_id = extract_id(&output.stdout, "sprint-");

    sb_with_db(&temp_dir)
        .args(["sprint", "list", "project-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Sprint 1"))
        .stdout(predicate::str::contains("**Lifecycle**: editing"));

    // Export, edit and re-import the document
    let output = sb_with_db(&temp_dir)
        .args(["sprint", "show", &sprint_id, "--json"])
        .output()
        .unwrap();
    let mut document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    document["sprint"]["title"] = "Sprint 1b".into();
    document["sprint"]["startDate"] = "2025-03-03".into();
    document["sprint"]["endDate"] = "2025-03-14".into();
    let file = temp_dir.path().join("state.json");
    fs::write(&file, serde_json::to_string(&document).unwrap()).unwrap();

    sb_with_db(&temp_dir)
        .args(["sprint", "replace-state", &sprint_id, file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced state of sprint"))
        .stdout(predicate::str::contains("2025-03-03 → 2025-03-14"));

    sb_with_db(&temp_dir)
        .args(["sprint", "delete", &sprint_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted sprint 'Sprint 1b'"));

    sb_with_db(&temp_dir)
        .args(["sprint", "list", "project-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sprints found."));
}

#[test]
fn test_cli_replace_state_from_stdin_rejects_invalid_document() {
    let temp_dir = create_cli_test_environment();

    let output = sb_with_db(&temp_dir)
        .args(["sprint", "create", "project-cli"])
        .output()
        .unwrap();
    let sprint_id = extract_id(&output.stdout, "sprint-");

    sb_with_db(&temp_dir)
        .args(["sprint", "replace-state", &sprint_id, "-"])
        .write_stdin(r#"{"sprint": {"title": "S", "startDate": "2025-03-03"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Sprint start and end dates are required.",
        ));

    sb_with_db(&temp_dir)
        .args(["sprint", "replace-state", &sprint_id, "-"])
        .write_stdin("null")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sprint state is required."));
}

#[test]
fn test_cli_delete_project_cascades() {
    let temp_dir = create_cli_test_environment();

    let output = sb_with_db(&temp_dir)
        .args(["sprint", "create", "project-gone"])
        .output()
        .unwrap();
    let sprint_id = extract_id(&output.stdout, "sprint-");

    sb_with_db(&temp_dir)
        .args(["project", "delete", "project-gone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Untitled project'"));

    sb_with_db(&temp_dir)
        .args(["sprint", "show", &sprint_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_defaults_prints_valid_document() {
    let output = sb_cmd()
        .args(["defaults", "--title", "Sprint 5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["sprint"]["title"], "Sprint 5");
    assert_eq!(document["planningLifecycle"]["status"], "editing");
    assert_eq!(document["tasks"]["items"], serde_json::json!([]));
    assert_eq!(document["config"]["value"]["schedulingStrategy"], "EDD");

    sb_cmd()
        .arg("validate")
        .arg("-")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Document is valid."));
}

#[test]
fn test_cli_validate_reports_first_violation() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("doc.json");
    fs::write(
        &file,
        r#"{
            "sprint": {"title": "S", "startDate": "2025-03-03", "endDate": "2025-03-14"},
            "tasks": {"items": [
                {"id": "T1", "name": "One", "dependencies": ["T1"]},
                {"id": "T1", "name": "Two"}
            ]}
        }"#,
    )
    .unwrap();

    sb_cmd()
        .args(["validate", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A task cannot depend on itself."))
        .stderr(predicate::str::contains("referential"));
}

#[test]
fn test_cli_validate_null_document_from_stdin() {
    sb_cmd()
        .args(["validate", "-"])
        .write_stdin("null")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sprint state is required."))
        .stderr(predicate::str::contains("missing_field"));
}

#[test]
fn test_cli_validate_malformed_json() {
    sb_cmd()
        .args(["validate", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid planning document"));
}
