use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;

mod support;
use support::{SHEET_HEADER, TestProject};

fn cogs_in(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cogs").expect("cogs binary");
    cmd.arg("--project-dir")
        .arg(root)
        .env_remove("COGS_ACCESS_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn cogs(workspace: &TestProject) -> Command {
    cogs_in(workspace.root())
}

fn parse_stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout utf8");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn cli_add_then_rm_round_trip() {
    let workspace = TestProject::new();
    workspace.write_source("data.csv", "Full Name,Age\n");

    let add = cogs(&workspace)
        .args(["--format", "json", "add", "data.csv", "--description", "People"])
        .output()
        .expect("run add");
    assert!(add.status.success(), "stderr: {:?}", add.stderr);
    let payload = parse_stdout_json(&add);
    assert_eq!(payload["title"], "data");
    assert_eq!(payload["fields_added"], serde_json::json!(["full_name", "age"]));

    workspace.write_cache("data", &["Full Name", "Age"]);
    let rm = cogs(&workspace)
        .args(["rm", "data.csv"])
        .output()
        .expect("run rm");
    assert!(rm.status.success(), "stderr: {:?}", rm.stderr);
    let stdout = String::from_utf8(rm.stdout).expect("utf8");
    assert!(stdout.contains("removed 'data'"), "stdout: {stdout}");
    assert_eq!(workspace.sheet_manifest(), SHEET_HEADER);
}

#[test]
fn cli_rm_untracked_exits_with_status_one() {
    let workspace = TestProject::new();

    let output = cogs(&workspace)
        .args(["rm", "nope.tsv", "gone.csv"])
        .output()
        .expect("run rm");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(
        stderr.contains("ERROR: unable to remove untracked file(s): nope.tsv gone.csv"),
        "stderr: {stderr}"
    );
}

#[test]
fn cli_json_errors_use_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = cogs_in(dir.path())
        .args(["--format", "json", "add", "data.csv"])
        .output()
        .expect("run add");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    let envelope: Value = serde_json::from_str(stderr.trim()).expect("json envelope");
    assert_eq!(envelope["code"], "PROJECT_ERROR");
}

#[test]
fn cli_delete_declined_exits_zero_and_keeps_project() {
    let workspace = TestProject::new();

    let output = cogs(&workspace)
        .arg("delete")
        .write_stdin("n\n")
        .output()
        .expect("run delete");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Do you wish to proceed? [y/n]"), "stderr: {stderr}");
    assert_eq!(stdout.trim(), "'delete' operation stopped");
    assert!(workspace.project.cogs_dir().is_dir());
}

#[test]
fn cli_json_delete_declined_keeps_stdout_parseable() {
    let workspace = TestProject::new();

    let output = cogs(&workspace)
        .args(["--format", "json", "delete"])
        .write_stdin("n\n")
        .output()
        .expect("run delete");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let payload = parse_stdout_json(&output);
    assert_eq!(payload["outcome"], "aborted");
    assert_eq!(payload["title"], "Test Project");
    assert!(workspace.project.cogs_dir().is_dir());
}

#[test]
fn cli_delete_outside_project_fails_silently() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = cogs_in(dir.path())
        .arg("delete")
        .output()
        .expect("run delete");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty(), "stderr: {:?}", output.stderr);
}
