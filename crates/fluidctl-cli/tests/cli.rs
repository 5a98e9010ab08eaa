use assert_cmd::Command;
use predicates::str::{contains, starts_with};

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fluidctl"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("fluidctl manages Fluidstack infrastructure"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fluidctl"));
    cmd.arg("--version").assert().success();
}

#[test]
fn test_cli_completions() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fluidctl"));
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(starts_with("_fluidctl"));
}

#[test]
fn test_instances_list_requires_a_project() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fluidctl"));
    cmd.args(["instances", "list"])
        .assert()
        .failure()
        .stderr(contains("--project"));
}

#[test]
fn test_invalid_project_id_is_rejected() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fluidctl"));
    cmd.args(["instances", "list", "--project", "not-a-uuid"])
        .assert()
        .failure();
}
