//! Error-path tests for strukt-cli: every failure mode maps to the right
//! exit code and an actionable stderr message.
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strukt() -> Command {
    Command::cargo_bin("strukt").unwrap()
}

fn fixture(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("inventory.yml"), config).unwrap();
    dir
}

#[test]
fn no_args_shows_help() {
    strukt()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_config_is_internal_error() {
    let dir = TempDir::new().unwrap();
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "missing.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.yml"));
}

#[test]
fn non_yaml_source_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("inventory.json"), "{}").unwrap();

    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a strukt inventory source"));
}

#[test]
fn wrong_plugin_token_is_user_error() {
    let dir = fixture("plugin: other_tool\nsource: ./workspace.json\n");
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("plugin token"));
}

#[test]
fn invalid_yaml_is_configuration_error() {
    let dir = fixture("plugin: [unterminated\n");
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn missing_source_option_is_configuration_error() {
    let dir = fixture("plugin: structurizr\n");
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'source' option is required"));
}

#[test]
fn missing_workspace_file_is_user_error() {
    let dir = fixture("plugin: structurizr\nsource: ./nope.json\n");
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unable to read"));
}

#[test]
fn invalid_workspace_json_is_user_error() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    std::fs::write(dir.path().join("workspace.json"), "not valid json {").unwrap();

    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn unknown_host_is_not_found() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    std::fs::write(
        dir.path().join("workspace.json"),
        r#"{"model": {"deploymentNodes": []}}"#,
    )
    .unwrap();

    strukt()
        .current_dir(dir.path())
        .args(["host", "-i", "inventory.yml", "ghost-01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Host not found"));
}

#[test]
fn errors_include_suggestions() {
    let dir = fixture("plugin: structurizr\n");
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}
