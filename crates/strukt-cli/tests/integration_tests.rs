//! Integration tests for strukt-cli.
//!
//! These drive the real binary over real files: a workspace export plus an
//! inventory source YAML in a temp directory, asserting on the emitted
//! inventory documents and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const WORKSPACE: &str = r#"{
  "model": {
    "deploymentNodes": [
      {
        "id": "prod",
        "name": "Production",
        "environment": "Production",
        "children": [
          {
            "id": "euw",
            "name": "EU-West",
            "children": [
              {
                "id": "w1",
                "name": "web-prod-01",
                "technology": "Ubuntu 22.04",
                "tags": "Element,Deployment Node,Web",
                "properties": [
                  {"name": "ansible_host", "value": "10.0.1.10"},
                  {"name": "ansible_user", "value": "ubuntu"}
                ]
              },
              {
                "id": "d1",
                "name": "db-prod-01",
                "technology": "PostgreSQL 15",
                "tags": "Element,Deployment Node,Database"
              }
            ],
            "infrastructureNodes": [
              {
                "id": "lb1",
                "name": "lb-prod-01",
                "technology": "AWS ALB",
                "tags": "Element,Infrastructure Node,LoadBalancer"
              }
            ]
          }
        ]
      },
      {
        "id": "stg",
        "name": "Staging",
        "environment": "Staging",
        "children": [
          {"id": "ws1", "name": "web-staging-01"}
        ]
      }
    ]
  }
}"#;

/// Write the workspace plus an inventory source into a temp dir.
fn fixture(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("workspace.json"), WORKSPACE).unwrap();
    std::fs::write(dir.path().join("inventory.yml"), config).unwrap();
    dir
}

fn strukt() -> Command {
    Command::cargo_bin("strukt").unwrap()
}

fn list_json(dir: &TempDir, extra_args: &[&str]) -> Value {
    let output = strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml"])
        .args(extra_args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "strukt list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

#[test]
fn help_flag() {
    strukt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Structurizr"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    strukt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_emits_dynamic_inventory() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    let doc = list_json(&dir, &[]);

    let hostvars = &doc["_meta"]["hostvars"];
    for host in ["web-prod-01", "db-prod-01", "lb-prod-01", "web-staging-01"] {
        assert!(hostvars.get(host).is_some(), "missing host {host}");
    }

    assert_eq!(hostvars["web-prod-01"]["ansible_host"], "10.0.1.10");
    assert_eq!(hostvars["web-prod-01"]["ansible_user"], "ubuntu");
    assert_eq!(hostvars["web-prod-01"]["technology"], "Ubuntu 22.04");
    assert_eq!(hostvars["web-prod-01"]["structurizr_environment"], "Production");

    // Groups: environment, tags, hierarchy.
    assert!(doc["env_production"]["hosts"]
        .as_array()
        .unwrap()
        .contains(&Value::from("web-prod-01")));
    assert!(doc["tag_web"]["hosts"]
        .as_array()
        .unwrap()
        .contains(&Value::from("web-prod-01")));
    assert!(doc["eu_west"]["hosts"]
        .as_array()
        .unwrap()
        .contains(&Value::from("lb-prod-01")));

    // Structural tags never become groups.
    assert!(doc.get("tag_element").is_none());
    assert!(doc.get("tag_deployment_node").is_none());
}

#[test]
fn environment_filter_from_config() {
    let dir = fixture(
        "plugin: structurizr\nsource: ./workspace.json\nenvironment: Production\n",
    );
    let doc = list_json(&dir, &[]);

    let hostvars = &doc["_meta"]["hostvars"];
    assert!(hostvars.get("web-prod-01").is_some());
    assert!(hostvars.get("web-staging-01").is_none());
    assert!(doc.get("env_staging").is_none());
}

#[test]
fn environment_flag_overrides_config() {
    let dir = fixture(
        "plugin: structurizr\nsource: ./workspace.json\nenvironment: Production\n",
    );
    let doc = list_json(&dir, &["--environment", "Staging"]);

    let hostvars = &doc["_meta"]["hostvars"];
    assert!(hostvars.get("web-staging-01").is_some());
    assert!(hostvars.get("web-prod-01").is_none());
}

#[test]
fn technology_groups_opt_in() {
    let dir = fixture(
        "plugin: structurizr\nsource: ./workspace.json\ngroup_by_technology: true\n",
    );
    let doc = list_json(&dir, &[]);

    assert!(doc["tech_ubuntu_22_04"]["hosts"]
        .as_array()
        .unwrap()
        .contains(&Value::from("web-prod-01")));
    assert!(doc["tech_postgresql_15"]["hosts"]
        .as_array()
        .unwrap()
        .contains(&Value::from("db-prod-01")));
}

#[test]
fn infrastructure_nodes_can_be_excluded() {
    let dir = fixture(
        "plugin: structurizr\nsource: ./workspace.json\ninclude_infrastructure_nodes: false\n",
    );
    let doc = list_json(&dir, &[]);

    assert!(doc["_meta"]["hostvars"].get("lb-prod-01").is_none());
    assert!(doc["_meta"]["hostvars"].get("web-prod-01").is_some());
}

#[test]
fn property_prefix_applies() {
    let dir = fixture(
        "plugin: structurizr\nsource: ./workspace.json\nproperty_prefix: structurizr_\n",
    );
    let doc = list_json(&dir, &[]);

    // ansible_* passes through; nothing else to prefix on this host, but
    // the reserved keys must be untouched.
    assert_eq!(
        doc["_meta"]["hostvars"]["web-prod-01"]["ansible_host"],
        "10.0.1.10"
    );
}

#[test]
fn compact_list_is_single_line() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    let output = strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let _: Value = serde_json::from_str(stdout.trim_end()).unwrap();
}

#[test]
fn host_command_prints_vars() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    let output = strukt()
        .current_dir(dir.path())
        .args(["host", "-i", "inventory.yml", "web-prod-01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["ansible_host"], "10.0.1.10");
    assert_eq!(doc["structurizr_id"], "w1");
}

#[test]
fn graph_command_renders_tree() {
    let dir = fixture("plugin: structurizr\nsource: ./workspace.json\n");
    strukt()
        .current_dir(dir.path())
        .args(["graph", "-i", "inventory.yml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@all:"))
        .stdout(predicate::str::contains("@env_production:"))
        .stdout(predicate::str::contains("web-prod-01"));
}

#[test]
fn cache_round_trip_and_flush() {
    let dir = fixture("");
    let cache_dir = dir.path().join("cache");
    std::fs::write(
        dir.path().join("inventory.yml"),
        format!(
            "plugin: structurizr\nsource: ./workspace.json\ncache: true\ncache_dir: {}\n",
            cache_dir.display()
        ),
    )
    .unwrap();

    // First run populates the cache.
    let doc = list_json(&dir, &[]);
    assert!(doc["_meta"]["hostvars"].get("web-prod-01").is_some());
    assert!(cache_dir.read_dir().unwrap().next().is_some());

    // Second run is served from the cache even if the source disappears.
    std::fs::remove_file(dir.path().join("workspace.json")).unwrap();
    let doc = list_json(&dir, &[]);
    assert!(doc["_meta"]["hostvars"].get("web-prod-01").is_some());

    // --flush-cache forces a re-read, which now fails.
    strukt()
        .current_dir(dir.path())
        .args(["list", "-i", "inventory.yml", "--flush-cache"])
        .assert()
        .failure();
}

#[test]
fn init_creates_starter_file() {
    let dir = TempDir::new().unwrap();
    strukt()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("inventory.yml")).unwrap();
    assert!(content.contains("plugin: structurizr"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("inventory.yml"), "plugin: structurizr\n").unwrap();

    strukt()
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // Untouched without --force.
    let content = std::fs::read_to_string(dir.path().join("inventory.yml")).unwrap();
    assert_eq!(content, "plugin: structurizr\n");

    // --force overwrites.
    strukt()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
    let content = std::fs::read_to_string(dir.path().join("inventory.yml")).unwrap();
    assert!(content.contains("source: ./workspace.json"));
}

#[test]
fn shell_completions() {
    strukt()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strukt"));
}
