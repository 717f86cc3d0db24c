use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn custledger() -> Command {
    let mut cmd = Command::cargo_bin("custledger").unwrap();
    cmd.env_remove("CUSTLEDGER__STORE__CAPACITY")
        .env_remove("CUSTLEDGER__STORE__SEED_DEFAULTS")
        .env_remove("CUSTLEDGER__DISPLAY__ADDRESS_WIDTH");
    cmd
}

#[test]
fn add_search_delete_session() {
    let script = "\
1
101
Alice Johnson
AJ101
123 Maple St.
1
102
Bob Smith
BS102
456 Oak Ave.
3
bob
6
101
y
2
8
y
";
    let output = custledger()
        .args(["shell", "--no-seed"])
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout);
    assert_eq!(out.matches("Customer added successfully!").count(), 2);
    assert!(out.contains("Customer deleted successfully."));
    assert!(out.contains("Goodbye!"));

    // the final view lists only Bob
    let view = out.rsplit("Enter your choice: ").nth(1).unwrap();
    assert!(view.contains("Bob Smith"));
    assert!(!view.contains("Alice Johnson"));
}

#[test]
fn closed_stdin_ends_cleanly() {
    custledger()
        .args(["shell", "--no-seed"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn seeded_shell_shows_default_customers() {
    custledger()
        .arg("shell")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Johnson").and(predicate::str::contains("Erin O'Neil")));
}

#[test]
fn capacity_flag_limits_adds() {
    let script = "1\n1\nOne\nO1\n\n1\n";
    custledger()
        .args(["shell", "--no-seed", "--capacity", "1"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum customer limit reached."));
}

#[test]
fn seeding_stops_at_small_capacity() {
    let output = custledger()
        .args(["shell", "--capacity", "3"])
        .write_stdin("2\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("Alice Johnson"));
    assert!(out.contains("Bob Smith"));
    assert!(out.contains("Carla Gomez"));
    assert!(!out.contains("Dmitri Petrov"));
    assert!(!out.contains("Erin O'Neil"));
}

#[test]
fn invalid_code_is_reported_not_fatal() {
    custledger()
        .args(["shell", "--no-seed"])
        .write_stdin("1\n5\nNina\n12345\n\n2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid code")
                .and(predicate::str::contains("No customers found.")),
        );
}

#[test]
fn list_sorted_json() {
    let output = custledger()
        .args(["list", "--sort", "id", "--desc", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<i64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![105, 104, 103, 102, 101]);
}

#[test]
fn config_file_sets_capacity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custledger.toml");
    fs::write(&path, "[store]\ncapacity = 5\nseed_defaults = true\n").unwrap();
    // five seeded customers fill the store
    custledger()
        .arg("--config")
        .arg(&path)
        .arg("shell")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum customer limit reached."));
}

#[test]
fn env_overrides_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custledger.toml");
    fs::write(&path, "[store]\ncapacity = 5\n").unwrap();
    custledger()
        .env("CUSTLEDGER__STORE__CAPACITY", "50")
        .arg("--config")
        .arg(&path)
        .arg("shell")
        .write_stdin("1\n200\nNew Person\nNP200\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer added successfully!"));
}
