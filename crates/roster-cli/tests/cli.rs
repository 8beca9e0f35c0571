#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `roster` command isolated from the user's config and environment
fn roster_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.current_dir(temp.path())
        .env("ROSTER_CONFIG", temp.path().join("config.toml"))
        .env_remove("ROSTER_DATA_FILE")
        .env_remove("ROSTER_REPORT_FILE")
        .env_remove("ROSTER_LOG_FILE")
        .env_remove("ROSTER_LOG");
    cmd
}

fn add(temp: &TempDir, name: &str, roll: &str, email: &str, grade: &str) {
    roster_cmd(temp)
        .args(["add", name, roll, email, grade])
        .assert()
        .success();
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_add_writes_default_csv() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["add", "Alice", "R1", "a@x.com", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student: 1"));

    assert_eq!(
        read(&temp.path().join("students.csv")),
        "ID,Name,Roll Number,Email,Grade\n1,Alice,R1,a@x.com,A\n"
    );
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice", "R1", "a@x.com", "A");
    add(&temp, "Bob", "R2", "b@x.com", "B");

    let assert = roster_cmd(&temp).args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let students: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(students.as_array().unwrap().len(), 2);
    assert_eq!(students[1]["Name"], "Bob");
    assert_eq!(students[1]["ID"], 2);
}

#[test]
fn test_show_missing_fails() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: 9"));
}

#[test]
fn test_update_one_field() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice", "R1", "a@x.com", "A");

    roster_cmd(&temp)
        .args(["update", "1", "--grade", "B+"])
        .assert()
        .success();

    roster_cmd(&temp)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade:       B+"))
        .stdout(predicate::str::contains("Email:       a@x.com"));
}

#[test]
fn test_update_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice", "R1", "a@x.com", "A");

    roster_cmd(&temp)
        .args(["update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_delete_then_add_keeps_counting() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice", "R1", "a@x.com", "A");
    add(&temp, "Bob", "R2", "b@x.com", "B");

    roster_cmd(&temp)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted student: 1"));

    roster_cmd(&temp)
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout("2\n");

    roster_cmd(&temp)
        .args(["add", "Carol", "R3", "c@x.com", "C", "--quiet"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_delete_missing_fails() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .args(["delete", "4", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: 4"));
}

#[test]
fn test_search() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice Smith", "R1", "a@x.com", "A");
    add(&temp, "Bob Jones", "R2", "b@x.com", "B");

    roster_cmd(&temp)
        .args(["search", "SMITH", "--quiet"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_report_to_custom_path() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Alice", "R1", "a@x.com", "A");
    let report = temp.path().join("out").join("report.txt");

    roster_cmd(&temp)
        .args(["report", "--output", report.to_str().unwrap()])
        .assert()
        .success();

    let content = read(&report);
    assert!(content.starts_with("Student Report - "));
    assert!(content.contains("Total Students: 1\n"));
    assert!(content.contains("Name: Alice\n"));
}

#[test]
fn test_data_file_flag() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("class-a.csv");

    roster_cmd(&temp)
        .args(["--data-file", data.to_str().unwrap()])
        .args(["add", "Alice", "R1", "a@x.com", "A"])
        .assert()
        .success();

    assert!(data.exists());
    assert!(!temp.path().join("students.csv").exists());
}

#[test]
fn test_config_set_then_used() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("configured.csv");

    roster_cmd(&temp)
        .args(["config", "set", "data_file", data.to_str().unwrap()])
        .assert()
        .success();

    add(&temp, "Alice", "R1", "a@x.com", "A");
    assert!(data.exists());

    roster_cmd(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configured.csv"));
}

#[test]
fn test_interactive_session() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .write_stdin("1\nAlice\nR1\na@x.com\nA\n1\nBob\nR2\nb@x.com\nB\n5\n1\n2\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added successfully!"))
        .stdout(predicate::str::contains("Student deleted successfully!"))
        .stdout(predicate::str::contains(
            "ID: 2, Name: Bob, Roll: R2, Email: b@x.com, Grade: B",
        ))
        .stdout(predicate::str::contains("Report generated successfully: student_report.txt"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert_eq!(
        read(&temp.path().join("students.csv")),
        "ID,Name,Roll Number,Email,Grade\n2,Bob,R2,b@x.com,B\n"
    );
    assert!(read(&temp.path().join("student_report.txt")).contains("Total Students: 1"));
}

#[test]
fn test_interactive_bad_id_and_eof() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .write_stdin("3\nseven\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid student ID 'seven'"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_malformed_csv_reports_path() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("students.csv"),
        "ID,Name,Roll Number,Email,Grade\none,Alice,R1,a@x.com,A\n",
    )
    .unwrap();

    roster_cmd(&temp)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("students.csv"))
        .stderr(predicate::str::contains("Hint: Fix the offending row by hand"));
}

#[test]
fn test_highest_id_refused_at_load() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("students.csv"),
        "ID,Name,Roll Number,Email,Grade\n4294967295,Max,R,m@x.com,A\n",
    )
    .unwrap();

    roster_cmd(&temp)
        .args(["add", "Next", "R2", "n@x.com", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2: ID 4294967295"));
}

#[test]
fn test_interactive_keeps_typed_spaces() {
    let temp = TempDir::new().unwrap();

    roster_cmd(&temp)
        .write_stdin("1\n Alice \nR1\na@x.com\nA\n7\n")
        .assert()
        .success();

    let assert = roster_cmd(&temp).args(["show", "1", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let student: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(student["Name"], " Alice ");
}
