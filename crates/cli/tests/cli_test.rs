//! End-to-end tests for the karate-runner binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const USERS_FEATURE: &str = "\
@users
Feature: users

Background:
  * url baseUrl

Scenario: list users
  * method get

@smoke
Scenario Outline: get user <id>
  * path id
  Examples:
    | id |
    | 1  |
";

/// A Maven project with one feature file under the test classpath
fn maven_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();
    let features = temp_dir.path().join("src/test/java/users");
    fs::create_dir_all(&features).unwrap();
    let feature = features.join("users.feature");
    fs::write(&feature, USERS_FEATURE).unwrap();
    (temp_dir, feature)
}

fn karate_runner() -> Command {
    Command::cargo_bin("karate-runner").unwrap()
}

#[test]
fn test_sections_lists_scenarios() {
    let (_temp_dir, feature) = maven_project();

    karate_runner()
        .arg("sections")
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario: list users"))
        .stdout(predicate::str::contains("Scenario Outline: get user <id>"))
        .stdout(predicate::str::contains("Lines: 7-10"))
        .stdout(predicate::str::contains("Tags: @smoke"));
}

#[test]
fn test_sections_json_uses_classpath() {
    let (_temp_dir, feature) = maven_project();

    karate_runner()
        .args(["sections", "--json"])
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("classpath:users/users.feature:7"))
        .stdout(predicate::str::contains("classpath:users/users.feature:11"));
}

#[test]
fn test_resolve_finds_maven() {
    let (_temp_dir, feature) = maven_project();

    karate_runner()
        .arg("resolve")
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build system: Maven"))
        .stdout(predicate::str::contains("pom.xml"));
}

#[test]
fn test_run_dry_run_prints_maven_command() {
    let (_temp_dir, feature) = maven_project();

    karate_runner()
        .args(["run", "--dry-run"])
        .arg(format!("{}:11", feature.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("mvn test -f "))
        .stdout(predicate::str::contains(
            "-Dtest=TestRunner \"-Dkarate.options=classpath:users/users.feature:11\"",
        ))
        .stdout(predicate::str::contains("Working directory:"));
}

#[test]
fn test_run_dry_run_with_tags_on_folder() {
    let (temp_dir, _feature) = maven_project();

    karate_runner()
        .args(["run", "--dry-run", "--tags", "@smoke"])
        .arg(temp_dir.path().join("src/test/java/users"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"-Dkarate.options=--tags @smoke classpath:users\"",
        ));
}

#[test]
fn test_run_dry_run_reads_nearest_config() {
    let (temp_dir, feature) = maven_project();
    fs::write(
        temp_dir.path().join(".karate-runner.json"),
        r#"{"core": {"environment": "qa"}, "build_directory": {"clean_before_each_run": true}}"#,
    )
    .unwrap();

    karate_runner()
        .args(["run", "--dry-run"])
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("mvn clean test -f "))
        .stdout(predicate::str::contains("-Dkarate.env=qa"));
}

#[test]
fn test_run_dry_run_without_project_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let feature = temp_dir.path().join("orphan.feature");
    fs::write(&feature, "Feature: orphan\n").unwrap();

    karate_runner()
        .args(["run", "--dry-run"])
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to run"));
}

#[test]
fn test_missing_target_fails() {
    karate_runner()
        .args(["run", "/definitely/not/here.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve path"));
}

#[test]
fn test_config_init_then_show() {
    let temp_dir = TempDir::new().unwrap();

    karate_runner()
        .args(["config", "init", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(temp_dir.path().join(".karate-runner.json").is_file());

    karate_runner()
        .args(["config", "init", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    karate_runner()
        .args(["config", "show"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"to_target\": \"**/karate-reports/*.html\""));
}

#[test]
fn test_port_prints_configured_port() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".karate-runner.json"),
        r#"{"debugger": {"server_port_number": 5005}}"#,
    )
    .unwrap();

    karate_runner()
        .arg("port")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("5005\n"));
}

#[test]
fn test_dry_run_prompt_does_not_persist_runner() {
    let (temp_dir, feature) = maven_project();
    let config_path = temp_dir.path().join(".karate-runner.json");
    let original = r#"{"karate_runner": {"prompt_to_specify": true, "default": "TestRunner"}}"#;
    fs::write(&config_path, original).unwrap();

    karate_runner()
        .args(["run", "--dry-run"])
        .arg(&feature)
        .write_stdin("OtherRunner\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-Dtest=OtherRunner"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), original);
}

#[test]
fn test_reports_lists_existing_reports() {
    let (temp_dir, feature) = maven_project();
    let reports = temp_dir.path().join("target/karate-reports");
    fs::create_dir_all(reports.join("res")).unwrap();
    fs::write(reports.join("karate-summary.html"), "").unwrap();
    fs::write(reports.join("res/app.js"), "").unwrap();

    karate_runner()
        .arg("reports")
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("karate-summary.html"))
        .stdout(predicate::str::contains("app.js").not());
}

#[test]
fn test_reports_before_any_run() {
    let (_temp_dir, feature) = maven_project();

    karate_runner()
        .arg("reports")
        .arg(&feature)
        .assert()
        .success()
        .stdout(predicate::str::contains("No reports matching **/karate-reports/*.html"));
}
