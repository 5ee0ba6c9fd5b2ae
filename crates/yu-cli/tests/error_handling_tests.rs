//! Tests for error handling and suggestions.

#![cfg(unix)]

mod common;

use common::Project;
use predicates::prelude::*;

#[test]
fn test_error_unknown_subcommand_is_a_parse_error() {
    Project::new()
        .yu()
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"))
        .stderr(predicate::str::contains("doctor"))
        .stderr(predicate::str::contains("service"));
}

#[test]
fn test_error_shell_without_service() {
    Project::new()
        .yu()
        .arg("shell")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please provide service"))
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn test_error_shell_with_two_services() {
    Project::new()
        .yu()
        .args(["shell", "a", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("One at a time please!"));
}

#[test]
fn test_error_run_without_arguments() {
    Project::new()
        .yu()
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please provide a service"));
}

#[test]
fn test_error_service_without_names() {
    Project::new()
        .yu()
        .arg("service")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one service name"));
}

#[test]
fn test_error_invalid_service_name() {
    Project::new()
        .yu()
        .args(["test", ".."])
        .assert()
        .code(1);
}

#[test]
fn test_error_missing_config_file() {
    Project::new()
        .yu()
        .args(["--config", "missing.toml", "doctor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_missing_project_directory() {
    Project::new()
        .yu()
        .args(["-C", "does-not-exist", "start"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_error_missing_template_directory() {
    Project::new()
        .yu()
        .args(["service", "web", "--template", "no-such-template"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template directory"));
}

#[test]
fn test_error_verbose_shows_failure_hint() {
    Project::with_compose_file()
        .yu()
        .args(["-v", "doctor"])
        .env("FAKE_FAIL", "--version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please ensure you have docker-compose working",
        ))
        .stderr(predicate::str::contains("Failed check: compose version"));
}
