//! # CLI Smoke Tests
//!
//! Binary-level checks through assert_cmd. Kept to paths that cannot touch
//! a real `code` install: help output and the config-error short circuit.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_shows_overview() {
    // Long help: the long_about text plus the configuration appendix
    Command::cargo_bin("qx")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "disables a configured set of VS Code extensions",
        ))
        .stdout(predicate::str::contains(".vscode/ext.config.json"));
}

#[test]
fn test_short_help_shows_about_line() {
    Command::cargo_bin("qx")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workspace-scoped extension toggler",
        ));
}

#[test]
fn test_apply_without_config_reports_and_exits_cleanly() {
    let env = TestEnv::new();

    // Config errors are reported, not propagated: exit code stays 0
    Command::cargo_bin("qx")
        .unwrap()
        .arg("apply")
        .arg(env.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No config file found"));
}

#[test]
fn test_apply_with_empty_disabled_notifies() {
    let env = TestEnv::new();
    env.write_config(r#"{"disabled": []}"#);

    Command::cargo_bin("qx")
        .unwrap()
        .arg("apply")
        .arg(env.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No extensions to disable"));
}

#[test]
fn test_apply_rejects_missing_workspace() {
    Command::cargo_bin("qx")
        .unwrap()
        .arg("apply")
        .arg("/definitely/not/a/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace folder found"));
}
