// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end tests for the `rt` binary.
//!
//! Every invocation is a separate process, so these also exercise the
//! load-at-startup / save-after-mutation persistence contract.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rt").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn init_admin(dir: &TempDir) {
    rt(dir)
        .args(["init", "--user", "alice", "--name", "Alice Admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized reqtrail"));
}

#[test]
fn test_full_issue_lifecycle() {
    let dir = TempDir::new().unwrap();
    init_admin(&dir);

    rt(&dir)
        .args(["new", "Broken export", "-t", "quality_issue", "-d", "data", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created NR-001"));

    rt(&dir)
        .args(["new", "Fund access", "-t", "access_request", "-d", "access"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created NR-002"));

    // Newest first
    let list = rt(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    let first = stdout.find("NR-002").unwrap();
    let second = stdout.find("NR-001").unwrap();
    assert!(first < second, "NR-002 should list before NR-001");

    rt(&dir)
        .args(["status", "NR-001", "accepted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NR-001: submitted -> accepted"));

    rt(&dir)
        .args(["comment", "NR-001", "fix scheduled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commented on NR-001"));

    rt(&dir)
        .args(["assign", "NR-001", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned NR-001 to Alice Admin"));

    rt(&dir)
        .args(["log", "NR-001"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("status_change submitted -> accepted")
                .and(predicate::str::contains("comment \"fix scheduled\""))
                .and(predicate::str::contains("assignment to Alice Admin")),
        );

    rt(&dir)
        .args(["show", "NR-001"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[quality_issue] NR-001")
                .and(predicate::str::contains("Status: accepted"))
                .and(predicate::str::contains("Assignee: Alice Admin")),
        );

    rt(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total:    2")
                .and(predicate::str::contains("Pending:  1")),
        );
}

#[test]
fn test_internal_comment_visible_only_in_admin_show() {
    let dir = TempDir::new().unwrap();
    init_admin(&dir);

    rt(&dir)
        .args(["new", "Quiet issue", "-t", "feedback", "-d", "it"])
        .assert()
        .success();

    rt(&dir)
        .args(["comment", "NR-001", "internal note", "--internal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added internal comment to NR-001"));

    // The admin actor sees the internal comment.
    rt(&dir)
        .args(["show", "NR-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("internal note"));
}

#[test]
fn test_non_admin_cannot_flag_internal() {
    let dir = TempDir::new().unwrap();
    rt(&dir)
        .args(["init", "--user", "carol", "--role", "user"])
        .assert()
        .success();

    rt(&dir)
        .args(["new", "Plain issue", "-t", "feedback", "-d", "it"])
        .assert()
        .success();

    rt(&dir)
        .args(["comment", "NR-001", "sneaky", "--internal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("internal comments require an admin actor"));
}

#[test]
fn test_unknown_targets_are_reported() {
    let dir = TempDir::new().unwrap();
    init_admin(&dir);

    rt(&dir)
        .args(["status", "NR-999", "accepted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: NR-999"));

    rt(&dir)
        .args(["new", "Only issue", "-t", "feedback", "-d", "it"])
        .assert()
        .success();

    rt(&dir)
        .args(["assign", "NR-001", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown user: ghost"));

    // The failed assign left nothing behind.
    rt(&dir)
        .args(["log", "NR-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assignment").not());
}

#[test]
fn test_uninitialized_directory_reports_hint() {
    let dir = TempDir::new().unwrap();
    rt(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_list_filters_and_search() {
    let dir = TempDir::new().unwrap();
    init_admin(&dir);

    rt(&dir)
        .args(["new", "Broken export", "-t", "quality_issue", "-d", "data"])
        .assert()
        .success();
    rt(&dir)
        .args(["new", "Fund access", "-t", "access_request", "-d", "access"])
        .assert()
        .success();

    rt(&dir)
        .args(["list", "--search", "export"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NR-001").and(predicate::str::contains("NR-002").not()),
        );

    rt(&dir)
        .args(["list", "-d", "access"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NR-002").and(predicate::str::contains("NR-001").not()),
        );

    rt(&dir)
        .args(["list", "-s", "closed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues"));
}

#[test]
fn test_export_writes_jsonl() {
    let dir = TempDir::new().unwrap();
    init_admin(&dir);

    rt(&dir)
        .args(["new", "Only issue", "-t", "feedback", "-d", "it"])
        .assert()
        .success();

    rt(&dir)
        .args(["export", "out.jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 issues to out.jsonl"));

    let content = std::fs::read_to_string(dir.path().join("out.jsonl")).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("\"id\":\"NR-001\""));
}
