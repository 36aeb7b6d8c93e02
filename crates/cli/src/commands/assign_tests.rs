// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use rt_core::models::ActivityKind;

use crate::commands::testing::TestContext;
use crate::error::Error;

use super::run_impl;

#[test]
fn test_assign_known_user() {
    let mut ctx = TestContext::new();
    let id = ctx.create_issue("A");

    let name = run_impl(&mut ctx.store, &ctx.config, &id, "bob").unwrap();

    assert_eq!(name, "Bob Reviewer");
    let issue = ctx.store.get(&id).unwrap();
    assert_eq!(issue.assignee.as_ref().unwrap().id, "bob");
    let entry = issue.activity.last().unwrap();
    assert_eq!(entry.kind, ActivityKind::Assignment);
    assert_eq!(entry.details.to.as_deref(), Some("Bob Reviewer"));
}

#[test]
fn test_assign_to_acting_user() {
    let mut ctx = TestContext::new();
    let id = ctx.create_issue("A");

    // The acting user is always part of the directory.
    let name = run_impl(&mut ctx.store, &ctx.config, &id, "alice").unwrap();
    assert_eq!(name, "Alice Admin");
}

#[test]
fn test_assign_unknown_user_changes_nothing() {
    let mut ctx = TestContext::new();
    let id = ctx.create_issue("A");

    let result = run_impl(&mut ctx.store, &ctx.config, &id, "ghost");

    assert!(matches!(
        result,
        Err(Error::Core(rt_core::Error::UnknownUser(_)))
    ));
    let issue = ctx.store.get(&id).unwrap();
    assert!(issue.assignee.is_none());
    assert_eq!(issue.activity.len(), 1);
}

#[test]
fn test_assign_unknown_issue() {
    let mut ctx = TestContext::new();
    let result = run_impl(&mut ctx.store, &ctx.config, "NR-999", "bob");
    assert!(matches!(
        result,
        Err(Error::Core(rt_core::Error::IssueNotFound(_)))
    ));
}
