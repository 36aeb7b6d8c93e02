// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! This module provides a `TestContext` that wraps an in-memory store and a
//! default config, enabling commands to be tested without requiring actual
//! `.reqtrail/` directory setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     let id = ctx.create_issue("My issue");
//!
//!     // Test command logic using ctx.store and ctx.config
//! }
//! ```

use std::path::PathBuf;

use rt_core::models::{Role, User};
use rt_core::IssueStore;
use tempfile::TempDir;

use crate::config::Config;

/// Build a user with a derived email address.
pub fn user(id: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role,
    }
}

/// Test context providing an in-memory store and default config for testing.
pub struct TestContext {
    pub store: IssueStore,
    pub config: Config,
    pub work_dir: PathBuf,
    _temp_dir: TempDir, // Keep alive for duration of test
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a test context acting as an admin, with a directory of three
    /// users (admin, reviewer, regular user).
    pub fn new() -> Self {
        Self::with_role(Role::Admin)
    }

    /// Create a test context whose acting user has the given role.
    pub fn with_role(role: Role) -> Self {
        let acting = user("alice", "Alice Admin", role);
        let mut config = Config::new("NR".to_string(), acting).expect("Failed to create config");
        config.users.push(user("bob", "Bob Reviewer", Role::Reviewer));
        config.users.push(user("carol", "Carol User", Role::User));

        let store = IssueStore::new(config.prefix.clone()).expect("Failed to create store");
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        TestContext {
            store,
            config,
            work_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Create an issue with default classification and return its ID.
    pub fn create_issue(&mut self, title: &str) -> String {
        crate::commands::new::run_impl(
            &mut self.store,
            &self.config,
            title.to_string(),
            "feedback",
            "it",
            "medium",
            None,
            None,
            Vec::new(),
        )
        .expect("Failed to create issue")
    }
}

#[test]
fn test_persist_round_trips_through_snapshot() {
    let mut ctx = TestContext::new();
    ctx.create_issue("first");
    ctx.create_issue("second");

    super::persist(&ctx.work_dir, &ctx.store).unwrap();

    let loaded = crate::snapshot::load(&crate::config::get_snapshot_path(&ctx.work_dir)).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "NR-002");
    assert_eq!(loaded[1].id, "NR-001");
}
