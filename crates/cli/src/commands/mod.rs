// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assign;
pub mod comment;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod show;
pub mod stats;
pub mod status;
pub mod users;

use std::path::{Path, PathBuf};

use rt_core::IssueStore;

use crate::config::{find_work_dir, get_snapshot_path, Config};
use crate::error::Result;
use crate::snapshot;

/// Helper to open the store from the current context.
pub fn open_store() -> Result<(IssueStore, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let issues = snapshot::load(&get_snapshot_path(&work_dir))?;
    let store = IssueStore::from_issues(config.prefix.clone(), issues)?;
    Ok((store, config, work_dir))
}

/// Persist the collection after a successful mutation.
///
/// Every mutation command goes through here, so a change is on disk before
/// its confirmation prints.
pub fn persist(work_dir: &Path, store: &IssueStore) -> Result<()> {
    snapshot::save(&get_snapshot_path(work_dir), store.issues())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
