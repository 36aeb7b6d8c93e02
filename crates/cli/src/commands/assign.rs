// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::IssueStore;

use crate::config::Config;
use crate::error::Result;

use super::{open_store, persist};

pub fn run(id: &str, user_id: &str) -> Result<()> {
    let (mut store, config, work_dir) = open_store()?;
    let assignee = run_impl(&mut store, &config, id, user_id)?;
    persist(&work_dir, &store)?;
    println!("Assigned {} to {}", id, assignee);
    Ok(())
}

/// Internal implementation that accepts the store/config for testing.
///
/// Returns the assignee's display name.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    config: &Config,
    id: &str,
    user_id: &str,
) -> Result<String> {
    let directory = config.directory();
    let issue = store.assign(id, &config.user, user_id, &directory)?;
    Ok(issue
        .assignee
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default())
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
