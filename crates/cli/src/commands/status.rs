// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::models::Status;
use rt_core::IssueStore;

use crate::config::Config;
use crate::error::Result;

use super::{open_store, persist};

pub fn run(id: &str, status: &str) -> Result<()> {
    let (mut store, config, work_dir) = open_store()?;
    let (from, to) = run_impl(&mut store, &config, id, status)?;
    persist(&work_dir, &store)?;
    println!("{}: {} -> {}", id, from, to);
    Ok(())
}

/// Internal implementation that accepts the store/config for testing.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    config: &Config,
    id: &str,
    status: &str,
) -> Result<(Status, Status)> {
    let target: Status = status.parse()?;
    let from = store.get(id)?.status;
    store.transition(id, &config.user, target)?;
    Ok((from, target))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
