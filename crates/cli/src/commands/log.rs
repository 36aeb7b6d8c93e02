// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::IssueStore;

use crate::display::format_activity_item;
use crate::error::Result;

use super::open_store;

pub fn run(id: &str) -> Result<()> {
    let (store, _, _) = open_store()?;
    run_impl(&store, id)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore, id: &str) -> Result<()> {
    let issue = store.get(id)?;
    for item in &issue.activity {
        println!("{}", format_activity_item(item));
    }
    Ok(())
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
