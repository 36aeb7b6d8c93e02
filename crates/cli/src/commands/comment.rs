// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::IssueStore;

use crate::config::Config;
use crate::error::Result;
use crate::validate::{validate_comment, validate_internal_flag};

use super::{open_store, persist};

pub fn run(id: &str, content: &str, internal: bool) -> Result<()> {
    let (mut store, config, work_dir) = open_store()?;
    run_impl(&mut store, &config, id, content, internal)?;
    persist(&work_dir, &store)?;

    if internal {
        println!("Added internal comment to {}", id);
    } else {
        println!("Commented on {}", id);
    }
    Ok(())
}

/// Internal implementation that accepts the store/config for testing.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    config: &Config,
    id: &str,
    content: &str,
    internal: bool,
) -> Result<()> {
    validate_comment(content)?;
    validate_internal_flag(internal, config.user.role)?;

    store.add_comment(id, &config.user, content, internal)?;
    Ok(())
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
