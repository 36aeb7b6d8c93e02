// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::{visible_comments, IssueStore};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_issue_details;
use crate::error::Result;

use super::open_store;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (store, config, _) = open_store()?;
    run_impl(&store, &config, id, output)
}

/// Internal implementation that accepts the store/config for testing.
///
/// Comments are filtered through the visibility rule for the acting user's
/// role in both output formats.
pub(crate) fn run_impl(
    store: &IssueStore,
    config: &Config,
    id: &str,
    output: OutputFormat,
) -> Result<()> {
    let issue = store.get(id)?;
    let visible = visible_comments(issue, config.user.role);

    match output {
        OutputFormat::Json => {
            let mut shown = issue.clone();
            shown.comments = visible.into_iter().cloned().collect();
            println!("{}", serde_json::to_string(&shown)?);
        }
        OutputFormat::Text => {
            println!("{}", format_issue_details(issue, &visible));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
