// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use rt_core::models::{Department, IssueType, Priority, Status};
use rt_core::IssueStore;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_issue_line;
use crate::error::Result;
use crate::filter::IssueFilter;

use super::open_store;

/// JSON representation of an issue for list output.
#[derive(Serialize)]
struct ListIssueJson {
    id: String,
    issue_type: IssueType,
    status: Status,
    priority: Priority,
    department: Department,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<String>,
}

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson {
    issues: Vec<ListIssueJson>,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    status: Option<String>,
    issue_type: Option<String>,
    department: Option<String>,
    priority: Option<String>,
    search: Option<String>,
    mine: bool,
    output: OutputFormat,
) -> Result<()> {
    let (store, config, _) = open_store()?;
    run_impl(
        &store, &config, status, issue_type, department, priority, search, mine, output,
    )
}

/// Internal implementation that accepts the store/config for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    store: &IssueStore,
    config: &Config,
    status: Option<String>,
    issue_type: Option<String>,
    department: Option<String>,
    priority: Option<String>,
    search: Option<String>,
    mine: bool,
    output: OutputFormat,
) -> Result<()> {
    let filter = build_filter(
        &config.user.id,
        status,
        issue_type,
        department,
        priority,
        search,
        mine,
    )?;
    let issues = filter.apply(store.issues());

    match output {
        OutputFormat::Json => {
            let listing = ListOutputJson {
                issues: issues
                    .iter()
                    .map(|i| ListIssueJson {
                        id: i.id.clone(),
                        issue_type: i.issue_type,
                        status: i.status,
                        priority: i.priority,
                        department: i.department,
                        title: i.title.clone(),
                        assignee: i.assignee.as_ref().map(|u| u.id.clone()),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&listing)?);
        }
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("No issues");
            } else {
                for issue in issues {
                    println!("{}", format_issue_line(issue));
                }
            }
        }
    }
    Ok(())
}

/// Build a filter from raw CLI arguments.
pub(crate) fn build_filter(
    acting_user_id: &str,
    status: Option<String>,
    issue_type: Option<String>,
    department: Option<String>,
    priority: Option<String>,
    search: Option<String>,
    mine: bool,
) -> Result<IssueFilter> {
    Ok(IssueFilter {
        status: status.as_deref().map(str::parse).transpose()?,
        issue_type: issue_type.as_deref().map(str::parse).transpose()?,
        department: department.as_deref().map(str::parse).transpose()?,
        priority: priority.as_deref().map(str::parse).transpose()?,
        search,
        created_by: mine.then(|| acting_user_id.to_string()),
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
