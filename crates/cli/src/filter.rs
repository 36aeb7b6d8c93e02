// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Listing filters.
//!
//! Filtering is presentation-layer work: the core exposes the full ordered
//! collection and this module narrows it for display. All criteria are
//! conjunctive; search matches the issue ID or title, case-insensitively.

use rt_core::models::{Department, Issue, IssueType, Priority, Status};

/// Criteria for narrowing a listing. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Keep issues with this status.
    pub status: Option<Status>,
    /// Keep issues of this type.
    pub issue_type: Option<IssueType>,
    /// Keep issues routed to this department.
    pub department: Option<Department>,
    /// Keep issues with this priority.
    pub priority: Option<Priority>,
    /// Keep issues whose ID or title contains this text.
    pub search: Option<String>,
    /// Keep issues created by this user ID.
    pub created_by: Option<String>,
}

impl IssueFilter {
    /// Whether an issue satisfies every set criterion.
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            if !issue.id.to_lowercase().contains(&query)
                && !issue.title.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if self.status.is_some_and(|s| issue.status != s) {
            return false;
        }
        if self.issue_type.is_some_and(|t| issue.issue_type != t) {
            return false;
        }
        if self.department.is_some_and(|d| issue.department != d) {
            return false;
        }
        if self.priority.is_some_and(|p| issue.priority != p) {
            return false;
        }
        if let Some(creator) = &self.created_by {
            if issue.created_by.id != *creator {
                return false;
            }
        }
        true
    }

    /// Narrow a collection, preserving its order.
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
