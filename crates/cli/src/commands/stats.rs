// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::models::{Issue, Priority, Status};
use rt_core::IssueStore;

use crate::error::Result;

use super::open_store;

/// Collection counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// All issues.
    pub total: usize,
    /// Issues in any status except rejected/closed.
    pub open: usize,
    /// Issues with critical priority.
    pub critical: usize,
    /// Issues still in submitted.
    pub pending: usize,
}

impl Stats {
    /// Compute counters over a collection.
    pub fn collect(issues: &[Issue]) -> Self {
        Stats {
            total: issues.len(),
            open: issues.iter().filter(|i| i.status.is_open()).count(),
            critical: issues
                .iter()
                .filter(|i| i.priority == Priority::Critical)
                .count(),
            pending: issues
                .iter()
                .filter(|i| i.status == Status::Submitted)
                .count(),
        }
    }
}

pub fn run() -> Result<()> {
    let (store, _, _) = open_store()?;
    run_impl(&store)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore) -> Result<()> {
    let stats = Stats::collect(store.issues());
    println!("Total:    {}", stats.total);
    println!("Open:     {}", stats.open);
    println!("Critical: {}", stats.critical);
    println!("Pending:  {}", stats.pending);
    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
