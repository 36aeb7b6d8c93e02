// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rt_core::IssueStore;

use crate::error::{Error, Result};
use crate::snapshot;

use super::open_store;

pub fn run(filepath: &str) -> Result<()> {
    let (store, _, _) = open_store()?;
    run_impl(&store, filepath)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore, filepath: &str) -> Result<()> {
    if filepath.trim().is_empty() {
        return Err(Error::ExportPathEmpty);
    }

    snapshot::save(Path::new(filepath), store.issues())?;
    println!("Exported {} issues to {}", store.len(), filepath);
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
