// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL snapshot of the issue collection.
//!
//! One issue per line, in store order (newest first). The collection is
//! loaded at startup and rewritten with fsync after every successful
//! mutation; the core itself defines no file format.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use rt_core::models::Issue;

use crate::error::Result;

/// Reads all issues from a snapshot file.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
pub fn load(path: &Path) -> Result<Vec<Issue>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut issues = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(&line)?;
        issues.push(issue);
    }

    tracing::debug!(count = issues.len(), "loaded snapshot");
    Ok(issues)
}

/// Writes all issues to a snapshot file, replacing existing content.
///
/// Flushed with fsync so a crash after a confirmed mutation cannot lose it.
pub fn save(path: &Path, issues: &[Issue]) -> Result<()> {
    let mut file = File::create(path)?;

    for issue in issues {
        let json = serde_json::to_string(issue)?;
        writeln!(file, "{json}")?;
    }
    file.sync_all()?;

    tracing::debug!(count = issues.len(), "saved snapshot");
    Ok(())
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
