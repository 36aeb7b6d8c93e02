// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// Derive the next issue ID from the identifiers already in the collection.
///
/// Scans for the greatest numeric suffix among IDs carrying this prefix and
/// returns `{prefix}-{max + 1}`, zero-padded to at least 3 digits (the width
/// grows naturally past 999). An empty collection yields `{prefix}-001`.
/// Suffixes that fail to parse are ignored.
///
/// Callers must evaluate this atomically with insertion; the store does so
/// by computing it inside the exclusive-borrow create operation.
pub fn next_issue_id<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a str>) -> String {
    let marker = format!("{}-", prefix);
    let max = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(marker.as_str()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{:03}", prefix, max + 1)
}

/// Validate that a prefix is valid (2+ uppercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
