// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::models::{Comment, Issue, Role};

/// Comments a viewer with the given role may see, in stored (creation) order.
///
/// Non-internal comments are visible to everyone; internal comments only to
/// admins. Pure read-time function: nothing is mutated and storage is never
/// filtered.
pub fn visible_comments(issue: &Issue, viewer: Role) -> Vec<&Comment> {
    issue
        .comments
        .iter()
        .filter(|c| !c.internal || viewer == Role::Admin)
        .collect()
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
