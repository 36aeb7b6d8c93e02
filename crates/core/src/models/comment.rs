// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A discussion entry attached to an issue.
///
/// Content is stored verbatim. The internal flag is fixed at creation;
/// whether an internal comment is shown is decided at read time by
/// [`visible_comments`](crate::visibility::visible_comments), never by
/// filtering what is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Per-issue identifier (format: `c-{seq}`).
    pub id: String,
    /// The comment text, verbatim.
    pub content: String,
    /// Who wrote it.
    pub author: User,
    /// When it was written.
    pub created_at: DateTime<Utc>,
    /// Withheld from non-admin viewers when true.
    pub internal: bool,
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
