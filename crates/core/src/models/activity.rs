// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::{Status, User};

/// Types of mutations that can be recorded in the audit trail.
///
/// Every mutation applied to an issue appends exactly one activity entry
/// with one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Issue was created.
    Created,
    /// Status changed.
    StatusChange,
    /// A comment was added.
    Comment,
    /// The issue was assigned.
    Assignment,
}

impl ActivityKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Created => "created",
            ActivityKind::StatusChange => "status_change",
            ActivityKind::Comment => "comment",
            ActivityKind::Assignment => "assignment",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(ActivityKind::Created),
            "status_change" => Ok(ActivityKind::StatusChange),
            "comment" => Ok(ActivityKind::Comment),
            "assignment" => Ok(ActivityKind::Assignment),
            _ => Err(Error::InvalidActivityKind(s.to_string())),
        }
    }
}

/// Kind-dependent payload of an activity entry.
///
/// `from`/`to` are set for status changes, `to` alone for assignments, and
/// `comment` carries the comment text for comment entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    /// Previous value (status changes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// New value (status changes, assignments).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Comment text (comment entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An immutable audit record describing one mutation applied to an issue.
///
/// Entries are append-only: once pushed onto an issue's activity sequence
/// they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Per-issue identifier (format: `a-{seq}`).
    pub id: String,
    /// What kind of mutation occurred.
    pub kind: ActivityKind,
    /// Who performed the mutation.
    pub actor: User,
    /// When it occurred.
    pub timestamp: DateTime<Utc>,
    /// Kind-dependent payload.
    #[serde(default)]
    pub details: ActivityDetails,
}

impl ActivityItem {
    /// Creates an entry with an empty details record.
    pub fn new(id: String, kind: ActivityKind, actor: User, timestamp: DateTime<Utc>) -> Self {
        ActivityItem {
            id,
            kind,
            actor,
            timestamp,
            details: ActivityDetails::default(),
        }
    }

    /// Sets `from`/`to` for a status change (builder pattern).
    pub fn with_transition(mut self, from: Status, to: Status) -> Self {
        self.details.from = Some(from.as_str().to_string());
        self.details.to = Some(to.as_str().to_string());
        self
    }

    /// Sets `to` for an assignment (builder pattern). No `from` is recorded.
    pub fn with_assignee(mut self, name: &str) -> Self {
        self.details.to = Some(name.to_string());
        self
    }

    /// Sets the comment text for a comment entry (builder pattern).
    pub fn with_comment(mut self, content: &str) -> Self {
        self.details.comment = Some(content.to_string());
        self
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
