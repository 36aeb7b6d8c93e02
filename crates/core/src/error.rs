// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rt-core library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("unknown user: {0}\n  hint: the assignee must exist in the user directory")]
    UnknownUser(String),

    #[error("transition rejected by policy: {from} -> {to}")]
    TransitionRejected { from: String, to: String },

    #[error("invalid prefix: must be 2+ uppercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("invalid status: '{0}'\n  hint: valid statuses are: submitted, under_review, accepted, rejected, implemented, closed")]
    InvalidStatus(String),

    #[error("invalid issue type: '{0}'\n  hint: valid types are: quality_issue, contribution, access_request, feedback, internal_ops")]
    InvalidIssueType(String),

    #[error("invalid department: '{0}'\n  hint: valid departments are: data, it, hr, access, asset")]
    InvalidDepartment(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, critical")]
    InvalidPriority(String),

    #[error("invalid entity type: '{0}'\n  hint: valid entity types are: firm, fund, deal, contact, dataset")]
    InvalidEntityType(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: admin, reviewer, user")]
    InvalidRole(String),

    #[error("invalid activity kind: '{0}'")]
    InvalidActivityKind(String),
}

/// A specialized Result type for rt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
