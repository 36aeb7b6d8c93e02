// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::{normalize, ActivityItem, Comment, User};

/// Classification of issues by their nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Problem with existing data or behavior.
    QualityIssue,
    /// New data or content offered for inclusion.
    Contribution,
    /// Request for access to a system or dataset.
    AccessRequest,
    /// General feedback.
    Feedback,
    /// Internal operational work.
    InternalOps,
}

impl IssueType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::QualityIssue => "quality_issue",
            IssueType::Contribution => "contribution",
            IssueType::AccessRequest => "access_request",
            IssueType::Feedback => "feedback",
            IssueType::InternalOps => "internal_ops",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "quality_issue" => Ok(IssueType::QualityIssue),
            "contribution" => Ok(IssueType::Contribution),
            "access_request" => Ok(IssueType::AccessRequest),
            "feedback" => Ok(IssueType::Feedback),
            "internal_ops" => Ok(IssueType::InternalOps),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Department responsible for handling an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Data,
    It,
    Hr,
    Access,
    Asset,
}

impl Department {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Data => "data",
            Department::It => "it",
            Department::Hr => "hr",
            Department::Access => "access",
            Department::Asset => "asset",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "data" => Ok(Department::Data),
            "it" => Ok(Department::It),
            "hr" => Ok(Department::Hr),
            "access" => Ok(Department::Access),
            "asset" => Ok(Department::Asset),
            _ => Err(Error::InvalidDepartment(s.to_string())),
        }
    }
}

/// Urgency of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
///
/// The six values form an unrestricted graph: any status may follow any
/// other. The store records transitions; restriction is the job of a
/// [`TransitionPolicy`](crate::policy::TransitionPolicy) supplied by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Initial state for new issues. Forced on creation.
    Submitted,
    /// Being triaged or evaluated.
    UnderReview,
    /// Approved for implementation.
    Accepted,
    /// Declined.
    Rejected,
    /// Work completed.
    Implemented,
    /// Resolved and archived from active views.
    Closed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Submitted => "submitted",
            Status::UnderReview => "under_review",
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
            Status::Implemented => "implemented",
            Status::Closed => "closed",
        }
    }

    /// True for every status except `rejected` and `closed`.
    pub fn is_open(&self) -> bool {
        !matches!(self, Status::Rejected | Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "submitted" => Ok(Status::Submitted),
            "under_review" => Ok(Status::UnderReview),
            "accepted" => Ok(Status::Accepted),
            "rejected" => Ok(Status::Rejected),
            "implemented" => Ok(Status::Implemented),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Kind of business entity an issue can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Firm,
    Fund,
    Deal,
    Contact,
    Dataset,
}

impl EntityType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Firm => "firm",
            EntityType::Fund => "fund",
            EntityType::Deal => "deal",
            EntityType::Contact => "contact",
            EntityType::Dataset => "dataset",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "firm" => Ok(EntityType::Firm),
            "fund" => Ok(EntityType::Fund),
            "deal" => Ok(EntityType::Deal),
            "contact" => Ok(EntityType::Contact),
            "dataset" => Ok(EntityType::Dataset),
            _ => Err(Error::InvalidEntityType(s.to_string())),
        }
    }
}

/// Reference to a business entity an issue relates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedEntity {
    /// Kind of entity.
    pub entity_type: EntityType,
    /// Entity name as known to the upstream system.
    pub name: String,
}

/// The primary entity representing a tracked request.
///
/// Issues are identified by a prefix plus a strictly increasing numeric
/// suffix (e.g., "NR-001"). Comments and activity entries are owned by the
/// issue and have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier (format: `{PREFIX}-{number}`).
    pub id: String,
    /// Short description of the request.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Classification of the issue.
    pub issue_type: IssueType,
    /// Department responsible for handling it.
    pub department: Department,
    /// Urgency.
    pub priority: Priority,
    /// Current workflow state.
    pub status: Status,
    /// Who created the issue.
    pub created_by: User,
    /// Who the issue is assigned to, if anyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified. Strictly increases on every
    /// successful mutation.
    pub updated_at: DateTime<Utc>,
    /// Business entity this issue relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity: Option<RelatedEntity>,
    /// Names of attached files (content lives with the persistence layer).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    /// Discussion, in creation order.
    pub comments: Vec<Comment>,
    /// Append-only audit trail, in causal order.
    pub activity: Vec<ActivityItem>,
    /// Monotonic counter backing comment and activity entry identifiers.
    #[serde(default)]
    pub(crate) seq: u64,
}

impl Issue {
    /// Allocate the next entry identifier for this issue.
    ///
    /// `marker` distinguishes comments (`c`) from activity entries (`a`).
    /// Both draw from the same counter, so entry identifiers are unique and
    /// strictly increasing within an issue regardless of kind.
    pub(crate) fn next_entry_id(&mut self, marker: char) -> String {
        self.seq += 1;
        format!("{}-{}", marker, self.seq)
    }

    /// Rebuild the sequence counter from stored entries.
    ///
    /// Snapshots written before the counter existed carry `seq = 0`; the
    /// counter must never fall behind an identifier already handed out.
    pub(crate) fn restore_seq(&mut self) {
        let max_entry = self
            .comments
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.activity.iter().map(|a| a.id.as_str()))
            .filter_map(|id| id.split_once('-').and_then(|(_, n)| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        self.seq = self.seq.max(max_entry);
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
