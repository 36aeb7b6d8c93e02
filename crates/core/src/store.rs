// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The in-memory entity store and its mutation operations.
//!
//! [`IssueStore`] owns the ordered collection (newest first) and is the only
//! way to mutate it. Every mutation appends exactly one activity entry and
//! strictly bumps the issue's `updated_at`.
//!
//! The store is a single-writer structure: mutations take `&mut self`, so
//! identifier assignment is atomic with insertion, mutations targeting the
//! same issue can never interleave, and readers holding `&self` observe
//! either the pre- or post-mutation state, never a partial one. Callers
//! backing concurrent writers wrap the store in a mutex or own it from a
//! single task.

use chrono::{DateTime, TimeDelta, Utc};

use crate::directory::Directory;
use crate::error::{Error, Result};
use crate::id::{next_issue_id, validate_prefix};
use crate::models::{
    ActivityItem, ActivityKind, Comment, Department, Issue, IssueType, Priority, RelatedEntity,
    Status, User,
};
use crate::policy::{TransitionPolicy, Unrestricted};

/// Caller-supplied fields for issue creation.
///
/// Status is absent on purpose: new issues always start `submitted`.
/// Required-field validation (non-empty title and so on) is the calling
/// layer's responsibility.
#[derive(Debug, Clone)]
pub struct NewIssue {
    /// Short description of the request.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Classification.
    pub issue_type: IssueType,
    /// Department responsible for handling it.
    pub department: Department,
    /// Urgency.
    pub priority: Priority,
    /// Business entity this issue relates to, if any.
    pub related_entity: Option<RelatedEntity>,
    /// Names of attached files.
    pub attachments: Vec<String>,
}

/// Holds the ordered issue collection and applies all mutations.
pub struct IssueStore {
    prefix: String,
    issues: Vec<Issue>,
    policy: Box<dyn TransitionPolicy>,
}

impl IssueStore {
    /// Creates an empty store with the default (unrestricted) policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the prefix is not 2+ uppercase
    /// alphanumeric with at least one letter.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        Self::with_policy(prefix, Box::new(Unrestricted))
    }

    /// Creates an empty store with a caller-supplied transition policy.
    pub fn with_policy(prefix: impl Into<String>, policy: Box<dyn TransitionPolicy>) -> Result<Self> {
        let prefix = prefix.into();
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(IssueStore {
            prefix,
            issues: Vec::new(),
            policy,
        })
    }

    /// Rebuilds a store from a previously persisted collection.
    ///
    /// Issues are kept in the given order (persisted order is newest first).
    /// Sequence counters are restored from stored entry identifiers so
    /// snapshots written before the counter existed stay collision-free.
    pub fn from_issues(prefix: impl Into<String>, mut issues: Vec<Issue>) -> Result<Self> {
        let mut store = Self::new(prefix)?;
        for issue in &mut issues {
            issue.restore_seq();
        }
        store.issues = issues;
        Ok(store)
    }

    /// The configured ID prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The full ordered collection, newest first.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of issues in the store.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when the store holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Looks up an issue by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IssueNotFound`] if no issue has this ID.
    pub fn get(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Creates a new issue.
    ///
    /// The ID comes from the identifier generator, status is forced to
    /// `submitted` (callers cannot pick one), `created_at == updated_at`,
    /// and the audit trail starts with a single `created` entry authored by
    /// the actor. The issue is inserted at the front so listings read
    /// newest first.
    pub fn create(&mut self, actor: &User, new: NewIssue) -> Result<&Issue> {
        let now = Utc::now();
        let id = next_issue_id(&self.prefix, self.issues.iter().map(|i| i.id.as_str()));

        let mut issue = Issue {
            id,
            title: new.title,
            description: new.description,
            issue_type: new.issue_type,
            department: new.department,
            priority: new.priority,
            status: Status::Submitted,
            created_by: actor.clone(),
            assignee: None,
            created_at: now,
            updated_at: now,
            related_entity: new.related_entity,
            attachments: new.attachments,
            comments: Vec::new(),
            activity: Vec::new(),
            seq: 0,
        };
        let entry_id = issue.next_entry_id('a');
        issue
            .activity
            .push(ActivityItem::new(entry_id, ActivityKind::Created, actor.clone(), now));

        self.issues.insert(0, issue);
        Ok(&self.issues[0])
    }

    /// Sets an issue's status.
    ///
    /// Any target is accepted unless the configured policy vetoes it;
    /// re-asserting the current status is allowed and still recorded. The
    /// audit entry carries the previous status as `from` and the target as
    /// `to`.
    ///
    /// # Errors
    ///
    /// [`Error::IssueNotFound`] if the issue is absent (the collection is
    /// left unchanged), [`Error::TransitionRejected`] if the policy vetoes.
    pub fn transition(&mut self, id: &str, actor: &User, target: Status) -> Result<&Issue> {
        let from = self.get(id)?.status;
        if !self.policy.allows(from, target) {
            return Err(Error::TransitionRejected {
                from: from.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }

        let issue = self.get_mut(id)?;
        let now = mutation_timestamp(issue.updated_at);
        issue.status = target;
        issue.updated_at = now;
        let entry_id = issue.next_entry_id('a');
        issue.activity.push(
            ActivityItem::new(entry_id, ActivityKind::StatusChange, actor.clone(), now)
                .with_transition(from, target),
        );
        Ok(issue)
    }

    /// Appends a comment to an issue.
    ///
    /// Content is stored verbatim (no trimming, no emptiness check). The
    /// audit entry duplicates the comment text so the trail stays readable
    /// on its own.
    ///
    /// # Errors
    ///
    /// [`Error::IssueNotFound`] if the issue is absent.
    pub fn add_comment(
        &mut self,
        id: &str,
        actor: &User,
        content: &str,
        internal: bool,
    ) -> Result<&Issue> {
        let issue = self.get_mut(id)?;
        let now = mutation_timestamp(issue.updated_at);

        let comment_id = issue.next_entry_id('c');
        issue.comments.push(Comment {
            id: comment_id,
            content: content.to_string(),
            author: actor.clone(),
            created_at: now,
            internal,
        });

        let entry_id = issue.next_entry_id('a');
        issue.activity.push(
            ActivityItem::new(entry_id, ActivityKind::Comment, actor.clone(), now)
                .with_comment(content),
        );
        issue.updated_at = now;
        Ok(issue)
    }

    /// Assigns an issue to a user from the directory.
    ///
    /// The candidate is resolved first: an unknown ID fails the whole
    /// operation before anything is touched, so no activity entry is
    /// produced. The audit entry records only the new assignee's name as
    /// `to`; no previous assignee is recorded.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownUser`] if the candidate is not in the directory,
    /// [`Error::IssueNotFound`] if the issue is absent.
    pub fn assign(
        &mut self,
        id: &str,
        actor: &User,
        assignee_id: &str,
        directory: &Directory,
    ) -> Result<&Issue> {
        let assignee = directory
            .resolve(assignee_id)
            .ok_or_else(|| Error::UnknownUser(assignee_id.to_string()))?
            .clone();

        let issue = self.get_mut(id)?;
        let now = mutation_timestamp(issue.updated_at);
        let entry_id = issue.next_entry_id('a');
        issue.activity.push(
            ActivityItem::new(entry_id, ActivityKind::Assignment, actor.clone(), now)
                .with_assignee(&assignee.name),
        );
        issue.assignee = Some(assignee);
        issue.updated_at = now;
        Ok(issue)
    }
}

/// Timestamp for a mutation, guaranteed strictly after the previous one.
///
/// Wall-clock time alone can repeat at sub-millisecond mutation rates;
/// `updated_at` must strictly increase on every successful mutation.
fn mutation_timestamp(prev: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > prev {
        now
    } else {
        prev + TimeDelta::microseconds(1)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
