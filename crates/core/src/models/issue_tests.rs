// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

// IssueType tests
#[parameterized(
    quality_issue = { IssueType::QualityIssue, "quality_issue" },
    contribution = { IssueType::Contribution, "contribution" },
    access_request = { IssueType::AccessRequest, "access_request" },
    feedback = { IssueType::Feedback, "feedback" },
    internal_ops = { IssueType::InternalOps, "internal_ops" },
)]
fn test_issue_type_as_str(issue_type: IssueType, expected: &str) {
    assert_eq!(issue_type.as_str(), expected);
    assert_eq!(issue_type.to_string(), expected);
}

#[parameterized(
    snake = { "quality_issue", IssueType::QualityIssue },
    spaced = { "Quality Issue", IssueType::QualityIssue },
    hyphenated = { "access-request", IssueType::AccessRequest },
    upper = { "FEEDBACK", IssueType::Feedback },
    mixed = { "Internal Ops", IssueType::InternalOps },
)]
fn test_issue_type_from_str_valid(input: &str, expected: IssueType) {
    assert_eq!(input.parse::<IssueType>().unwrap(), expected);
}

#[parameterized(
    invalid = { "invalid" },
    empty = { "" },
    bug = { "bug" },
)]
fn test_issue_type_from_str_invalid(input: &str) {
    assert!(input.parse::<IssueType>().is_err());
}

// Department tests
#[parameterized(
    data = { "data", Department::Data },
    it_upper = { "IT", Department::It },
    hr = { "HR", Department::Hr },
    access = { "Access", Department::Access },
    asset = { "asset", Department::Asset },
)]
fn test_department_from_str_valid(input: &str, expected: Department) {
    assert_eq!(input.parse::<Department>().unwrap(), expected);
}

#[test]
fn test_department_from_str_invalid() {
    assert!("finance".parse::<Department>().is_err());
}

// Priority tests
#[parameterized(
    low = { Priority::Low, "low" },
    medium = { Priority::Medium, "medium" },
    high = { Priority::High, "high" },
    critical = { Priority::Critical, "critical" },
)]
fn test_priority_as_str(priority: Priority, expected: &str) {
    assert_eq!(priority.as_str(), expected);
    assert_eq!(priority.to_string(), expected);
}

#[test]
fn test_priority_from_str_case_insensitive() {
    assert_eq!("Critical".parse::<Priority>().unwrap(), Priority::Critical);
    assert!("urgent".parse::<Priority>().is_err());
}

// Status tests
#[parameterized(
    submitted = { Status::Submitted, "submitted" },
    under_review = { Status::UnderReview, "under_review" },
    accepted = { Status::Accepted, "accepted" },
    rejected = { Status::Rejected, "rejected" },
    implemented = { Status::Implemented, "implemented" },
    closed = { Status::Closed, "closed" },
)]
fn test_status_as_str(status: Status, expected: &str) {
    assert_eq!(status.as_str(), expected);
    assert_eq!(status.to_string(), expected);
}

#[parameterized(
    snake = { "under_review", Status::UnderReview },
    spaced = { "Under Review", Status::UnderReview },
    upper = { "SUBMITTED", Status::Submitted },
    hyphenated = { "under-review", Status::UnderReview },
    closed = { "closed", Status::Closed },
)]
fn test_status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "invalid" },
    empty = { "" },
    open = { "open" },
)]
fn test_status_from_str_invalid(input: &str) {
    assert!(input.parse::<Status>().is_err());
}

#[parameterized(
    submitted = { Status::Submitted, true },
    under_review = { Status::UnderReview, true },
    accepted = { Status::Accepted, true },
    implemented = { Status::Implemented, true },
    rejected = { Status::Rejected, false },
    closed = { Status::Closed, false },
)]
fn test_status_is_open(status: Status, expected: bool) {
    assert_eq!(status.is_open(), expected);
}

// EntityType tests
#[parameterized(
    firm = { "firm", EntityType::Firm },
    fund = { "Fund", EntityType::Fund },
    deal = { "DEAL", EntityType::Deal },
    contact = { "contact", EntityType::Contact },
    dataset = { "dataset", EntityType::Dataset },
)]
fn test_entity_type_from_str_valid(input: &str, expected: EntityType) {
    assert_eq!(input.parse::<EntityType>().unwrap(), expected);
}

#[test]
fn test_status_serde() {
    let status = Status::UnderReview;
    let json = serde_json::to_string(&status).unwrap();
    assert_eq!(json, "\"under_review\"");
    let parsed: Status = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Status::UnderReview);
}

#[test]
fn test_related_entity_serde_round_trip() {
    let entity = RelatedEntity {
        entity_type: EntityType::Firm,
        name: "Acme Capital".to_string(),
    };
    let json = serde_json::to_string(&entity).unwrap();
    let parsed: RelatedEntity = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entity);
}

#[test]
fn test_restore_seq_from_stored_entries() {
    use crate::models::Role;
    use chrono::Utc;

    let author = User::new("u1", "Alice", Role::Admin);
    let now = Utc::now();
    let mut issue = Issue {
        id: "NR-001".to_string(),
        title: "t".to_string(),
        description: String::new(),
        issue_type: IssueType::Feedback,
        department: Department::It,
        priority: Priority::Low,
        status: Status::Submitted,
        created_by: author.clone(),
        assignee: None,
        created_at: now,
        updated_at: now,
        related_entity: None,
        attachments: Vec::new(),
        comments: vec![Comment {
            id: "c-4".to_string(),
            content: "note".to_string(),
            author: author.clone(),
            created_at: now,
            internal: false,
        }],
        activity: vec![ActivityItem::new(
            "a-5".to_string(),
            crate::models::ActivityKind::Comment,
            author,
            now,
        )],
        seq: 0,
    };

    issue.restore_seq();
    assert_eq!(issue.seq, 5);
    assert_eq!(issue.next_entry_id('a'), "a-6");
}
