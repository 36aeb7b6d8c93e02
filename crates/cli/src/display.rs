// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};

use rt_core::models::{ActivityItem, ActivityKind, Comment, Issue};

use crate::colors;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Maximum comment preview length in activity lines.
const PREVIEW_LEN: usize = 50;

/// Timestamp rendering shared by every line that shows one.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    // If content contains newlines, preserve exactly
    if content.contains('\n') {
        return content.to_string();
    }

    // If fits in width, return as-is
    if content.len() <= width {
        return content.to_string();
    }

    // Wrap at word boundaries
    let mut result = String::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue) -> String {
    let status_display = match &issue.assignee {
        Some(assignee) => format!("{}, @{}", issue.status, assignee.id),
        None => issue.status.to_string(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        colors::status(&status_display, issue.status),
        colors::priority(issue.priority.as_str(), issue.priority),
        issue.id,
        issue.title
    )
}

/// Format a single comment with metadata line and indented content.
///
/// Output format:
/// ```text
///   2026-01-10 10:30  Alice Admin [internal]
///     Content goes here, potentially
///     wrapped across multiple lines.
/// ```
pub fn format_comment(comment: &Comment) -> Vec<String> {
    let mut lines = Vec::new();

    let timestamp = format_timestamp(comment.created_at);
    let marker = if comment.internal { " [internal]" } else { "" };
    lines.push(format!("  {}  {}{}", timestamp, comment.author.name, marker));

    let wrapped = wrap_text(&comment.content, WRAP_WIDTH);
    for line in wrapped.lines() {
        lines.push(format!("    {}", line));
    }

    lines
}

/// Format a single activity entry for log output
pub fn format_activity_item(item: &ActivityItem) -> String {
    let timestamp = format_timestamp(item.timestamp);
    let mut line = format!("  {}  {}", timestamp, item.kind);

    match item.kind {
        ActivityKind::StatusChange => {
            if let (Some(from), Some(to)) = (&item.details.from, &item.details.to) {
                line.push_str(&format!(" {} -> {}", from, to));
            }
        }
        ActivityKind::Assignment => {
            if let Some(to) = &item.details.to {
                line.push_str(&format!(" to {}", to));
            }
        }
        ActivityKind::Comment => {
            if let Some(text) = &item.details.comment {
                // Truncate long comments
                let display = if text.len() > PREVIEW_LEN {
                    format!("{}...", &text[..PREVIEW_LEN - 3])
                } else {
                    text.clone()
                };
                line.push_str(&format!(" \"{}\"", display));
            }
        }
        ActivityKind::Created => {}
    }

    line.push_str(&format!(" by {}", item.actor.name));
    line
}

/// Format issue details for show command.
///
/// Comments are the caller's visibility-filtered view, not the raw stored
/// sequence.
pub fn format_issue_details(issue: &Issue, comments: &[&Comment]) -> String {
    let mut output = Vec::new();

    // Header: [type] id
    output.push(format!("[{}] {}", issue.issue_type, issue.id));

    // Metadata on separate lines
    output.push(format!("Title: {}", issue.title));
    if !issue.description.is_empty() {
        output.push(format!("Description: {}", issue.description));
    }
    output.push(format!(
        "Status: {}",
        colors::status(issue.status.as_str(), issue.status)
    ));
    output.push(format!(
        "Priority: {}",
        colors::priority(issue.priority.as_str(), issue.priority)
    ));
    output.push(format!("Department: {}", issue.department));
    output.push(format!("Created by: {}", issue.created_by.name));
    if let Some(assignee) = &issue.assignee {
        output.push(format!("Assignee: {}", assignee.name));
    }
    if let Some(entity) = &issue.related_entity {
        output.push(format!("Related: {} \"{}\"", entity.entity_type, entity.name));
    }
    output.push(format!("Created: {}", format_timestamp(issue.created_at)));
    output.push(format!("Updated: {}", format_timestamp(issue.updated_at)));

    // Attachments
    if !issue.attachments.is_empty() {
        output.push(String::new());
        output.push("Attachments:".to_string());
        for name in &issue.attachments {
            output.push(format!("  - {}", name));
        }
    }

    // Comments (visibility-filtered by the caller)
    if !comments.is_empty() {
        output.push(String::new());
        output.push("Comments:".to_string());
        for (i, comment) in comments.iter().enumerate() {
            if i > 0 {
                output.push(String::new());
            }
            output.extend(format_comment(comment));
        }
    }

    // Activity log (skip the created entry since it's redundant with the
    // Created: line)
    let trail: Vec<&ActivityItem> = issue
        .activity
        .iter()
        .filter(|a| a.kind != ActivityKind::Created)
        .collect();
    if !trail.is_empty() {
        output.push(String::new());
        output.push("Log:".to_string());
        for item in trail {
            output.push(format_activity_item(item));
        }
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
