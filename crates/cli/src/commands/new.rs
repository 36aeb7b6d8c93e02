// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rt_core::models::{Department, EntityType, IssueType, Priority, RelatedEntity};
use rt_core::{IssueStore, NewIssue};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::validate::{
    validate_attachment, validate_description, validate_title,
};

use super::{open_store, persist};

pub fn run(
    title: String,
    issue_type: &str,
    department: &str,
    priority: &str,
    description: Option<String>,
    entity: Option<String>,
    attach: Vec<String>,
) -> Result<()> {
    let (mut store, config, work_dir) = open_store()?;
    let id = run_impl(
        &mut store,
        &config,
        title,
        issue_type,
        department,
        priority,
        description,
        entity,
        attach,
    )?;
    persist(&work_dir, &store)?;
    println!("Created {}", id);
    Ok(())
}

/// Internal implementation that accepts the store/config for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    store: &mut IssueStore,
    config: &Config,
    title: String,
    issue_type: &str,
    department: &str,
    priority: &str,
    description: Option<String>,
    entity: Option<String>,
    attach: Vec<String>,
) -> Result<String> {
    validate_title(&title)?;
    let description = description.unwrap_or_default();
    validate_description(&description)?;
    for name in &attach {
        validate_attachment(name)?;
    }

    let issue_type: IssueType = issue_type.parse()?;
    let department: Department = department.parse()?;
    let priority: Priority = priority.parse()?;
    let related_entity = entity.as_deref().map(parse_related_entity).transpose()?;

    let issue = store.create(
        &config.user,
        NewIssue {
            title,
            description,
            issue_type,
            department,
            priority,
            related_entity,
            attachments: attach,
        },
    )?;
    Ok(issue.id.clone())
}

/// Parse a TYPE:NAME pair into a related-entity reference.
fn parse_related_entity(raw: &str) -> Result<RelatedEntity> {
    let (entity_type, name) = raw
        .split_once(':')
        .ok_or_else(|| Error::InvalidRelatedEntity(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidRelatedEntity(raw.to_string()));
    }
    let entity_type: EntityType = entity_type.parse()?;
    Ok(RelatedEntity {
        entity_type,
        name: name.to_string(),
    })
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
