// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calling-layer validation.
//!
//! The core assumes well-formed input; required-field and length checks
//! happen here before a mutation is attempted.

use rt_core::models::Role;

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 100_000;
pub const MAX_COMMENT_LENGTH: usize = 10_000;
pub const MAX_ATTACHMENT_LENGTH: usize = 255;

/// Validate that a title is non-empty (after trimming) and within length limits
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "Title" });
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Title",
            actual: title.len(),
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(())
}

/// Validate that a description is within length limits
pub fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Description",
            actual: description.len(),
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}

/// Validate that a comment is non-empty and within length limits.
///
/// The core stores whatever it is handed verbatim; refusing blank comments
/// is this layer's choice.
pub fn validate_comment(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "Comment" });
    }
    if content.len() > MAX_COMMENT_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Comment",
            actual: content.len(),
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(())
}

/// Validate an attachment name
pub fn validate_attachment(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "Attachment" });
    }
    if name.len() > MAX_ATTACHMENT_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Attachment",
            actual: name.len(),
            max: MAX_ATTACHMENT_LENGTH,
        });
    }
    Ok(())
}

/// Validate that the acting user may flag a comment internal.
///
/// Mirrors the upstream UI, which offers the internal toggle only to admins;
/// the core itself accepts the flag from anyone.
pub fn validate_internal_flag(internal: bool, role: Role) -> Result<()> {
    if internal && role != Role::Admin {
        return Err(Error::InternalCommentNotAllowed {
            role: role.as_str().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
