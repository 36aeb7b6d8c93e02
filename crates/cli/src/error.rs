// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rtrs library.
///
/// Core errors pass through unchanged; everything else is the calling
/// layer's own validation and I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'rt init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("internal comments require an admin actor\n  hint: the acting user's role is '{role}'")]
    InternalCommentNotAllowed { role: String },

    #[error("invalid related entity '{0}'\n  hint: expected TYPE:NAME, e.g. \"firm:Acme Capital\"")]
    InvalidRelatedEntity(String),

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] rt_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rtrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
