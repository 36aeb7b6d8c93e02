// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Permission level of a user.
///
/// Roles gate read-time visibility (internal comments) and presentation-layer
/// affordances; the core never prevents a mutation based on role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including internal comments and assignment.
    Admin,
    /// Triages and reviews issues.
    Reviewer,
    /// Regular submitter.
    User,
}

impl Role {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Reviewer => "reviewer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "reviewer" => Ok(Role::Reviewer),
            "user" => Ok(Role::User),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// An actor known to the system.
///
/// Users are owned by the external identity collaborator. The core receives
/// them as immutable values on every mutation and never modifies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the identity provider.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Permission level.
    pub role: Role,
}

impl User {
    /// Test helper: construct a User with a derived email address.
    #[cfg(test)]
    pub fn new(id: &str, name: &str, role: Role) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            role,
        }
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
