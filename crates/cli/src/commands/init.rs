// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rt_core::models::{Role, User};

use crate::config::{init_work_dir, Config};
use crate::error::Result;

pub fn run(
    path: &str,
    prefix: String,
    user_id: String,
    name: Option<String>,
    email: Option<String>,
    role: &str,
) -> Result<()> {
    let role: Role = role.parse()?;
    let user = User {
        name: name.unwrap_or_else(|| user_id.clone()),
        email: email.unwrap_or_else(|| format!("{}@local", user_id)),
        id: user_id,
        role,
    };

    let config = Config::new(prefix, user)?;
    let work_dir = init_work_dir(Path::new(path), &config)?;

    println!(
        "Initialized reqtrail in {} (prefix {}, acting user {})",
        work_dir.display(),
        config.prefix,
        config.user.id
    );
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
