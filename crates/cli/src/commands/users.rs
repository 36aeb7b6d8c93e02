// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::Config;
use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let (_, config, _) = open_store()?;
    run_impl(&config)
}

/// Internal implementation that accepts the config for testing.
pub(crate) fn run_impl(config: &Config) -> Result<()> {
    for user in config.directory().users() {
        println!("- {} [{}] {} <{}>", user.id, user.role, user.name, user.email);
    }
    Ok(())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
