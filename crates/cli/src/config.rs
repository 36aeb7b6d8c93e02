// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.reqtrail/config.toml` and includes:
//! - `prefix`: the project-specific prefix for issue IDs (e.g., "NR" → "NR-001")
//! - `[user]`: the acting user injected into every mutation (the identity
//!   provider collaborator)
//! - `[[users]]`: the known-user directory consulted by assignment

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use rt_core::id::validate_prefix;
use rt_core::models::User;
use rt_core::Directory;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".reqtrail";
const CONFIG_FILE_NAME: &str = "config.toml";
const SNAPSHOT_FILE_NAME: &str = "issues.jsonl";

/// Project configuration stored in `.reqtrail/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Issue ID prefix (2+ uppercase alphanumeric with at least one letter).
    pub prefix: String,
    /// The acting user for every command run against this checkout.
    pub user: User,
    /// Known users eligible to be assignees.
    #[serde(default)]
    pub users: Vec<User>,
}

impl Config {
    /// Creates a new config with the given prefix and acting user.
    ///
    /// # Errors
    ///
    /// Returns [`rt_core::Error::InvalidPrefix`] if the prefix is not 2+
    /// uppercase alphanumeric with at least one letter.
    pub fn new(prefix: String, user: User) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(rt_core::Error::InvalidPrefix.into());
        }
        Ok(Config {
            prefix,
            users: vec![user.clone()],
            user,
        })
    }

    /// Loads configuration from the given `.reqtrail/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.reqtrail/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// The known-user directory.
    ///
    /// The acting user is always part of it, whether or not the `[[users]]`
    /// table lists them.
    pub fn directory(&self) -> Directory {
        let mut users = self.users.clone();
        if !users.iter().any(|u| u.id == self.user.id) {
            users.insert(0, self.user.clone());
        }
        Directory::new(users)
    }
}

/// Find the .reqtrail directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .reqtrail directory by walking up from the given directory.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the snapshot path for a work directory
pub fn get_snapshot_path(work_dir: &Path) -> PathBuf {
    work_dir.join(SNAPSHOT_FILE_NAME)
}

/// Initialize a new .reqtrail directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
