// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rtrs - The reqtrail command-line surface.
//!
//! This crate provides everything around the [`rt_core`] lifecycle engine:
//! the `rt` CLI, project configuration (which supplies the acting user and
//! the known-user directory), and the JSONL snapshot that makes the
//! in-memory collection durable.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for the `rt` binary
//! - [`Config`] - project configuration (`.reqtrail/config.toml`)
//! - [`snapshot`] - load-at-startup / save-after-mutation persistence
//! - [`filter`] - presentation-layer listing filters
//! - [`Error`] - error types for all operations
//!
//! # Initialization
//!
//! Use `rt init` to create a `.reqtrail/` directory; every other command
//! finds it by walking up from the current directory:
//!
//! ```rust,ignore
//! use rtrs::config::{find_work_dir, get_snapshot_path, Config};
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let issues = rtrs::snapshot::load(&get_snapshot_path(&work_dir))?;
//! ```

pub mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod validate;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_snapshot_path, init_work_dir, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            path,
            prefix,
            user,
            name,
            email,
            role,
        } => commands::init::run(&path, prefix, user, name, email, &role),
        Command::New {
            title,
            r#type,
            department,
            priority,
            description,
            entity,
            attach,
        } => commands::new::run(
            title,
            &r#type,
            &department,
            &priority,
            description,
            entity,
            attach,
        ),
        Command::Status { id, status } => commands::status::run(&id, &status),
        Command::Comment {
            id,
            content,
            internal,
        } => commands::comment::run(&id, &content, internal),
        Command::Assign { id, user } => commands::assign::run(&id, &user),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::List {
            status,
            r#type,
            department,
            priority,
            search,
            mine,
            output,
        } => commands::list::run(status, r#type, department, priority, search, mine, output),
        Command::Log { id } => commands::log::run(&id),
        Command::Stats => commands::stats::run(),
        Command::Users => commands::users::run(),
        Command::Export { filepath } => commands::export::run(&filepath),
    }
}
