// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for status and priority badges.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use rt_core::models::{Priority, Status};

/// ANSI 256-color codes for badge rendering
pub mod codes {
    /// submitted: steel blue
    pub const SUBMITTED: u8 = 74;
    /// under_review: gold
    pub const UNDER_REVIEW: u8 = 178;
    /// accepted: green
    pub const ACCEPTED: u8 = 71;
    /// rejected: red
    pub const REJECTED: u8 = 167;
    /// implemented: cyan
    pub const IMPLEMENTED: u8 = 80;
    /// closed: medium grey
    pub const CLOSED: u8 = 245;
    /// critical priority: red
    pub const CRITICAL: u8 = 167;
    /// high priority: orange
    pub const HIGH: u8 = 208;
    /// medium priority: steel blue
    pub const MEDIUM: u8 = 74;
    /// low priority: medium grey
    pub const LOW: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(text: &str, code: u8) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Colorize a status badge.
pub fn status(text: &str, status: Status) -> String {
    let code = match status {
        Status::Submitted => codes::SUBMITTED,
        Status::UnderReview => codes::UNDER_REVIEW,
        Status::Accepted => codes::ACCEPTED,
        Status::Rejected => codes::REJECTED,
        Status::Implemented => codes::IMPLEMENTED,
        Status::Closed => codes::CLOSED,
    };
    paint(text, code)
}

/// Colorize a priority badge.
pub fn priority(text: &str, priority: Priority) -> String {
    let code = match priority {
        Priority::Low => codes::LOW,
        Priority::Medium => codes::MEDIUM,
        Priority::High => codes::HIGH,
        Priority::Critical => codes::CRITICAL,
    };
    paint(text, code)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
