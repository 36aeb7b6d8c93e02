// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Issue Tracking:
  new         Create a new issue
  status      Set an issue's status
  comment     Add a comment to an issue
  assign      Assign an issue to a user
  show        Show issue details
  list        List issues
  log         View an issue's activity trail
  stats       Show collection counters

Setup & Data:
  init        Initialize the tracker
  users       List the known-user directory
  export      Export issues to JSONL";

const QUICKSTART_HELP: &str = "\
Get started:
  rt init --user alice --name \"Alice Johnson\"   Initialize tracker
  rt new \"Broken export\" -t feedback -d it       Create an issue
  rt list                                        List all issues
  rt status NR-001 accepted                      Move an issue forward
  rt comment NR-001 \"shipping this week\"         Discuss it";

#[derive(Parser)]
#[command(name = "rt")]
#[command(about = "An organizational request tracker with a built-in audit trail")]
#[command(
    long_about = "An organizational request tracker.\n\n\
    Track issues and requests through their lifecycle with comments,\n\
    assignments, and an append-only activity trail per issue."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the tracker in the current directory
    Init {
        /// Directory to initialize
        #[arg(long, default_value = ".")]
        path: String,

        /// Issue ID prefix (2+ uppercase alphanumeric)
        #[arg(long, default_value = "NR")]
        prefix: String,

        /// Acting user's identifier
        #[arg(long)]
        user: String,

        /// Acting user's display name (defaults to the identifier)
        #[arg(long)]
        name: Option<String>,

        /// Acting user's email
        #[arg(long)]
        email: Option<String>,

        /// Acting user's role (admin, reviewer, user)
        #[arg(long, default_value = "admin")]
        role: String,
    },

    /// Create a new issue
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        rt new \"Broken export\" -t quality_issue -d data            Create a data-quality issue\n  \
        rt new \"Access to fund list\" -t access_request -d access    Request access\n  \
        rt new \"Q3 deck\" -t contribution -d data -p high            High-priority contribution\n  \
        rt new \"Stale contact\" -t quality_issue -d data --entity contact:\"Jane Doe\""
    )]
    New {
        /// Short title
        title: String,

        /// Issue type (quality_issue, contribution, access_request, feedback, internal_ops)
        #[arg(long, short = 't')]
        r#type: String,

        /// Department to route to (data, it, hr, access, asset)
        #[arg(long, short)]
        department: String,

        /// Priority (low, medium, high, critical)
        #[arg(long, short, default_value = "medium")]
        priority: String,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Related business entity as TYPE:NAME (e.g., "firm:Acme Capital")
        #[arg(long)]
        entity: Option<String>,

        /// Attachment name(s)
        #[arg(long)]
        attach: Vec<String>,
    },

    /// Set an issue's status
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        rt status NR-001 under_review    Start triage\n  \
        rt status NR-001 accepted        Approve\n  \
        rt status NR-001 closed          Resolve"
    )]
    Status {
        /// Issue ID
        id: String,

        /// Target status (submitted, under_review, accepted, rejected, implemented, closed)
        status: String,
    },

    /// Add a comment to an issue
    #[command(arg_required_else_help = true)]
    Comment {
        /// Issue ID
        id: String,

        /// Comment text
        content: String,

        /// Withhold from non-admin viewers (admin actors only)
        #[arg(long)]
        internal: bool,
    },

    /// Assign an issue to a user from the directory
    #[command(arg_required_else_help = true)]
    Assign {
        /// Issue ID
        id: String,

        /// Assignee's user ID
        user: String,
    },

    /// Show issue details
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID
        id: String,

        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues, newest first
    List {
        /// Filter by status
        #[arg(long, short)]
        status: Option<String>,

        /// Filter by type
        #[arg(long, short = 't')]
        r#type: Option<String>,

        /// Filter by department
        #[arg(long, short)]
        department: Option<String>,

        /// Filter by priority
        #[arg(long, short)]
        priority: Option<String>,

        /// Keep issues whose ID or title contains this text
        #[arg(long)]
        search: Option<String>,

        /// Keep only issues created by the acting user
        #[arg(long)]
        mine: bool,

        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },

    /// View an issue's activity trail
    #[command(arg_required_else_help = true)]
    Log {
        /// Issue ID
        id: String,
    },

    /// Show collection counters
    Stats,

    /// List the known-user directory
    Users,

    /// Export issues to JSONL
    #[command(arg_required_else_help = true)]
    Export {
        /// Output file path
        filepath: String,
    },
}
