//! # CLI Argument Definitions
//!
//! Subcommands, arguments and flags of the `ghub` operator tool.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ghub_domain::action::Action;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ghub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and validate grievance module configuration")]
pub struct Cli {
    /// Settings file (format inferred from the extension); `GHUB__*` variables override it.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log level for this run (overrides the settings file).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Payload file. Defaults to the module document in the configured store.
    #[arg(short, long, global = true)]
    pub payload: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Build the payload and print a summary, failing on the first invalid entry
    Validate {},
    /// Effective resolution time (and deadline) of a category
    Resolve {
        /// Category name or full `parent|child` path
        category: String,
        /// Ticket creation time (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        created_at: Option<DateTime<Utc>>,
    },
    /// Resolution time of every configured category
    Table {},
    /// Categories visible to a principal
    Categories {
        #[command(flatten)]
        principal: PrincipalArgs,
        #[arg(long, value_enum, default_value_t = ActionArg::View)]
        action: ActionArg,
        /// Keep the hierarchy, showing inaccessible ancestors as placeholders
        #[arg(long)]
        tree: bool,
    },
    /// Flags usable by a principal
    Flags {
        #[command(flatten)]
        principal: PrincipalArgs,
    },
    /// Check whether a principal may file a ticket with a category and flags
    Check {
        #[command(flatten)]
        principal: PrincipalArgs,
        #[arg(long)]
        category: String,
        /// Flag name; repeat or pass a space-separated list
        #[arg(long = "flag")]
        flags: Vec<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PrincipalArgs {
    /// Permission code held by the principal (repeatable)
    #[arg(long = "perm")]
    pub permissions: Vec<String>,
    /// Evaluate as an anonymous principal
    #[arg(long, conflicts_with = "permissions")]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    View,
    Create,
    Update,
}

impl From<ActionArg> for Action {
    fn from(value: ActionArg) -> Self {
        match value {
            ActionArg::View => Self::VIEW,
            ActionArg::Create => Self::CREATE,
            ActionArg::Update => Self::UPDATE,
        }
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
