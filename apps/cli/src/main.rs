#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{access, resolve, validate};
use crate::models::args::{AppCommands, Cli};
use crate::services::source::{self, load_settings, load_snapshot};

use anyhow::Result;
use clap::Parser;
use ghub_logger::Logger;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.settings.as_deref())?;
    if let Some(level) = &cli.log_level {
        settings.logging.level.clone_from(level);
    }
    let _log = Logger::from_settings(env!("CARGO_BIN_NAME"), &settings.logging)?;

    let config = load_snapshot(cli.payload.as_deref(), &settings)?;
    info!(
        generation = config.generation(),
        categories = config.category_count(),
        flags = config.flags().len(),
        "Grievance configuration loaded"
    );
    let json = cli.json;

    match cli.command {
        AppCommands::Validate {} => validate::summarize(&config, json)?,
        AppCommands::Resolve { category, created_at } => {
            resolve::resolve(&config, &category, created_at, json)?;
        },
        AppCommands::Table {} => resolve::table(&config, json)?,
        AppCommands::Categories { principal, action, tree } => {
            access::categories(&config, &source::principal(&principal), action.into(), tree, json)?;
        },
        AppCommands::Flags { principal } => {
            access::flags(&config, &source::principal(&principal), json)?;
        },
        AppCommands::Check { principal, category, flags } => {
            let flags = source::flags(&flags);
            access::check(&config, &source::principal(&principal), &category, &flags, json)?;
        },
    }

    Ok(())
}
