//! Where the CLI gets its settings and grievance configuration from.

use crate::models::args::PrincipalArgs;
use anyhow::{Context, Result};
use ghub_domain::config::Settings;
use ghub_grievance::{GrievanceConfig, GrievanceRegistry, split_flags};
use ghub_kernel::config::load_config;
use ghub_kernel::security::{IdentityProvider, Principal, StaticIdentityProvider};
use ghub_kernel::store::JsonFileStore;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Principal id used for permission codes given on the command line.
const CLI_PRINCIPAL: &str = "cli";

/// Loads the settings file when given; built-in defaults otherwise.
///
/// # Errors
/// Returns an error if the file is missing or malformed.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    path.map_or_else(
        || Ok(Settings::default()),
        |path| {
            load_config(Some(path))
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        },
    )
}

/// Builds the active configuration from `payload`, or from the configured store.
///
/// # Errors
/// Returns an error if the payload cannot be read or is rejected by the builder.
pub fn load_snapshot(payload: Option<&Path>, settings: &Settings) -> Result<Arc<GrievanceConfig>> {
    let registry = GrievanceRegistry::new();

    let snapshot = match payload {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload {}", path.display()))?;
            let document = serde_json::from_str::<Value>(&raw)
                .with_context(|| format!("Payload {} is not valid JSON", path.display()))?;
            registry.load(&document)?
        },
        None => {
            let store = JsonFileStore::new(&settings.store.dir);
            registry.load_from_store(&store, &settings.store.module)?
        },
    };

    Ok(snapshot)
}

/// The `--perm` codes are granted to a single command-line principal.
pub fn principal(args: &PrincipalArgs) -> Principal {
    if args.anonymous {
        return Principal::anonymous();
    }
    StaticIdentityProvider::new().grant(CLI_PRINCIPAL, &args.permissions).principal(CLI_PRINCIPAL)
}

/// Accepts both repeated `--flag` options and space-separated lists.
pub fn flags(raw: &[String]) -> Vec<&str> {
    raw.iter().flat_map(|f| split_flags(f)).collect()
}
