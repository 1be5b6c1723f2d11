use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix for settings overrides (`GHUB__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "GHUB";

/// Custom error type for settings loading.
#[ghub_derive::ghub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable settings loader that combines file-based settings with environment overrides.
///
/// 1. **Base File**: Loads settings from a file (format inferred from the extension). Defaults
///    to `"settings"` in the working directory when no path is given.
/// 2. **Environment Overrides**: Overlays values from variables prefixed with `GHUB__`.
///    Nested structures use double underscores (`GHUB__STORE__DIR` maps to `store.dir`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) file cannot be found.
/// * The content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use ghub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppSettings {
///     verbose: bool,
/// }
///
/// let cfg: AppSettings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("settings"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading settings from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}
