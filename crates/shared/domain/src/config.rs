use crate::constants::MODULE_NAME;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application settings shared by the CLI and embedding hosts.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsInner {
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(flatten, default)]
    inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is disabled when unset.
    pub dir: Option<PathBuf>,
    pub json: bool,
    /// Extra module-directed filter, e.g. `ghub_grievance=debug`.
    pub filter: Option<String>,
}

/// Location of the module-configuration store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one `<module>.json` document per module.
    pub dir: PathBuf,
    /// Module key the grievance configuration is stored under.
    pub module: String,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, dir: None, json: false, filter: None }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("config"), module: MODULE_NAME.to_owned() }
    }
}
