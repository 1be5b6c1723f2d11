//! Module-configuration store.
//!
//! Feature slices read their configuration document by module key and never care where it
//! lives. Two implementations ship with the kernel: an in-memory map for tests and embedding
//! hosts, and a directory of `<module>.json` documents for operators.

use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};
use tracing::debug;

const DOCUMENT_EXTENSION: &str = "json";

#[ghub_derive::ghub_error]
pub enum StoreError {
    #[error("Invalid module key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Configuration store I/O failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed configuration document{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Key/value access to per-module configuration documents.
pub trait ModuleConfigStore: Debug + Send + Sync {
    /// Returns the stored document for `module`, or `None` when nothing is stored.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the key is invalid or the backing medium fails.
    fn get(&self, module: &str) -> Result<Option<Value>, StoreError>;

    /// Returns the stored document, falling back to `default` when nothing is stored.
    ///
    /// # Errors
    /// Same as [`ModuleConfigStore::get`].
    fn get_or_default(&self, module: &str, default: &Value) -> Result<Value, StoreError> {
        Ok(self.get(module)?.unwrap_or_else(|| default.clone()))
    }
}

/// Thread-safe in-memory store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<RwLock<FxHashMap<String, Value>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the document for `module`.
    pub fn insert(&self, module: impl Into<String>, document: Value) {
        self.documents.write().insert(module.into(), document);
    }

    /// Removes the document for `module`, returning it if present.
    pub fn remove(&self, module: &str) -> Option<Value> {
        self.documents.write().remove(module)
    }
}

impl ModuleConfigStore for InMemoryStore {
    fn get(&self, module: &str) -> Result<Option<Value>, StoreError> {
        validate_key(module)?;
        Ok(self.documents.read().get(module).cloned())
    }
}

/// Directory-backed store: the document for `module` lives at `<root>/<module>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the document path for `module`.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] for keys that could escape the store root.
    pub fn document_path(&self, module: &str) -> Result<PathBuf, StoreError> {
        validate_key(module)?;
        Ok(self.root.join(module).with_extension(DOCUMENT_EXTENSION))
    }
}

impl ModuleConfigStore for JsonFileStore {
    fn get(&self, module: &str) -> Result<Option<Value>, StoreError> {
        let path = self.document_path(module)?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration document stored");
                return Ok(None);
            },
            Err(e) => {
                return Err(StoreError::Io {
                    source: e,
                    context: Some(format!("Failed to read {}", path.display()).into()),
                });
            },
        };

        let document = serde_json::from_str::<Value>(&raw)
            .context(format!("Failed to parse {}", path.display()))?;

        Ok(Some(document))
    }
}

/// Module keys are plain identifiers: no separators, no dots, never empty.
fn validate_key(module: &str) -> Result<(), StoreError> {
    let valid = !module.is_empty()
        && module.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey {
            message: format!("'{module}' is not a valid module key").into(),
            context: None,
        })
    }
}
