//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts the collaborators the grievance engine consumes
//! but does not own: settings loading, the module-configuration store, and principals.
//!
//! ## Settings loading
//! ```rust,ignore
//! use ghub_kernel::config::load_config;
//! use ghub_kernel::domain::config::Settings;
//!
//! let settings: Settings = load_config(Some("settings.toml"))?;
//! ```
//!
//! ## Module configuration
//! ```rust
//! use ghub_kernel::store::{InMemoryStore, ModuleConfigStore};
//! use serde_json::json;
//!
//! let store = InMemoryStore::new();
//! store.insert("grievance_social_protection", json!({ "resolution_times": "5,0" }));
//! assert!(store.get("grievance_social_protection").unwrap().is_some());
//! ```
pub mod config;
pub mod prelude;
pub mod security;
pub mod store;

pub use ghub_domain as domain;
