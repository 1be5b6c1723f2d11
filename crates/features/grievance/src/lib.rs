//! # Grievance configuration engine
//!
//! Parses the grievance module document (category tree, flag list, resolution defaults) into
//! an immutable [`GrievanceConfig`] snapshot and answers the questions the ticket layer asks:
//!
//! - **Resolution**: which SLA applies to a category ([`GrievanceConfig::resolve`]).
//! - **Access**: which categories and flags a [`Principal`] may see or use
//!   ([`GrievanceConfig::filter_categories`], [`GrievanceConfig::validate_ticket_access`]).
//!
//! [`GrievanceRegistry`] publishes the active snapshot; reloads swap it atomically and a
//! rejected payload leaves the previous one in force.
//!
//! ```rust
//! use ghub_grievance::GrievanceRegistry;
//! use ghub_kernel::security::Principal;
//! use serde_json::json;
//!
//! let registry = GrievanceRegistry::new();
//! registry.load(&json!({
//!     "resolution_times": "5,0",
//!     "grievance_types": [
//!         { "name": "complaint", "resolution_times": "3,0", "permissions": ["127001"] }
//!     ]
//! }))?;
//!
//! assert_eq!(registry.resolve("complaint").to_string(), "3,0");
//! assert!(registry.can_use_category(&Principal::new("officer", ["127001"]), "complaint"));
//! # Ok::<(), ghub_grievance::GrievanceError>(())
//! ```
//!
//! [`Principal`]: ghub_kernel::security::Principal

pub mod access;
mod builder;
mod defaults;
mod duration;
mod error;
mod node;
mod permissions;
mod registry;
mod resolution;
pub mod schema;
mod snapshot;

pub use access::{AccessNode, CategoryDefaults, is_accessible, split_flags};
pub use defaults::default_payload;
pub use duration::Duration;
pub use error::{EntryPath, GrievanceError, GrievanceErrorExt};
pub use node::{ConfigNode, NodeKind, PreOrder, walk};
pub use permissions::PermissionSet;
pub use registry::GrievanceRegistry;
pub use resolution::{Resolution, ResolutionConfig, ResolutionEntry, ResolutionSource};
pub use snapshot::GrievanceConfig;

use ghub_domain::constants::MODULE_NAME;
use ghub_kernel::store::ModuleConfigStore;
use tracing::info;

/// Creates a registry loaded from the grievance module document in `store`.
///
/// # Errors
/// Returns [`GrievanceError`] when the store fails or the stored document is invalid.
pub fn init(store: &dyn ModuleConfigStore) -> Result<GrievanceRegistry, GrievanceError> {
    let registry = GrievanceRegistry::new();
    registry.load_from_store(store, MODULE_NAME)?;

    info!("Grievance feature initialized");

    Ok(registry)
}
