pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::security::{IdentityProvider, Principal, StaticIdentityProvider};
pub use crate::store::{InMemoryStore, JsonFileStore, ModuleConfigStore, StoreError, StoreErrorExt};
