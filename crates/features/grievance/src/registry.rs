use crate::defaults::default_payload;
use crate::duration::Duration;
use crate::error::{GrievanceError, GrievanceErrorExt};
use crate::node::ConfigNode;
use crate::snapshot::GrievanceConfig;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use ghub_domain::priority::Priority;
use ghub_kernel::security::Principal;
use ghub_kernel::store::ModuleConfigStore;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Holder of the active [`GrievanceConfig`].
///
/// Reads are lock-free: [`GrievanceRegistry::snapshot`] hands out the current `Arc`, which stays
/// valid and consistent for as long as the caller keeps it. A reload builds the next snapshot
/// without any lock and only serializes the swap itself.
#[derive(Debug)]
pub struct GrievanceRegistry {
    active: ArcSwap<GrievanceConfig>,
    /// Last installed generation; held only while swapping.
    generation: Mutex<u64>,
}

impl Default for GrievanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GrievanceRegistry {
    /// Starts with an empty configuration (generation `0`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GrievanceConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GrievanceConfig) -> Self {
        let generation = config.generation;
        Self { active: ArcSwap::from_pointee(config), generation: Mutex::new(generation) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<GrievanceConfig> {
        self.active.load_full()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.active.load().generation()
    }

    /// Builds `payload` and makes it the active configuration.
    ///
    /// # Errors
    /// Returns the build error; the previously active configuration stays in force.
    pub fn load(&self, payload: &Value) -> Result<Arc<GrievanceConfig>, GrievanceError> {
        match GrievanceConfig::from_payload(payload) {
            Ok(config) => Ok(self.install(config)),
            Err(e) => {
                warn!(error = %e, generation = self.generation(), "Rejected grievance configuration");
                Err(e)
            },
        }
    }

    /// Reads the module document from `store` (built-in defaults when absent) and loads it.
    ///
    /// # Errors
    /// Returns [`GrievanceError::Store`] when the store fails, or any build error.
    pub fn load_from_store(
        &self,
        store: &dyn ModuleConfigStore,
        module: &str,
    ) -> Result<Arc<GrievanceConfig>, GrievanceError> {
        let payload = store
            .get_or_default(module, &default_payload())
            .context(format!("Failed to read module '{module}'"))?;

        self.load(&payload)
    }

    /// Publishes an already built configuration.
    pub fn install(&self, mut config: GrievanceConfig) -> Arc<GrievanceConfig> {
        let mut generation = self.generation.lock();
        *generation += 1;
        config.generation = *generation;

        let config = Arc::new(config);
        self.active.store(Arc::clone(&config));
        drop(generation);

        info!(
            generation = config.generation(),
            categories = config.category_count(),
            flags = config.flags().len(),
            "Grievance configuration installed"
        );

        config
    }

    // --- Owned views over the current snapshot ---

    #[must_use]
    pub fn resolve(&self, category: &str) -> Duration {
        self.active.load().resolve(category)
    }

    #[must_use]
    pub fn deadline(&self, category: &str, created_at: DateTime<Utc>) -> DateTime<Utc> {
        self.active.load().deadline(category, created_at)
    }

    #[must_use]
    pub fn accessible_category_paths(&self, principal: &Principal) -> Vec<String> {
        let config = self.active.load();
        config.accessible_categories(principal).into_iter().map(|n| n.path().to_owned()).collect()
    }

    #[must_use]
    pub fn accessible_flag_names(&self, principal: &Principal) -> Vec<String> {
        let config = self.active.load();
        config.accessible_flags(principal).into_iter().map(ConfigNode::name).map(ToOwned::to_owned).collect()
    }

    #[must_use]
    pub fn can_use_category(&self, principal: &Principal, category: &str) -> bool {
        self.active.load().can_use_category(principal, category)
    }

    /// See [`GrievanceConfig::validate_ticket_access`].
    ///
    /// # Errors
    /// Same as [`GrievanceConfig::validate_ticket_access`].
    pub fn validate_ticket_access<S>(
        &self,
        principal: &Principal,
        category: &str,
        flags: &[S],
    ) -> Result<(), GrievanceError>
    where
        S: AsRef<str>,
    {
        self.active.load().validate_ticket_access(principal, category, flags)
    }

    #[must_use]
    pub fn ticket_visible<S>(&self, principal: &Principal, category: Option<&str>, flags: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        self.active.load().ticket_visible(principal, category, flags)
    }

    #[must_use]
    pub fn effective_priority<S>(&self, category: &str, flags: &[S]) -> Priority
    where
        S: AsRef<str>,
    {
        self.active.load().effective_priority(category, flags)
    }
}
