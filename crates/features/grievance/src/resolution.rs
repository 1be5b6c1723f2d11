//! Resolution-time lookup.
//!
//! The effective SLA of a category is the first value found along:
//! category node (own or inherited) → legacy per-type map → global default → [`Duration::FALLBACK`].

use crate::duration::Duration;
use crate::error::GrievanceError;
use crate::node::ConfigNode;
use crate::snapshot::GrievanceConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Process-wide resolution defaults parsed from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionConfig {
    /// Top-level `resolution_times`; absent when the payload does not set it.
    pub global: Option<Duration>,
    /// Legacy `default_resolution` map keyed by category name.
    pub legacy: BTreeMap<String, Duration>,
}

/// Which step of the chain produced a resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Category,
    Legacy,
    Global,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub duration: Duration,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionEntry {
    pub path: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl ResolutionConfig {
    fn resolve_from(&self, node: Option<&ConfigNode>, key: &str) -> Resolution {
        if let Some(duration) = node.and_then(ConfigNode::resolution_time) {
            return Resolution { duration, source: ResolutionSource::Category };
        }
        if let Some(duration) = self.legacy.get(key) {
            return Resolution { duration: *duration, source: ResolutionSource::Legacy };
        }
        match self.global {
            Some(duration) => Resolution { duration, source: ResolutionSource::Global },
            None => Resolution { duration: Duration::FALLBACK, source: ResolutionSource::Fallback },
        }
    }
}

impl GrievanceConfig {
    /// Effective resolution time for `category`. Unknown names degrade to the defaults.
    #[must_use]
    pub fn resolve(&self, category: &str) -> Duration {
        self.resolution_for(category).duration
    }

    /// Like [`GrievanceConfig::resolve`], also reporting where the value came from.
    #[must_use]
    pub fn resolution_for(&self, category: &str) -> Resolution {
        let node = self.category(category);
        // A path lookup falls back to the legacy map under the bare leaf name.
        let key = node.map_or(category, ConfigNode::name);
        self.resolution().resolve_from(node, key)
    }

    /// Resolution time of a configured category.
    ///
    /// # Errors
    /// Returns [`GrievanceError::UnknownCategory`] when `category` is not configured.
    pub fn resolve_strict(&self, category: &str) -> Result<Duration, GrievanceError> {
        let node = self.category(category).ok_or_else(|| GrievanceError::UnknownCategory {
            name: category.to_owned(),
            context: None,
        })?;
        Ok(self.resolution().resolve_from(Some(node), node.name()).duration)
    }

    /// Deadline for a ticket of `category` opened at `created_at`.
    #[must_use]
    pub fn deadline(&self, category: &str, created_at: DateTime<Utc>) -> DateTime<Utc> {
        self.resolve(category).deadline_from(created_at)
    }

    /// Effective resolution of every configured category, in pre-order.
    #[must_use]
    pub fn resolution_table(&self) -> Vec<ResolutionEntry> {
        self.walk_categories()
            .map(|node| ResolutionEntry {
                path: node.path().to_owned(),
                resolution: self.resolution().resolve_from(Some(node), node.name()),
            })
            .collect()
    }
}
