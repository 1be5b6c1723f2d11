//! Payload → [`GrievanceConfig`].
//!
//! Entries are built parent-first so each child copies values its parent has already resolved;
//! inheritance through any depth falls out of that order. Any malformed entry fails the whole
//! build, so a partially built tree never leaves this module.

use crate::duration::Duration;
use crate::error::{EntryPath, GrievanceError};
use crate::node::{ConfigNode, NodeKind};
use crate::permissions::PermissionSet;
use crate::resolution::ResolutionConfig;
use crate::schema::EntrySpec;
use crate::snapshot::GrievanceConfig;
use fxhash::FxHashSet;
use ghub_domain::constants::{
    DEFAULT_RESOLUTION_MAP, GRIEVANCE_FLAGS, GRIEVANCE_TYPES, PATH_SEPARATOR, RESOLUTION_TIMES,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

impl GrievanceConfig {
    /// Builds a configuration snapshot from a raw module payload.
    ///
    /// # Errors
    /// Returns [`GrievanceError::ConfigValidation`] naming the first offending entry, or
    /// [`GrievanceError::InvalidDurationFormat`]-derived validation errors for bad `"D,H"` tokens.
    pub fn from_payload(payload: &Value) -> Result<Self, GrievanceError> {
        let Some(fields) = payload.as_object() else {
            return Err(GrievanceError::invalid_entry(
                &EntryPath::root(),
                "payload must be a JSON object",
            ));
        };

        let global = section::<String>(fields, RESOLUTION_TIMES)?
            .filter(|token| !token.trim().is_empty())
            .map(|token| duration_at(&EntryPath::section(RESOLUTION_TIMES), &token))
            .transpose()?;

        let flags = build_siblings(
            NodeKind::Flag,
            &section::<Vec<Value>>(fields, GRIEVANCE_FLAGS)?.unwrap_or_default(),
            None,
            &EntryPath::section(GRIEVANCE_FLAGS),
        )?;
        let categories = build_siblings(
            NodeKind::Category,
            &section::<Vec<Value>>(fields, GRIEVANCE_TYPES)?.unwrap_or_default(),
            None,
            &EntryPath::section(GRIEVANCE_TYPES),
        )?;

        let legacy = legacy_map(
            section::<Map<String, Value>>(fields, DEFAULT_RESOLUTION_MAP)?.unwrap_or_default(),
            global,
        )?;

        let config = Self::new(categories, flags, ResolutionConfig { global, legacy });
        warn_dangling_references(&config);

        debug!(
            categories = config.category_count(),
            flags = config.flags().len(),
            "Built grievance configuration"
        );

        Ok(config)
    }
}

/// Reads one top-level section. Absent and `null` sections are `None`.
fn section<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, GrievanceError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => T::deserialize(raw)
            .map(Some)
            .map_err(|e| GrievanceError::invalid_entry(&EntryPath::section(key), e.to_string())),
    }
}

fn build_siblings(
    kind: NodeKind,
    entries: &[Value],
    parent: Option<&ConfigNode>,
    at: &EntryPath,
) -> Result<Vec<ConfigNode>, GrievanceError> {
    let mut seen = FxHashSet::default();
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, raw) in entries.iter().enumerate() {
        let node = build_entry(kind, raw, index, parent, at)?;
        if !seen.insert(node.name().to_owned()) {
            return Err(GrievanceError::invalid_entry(
                &at.child(node.name()),
                format!("duplicate name '{}' among siblings", node.name()),
            ));
        }
        nodes.push(node);
    }

    Ok(nodes)
}

fn build_entry(
    kind: NodeKind,
    raw: &Value,
    index: usize,
    parent: Option<&ConfigNode>,
    at: &EntryPath,
) -> Result<ConfigNode, GrievanceError> {
    match raw {
        Value::String(name) => {
            let here = at.child(name.as_str());
            let path = full_path(parent, checked_name(name, &here)?);
            Ok(ConfigNode::simple(kind, name.clone(), path))
        },
        Value::Object(fields) => {
            let label = fields
                .get("name")
                .and_then(Value::as_str)
                .map_or_else(|| format!("#{index}"), ToOwned::to_owned);
            let here = at.child(label);

            let spec = EntrySpec::deserialize(raw)
                .map_err(|e| GrievanceError::invalid_entry(&here, e.to_string()))?;

            build_object(kind, spec, parent, &here)
        },
        other => Err(GrievanceError::invalid_entry(
            &at.child(format!("#{index}")),
            format!("expected a name or an object, found {}", kind_of(other)),
        )),
    }
}

fn build_object(
    kind: NodeKind,
    spec: EntrySpec,
    parent: Option<&ConfigNode>,
    here: &EntryPath,
) -> Result<ConfigNode, GrievanceError> {
    let path = full_path(parent, checked_name(&spec.name, here)?);

    // Own values override; anything undeclared is copied from the parent.
    let permissions = match spec.permissions {
        Some(own) => PermissionSet::from_spec(Some(own)),
        None => parent.map(|p| p.permissions().clone()).unwrap_or_default(),
    };
    let priority = spec.priority.or_else(|| parent.and_then(|p| p.priority().map(ToOwned::to_owned)));

    let (resolution_time, default_flags) = match kind {
        NodeKind::Category => {
            let resolution_time = match spec.resolution_times.as_deref() {
                Some(token) => Some(duration_at(here, token)?),
                None => parent.and_then(ConfigNode::resolution_time),
            };
            let default_flags = spec
                .default_flags
                .unwrap_or_else(|| parent.map(|p| p.default_flags().to_vec()).unwrap_or_default());
            (resolution_time, default_flags)
        },
        NodeKind::Flag => {
            if spec.children.is_some() {
                return Err(GrievanceError::invalid_entry(here, "flags cannot have children"));
            }
            if spec.resolution_times.is_some() || spec.default_flags.is_some() {
                warn!(entry = %here, "Ignoring category-only fields on flag");
            }
            (None, Vec::new())
        },
    };

    let node = ConfigNode::simple(kind, spec.name, path)
        .with_priority(priority)
        .with_permissions(permissions)
        .with_resolution_time(resolution_time)
        .with_default_flags(default_flags);

    match spec.children {
        Some(children) if !children.is_empty() => {
            let children = build_siblings(kind, &children, Some(&node), here)?;
            Ok(node.with_children(children))
        },
        _ => Ok(node),
    }
}

fn checked_name<'a>(name: &'a str, here: &EntryPath) -> Result<&'a str, GrievanceError> {
    if name.trim().is_empty() {
        return Err(GrievanceError::invalid_entry(here, "name must not be empty"));
    }
    if name.contains(PATH_SEPARATOR) {
        return Err(GrievanceError::invalid_entry(
            here,
            format!("name must not contain '{PATH_SEPARATOR}'"),
        ));
    }
    Ok(name)
}

fn full_path(parent: Option<&ConfigNode>, name: &str) -> String {
    parent.map_or_else(
        || name.to_owned(),
        |parent| format!("{}{PATH_SEPARATOR}{name}", parent.path()),
    )
}

fn duration_at(here: &EntryPath, token: &str) -> Result<Duration, GrievanceError> {
    Duration::parse(token).map_err(|e| GrievanceError::invalid_entry(here, e.to_string()))
}

fn legacy_map(
    raw: Map<String, Value>,
    global: Option<Duration>,
) -> Result<BTreeMap<String, Duration>, GrievanceError> {
    let section = EntryPath::section(DEFAULT_RESOLUTION_MAP);
    let mut legacy = BTreeMap::new();

    for (name, value) in raw {
        let here = section.child(name.as_str());
        let token = match &value {
            Value::Null => "",
            Value::String(token) => token.trim(),
            other => {
                return Err(GrievanceError::invalid_entry(
                    &here,
                    format!("expected a \"D,H\" string, found {}", kind_of(other)),
                ));
            },
        };

        let duration = if token.is_empty() {
            let fallback = global.unwrap_or(Duration::FALLBACK);
            warn!(category = %name, %fallback, "Empty legacy resolution time; using default");
            fallback
        } else {
            duration_at(&here, token)?
        };
        legacy.insert(name, duration);
    }

    Ok(legacy)
}

fn warn_dangling_references(config: &GrievanceConfig) {
    for name in config.resolution().legacy.keys() {
        if config.category(name).is_none() {
            warn!(category = %name, "Legacy resolution time for a category that is not configured");
        }
    }

    for node in config.walk_categories() {
        for flag in node.default_flags() {
            if config.flag(flag).is_none() {
                warn!(category = %node.path(), %flag, "Default flag is not a configured flag");
            }
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
