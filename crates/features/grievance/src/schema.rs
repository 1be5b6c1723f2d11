//! Wire shapes of the module-configuration payload.
//!
//! Entry lists stay as raw [`Value`]s so the builder can report the exact position of a
//! malformed entry instead of a generic deserialization failure.

use serde::Deserialize;
use serde_json::Value;

/// A permission code as it appears in configuration: either text or a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PermissionCode {
    Text(String),
    Number(i64),
}

impl PermissionCode {
    #[must_use]
    pub fn into_code(self) -> String {
        match self {
            Self::Text(code) => code,
            Self::Number(code) => code.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PermissionSpec {
    One(PermissionCode),
    Many(Vec<PermissionCode>),
}

/// Enhanced (object) entry. `children` only applies to categories.
#[derive(Debug, Deserialize)]
pub(crate) struct EntrySpec {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) priority: Option<String>,
    #[serde(default)]
    pub(crate) permissions: Option<PermissionSpec>,
    #[serde(default)]
    pub(crate) default_flags: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) resolution_times: Option<String>,
    #[serde(default)]
    pub(crate) children: Option<Vec<Value>>,
}
