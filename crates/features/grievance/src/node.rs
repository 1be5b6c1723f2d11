use crate::duration::Duration;
use crate::permissions::PermissionSet;
use ghub_domain::priority::Priority;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Category,
    Flag,
}

/// One parsed category or flag, with inherited values already resolved.
///
/// Nodes are immutable; a reload builds a fresh tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigNode {
    kind: NodeKind,
    name: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    permissions: PermissionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution_time: Option<Duration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    default_flags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Bare-name entry: unrestricted, no resolution time, priority or flags.
    pub(crate) fn simple(kind: NodeKind, name: String, path: String) -> Self {
        Self {
            kind,
            name,
            path,
            priority: None,
            permissions: PermissionSet::unrestricted(),
            resolution_time: None,
            default_flags: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn with_priority(mut self, priority: Option<String>) -> Self {
        self.priority = priority;
        self
    }

    pub(crate) fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    pub(crate) const fn with_resolution_time(mut self, resolution_time: Option<Duration>) -> Self {
        self.resolution_time = resolution_time;
        self
    }

    pub(crate) fn with_default_flags(mut self, default_flags: Vec<String>) -> Self {
        self.default_flags = default_flags;
        self
    }

    pub(crate) fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full hierarchical name, ancestors joined by `|`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// The priority label when it names a known [`Priority`].
    #[must_use]
    pub fn priority_level(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::from_label)
    }

    #[must_use]
    pub const fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    #[must_use]
    pub const fn resolution_time(&self) -> Option<Duration> {
        self.resolution_time
    }

    #[must_use]
    pub fn default_flags(&self) -> &[String] {
        &self.default_flags
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal of this node and its descendants.
    pub fn descendants(&self) -> PreOrder<'_> {
        walk(std::slice::from_ref(self))
    }
}

/// Pre-order iterator over a forest of nodes.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a ConfigNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a ConfigNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Walks `roots` parent-first, siblings in declaration order.
pub fn walk(roots: &[ConfigNode]) -> PreOrder<'_> {
    PreOrder { stack: roots.iter().rev().collect() }
}
