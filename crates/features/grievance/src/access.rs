//! Access control over categories and flags.
//!
//! A node is accessible when it is unrestricted or shares a code with the principal. Every
//! [`Action`] is checked against the same per-node set; an empty action grants nothing.
//! Anonymous principals are denied everything.

use crate::error::GrievanceError;
use crate::node::{ConfigNode, walk};
use crate::snapshot::GrievanceConfig;
use fxhash::FxHashSet;
use ghub_domain::action::Action;
use ghub_domain::priority::Priority;
use ghub_kernel::security::Principal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

#[must_use]
pub fn is_accessible(node: &ConfigNode, held: &FxHashSet<String>) -> bool {
    node.permissions().grants(held)
}

/// A category kept by [`filter_categories`].
///
/// Inaccessible nodes survive only as placeholders on the way to an accessible descendant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode<'a> {
    pub node: &'a ConfigNode,
    pub accessible: bool,
    pub children: Vec<AccessNode<'a>>,
}

impl<'a> AccessNode<'a> {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        !self.accessible
    }

    /// Accessible nodes of this subtree in pre-order, placeholders skipped.
    #[must_use]
    pub fn flatten(&self) -> Vec<&'a ConfigNode> {
        let mut out = Vec::new();
        self.collect_accessible(&mut out);
        out
    }

    fn collect_accessible(&self, out: &mut Vec<&'a ConfigNode>) {
        if self.accessible {
            out.push(self.node);
        }
        for child in &self.children {
            child.collect_accessible(out);
        }
    }
}

impl Serialize for AccessNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AccessNode", 4)?;
        state.serialize_field("name", self.node.name())?;
        state.serialize_field("path", self.node.path())?;
        state.serialize_field("accessible", &self.accessible)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// Prunes a category forest down to what `held` can reach for `action`, keeping its shape.
///
/// Children are decided first; a parent stays when it is accessible itself or still has
/// children after filtering.
#[must_use]
pub fn filter_categories<'a>(
    roots: &'a [ConfigNode],
    held: &FxHashSet<String>,
    action: Action,
) -> Vec<AccessNode<'a>> {
    roots.iter().filter_map(|node| filter_node(node, held, action)).collect()
}

fn filter_node<'a>(
    node: &'a ConfigNode,
    held: &FxHashSet<String>,
    action: Action,
) -> Option<AccessNode<'a>> {
    let children = filter_categories(node.children(), held, action);
    let accessible = !action.is_empty() && is_accessible(node, held);

    (accessible || !children.is_empty()).then_some(AccessNode { node, accessible, children })
}

#[must_use]
pub fn filter_flags<'a>(flags: &'a [ConfigNode], held: &FxHashSet<String>) -> Vec<&'a ConfigNode> {
    flags.iter().filter(|flag| is_accessible(flag, held)).collect()
}

/// Priority and flags a new ticket of a category starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefaults {
    pub priority: Priority,
    pub default_flags: Vec<String>,
}

/// Splits the whitespace-separated flag list stored on tickets.
#[must_use]
pub fn split_flags(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

impl GrievanceConfig {
    #[must_use]
    pub fn filter_categories(&self, principal: &Principal, action: Action) -> Vec<AccessNode<'_>> {
        if principal.is_anonymous() {
            return Vec::new();
        }
        filter_categories(self.categories(), principal.permissions(), action)
    }

    #[must_use]
    pub fn filter_flags(&self, principal: &Principal) -> Vec<&ConfigNode> {
        if principal.is_anonymous() {
            return Vec::new();
        }
        filter_flags(self.flags(), principal.permissions())
    }

    /// Categories the principal can open tickets in, flattened in pre-order.
    #[must_use]
    pub fn accessible_categories(&self, principal: &Principal) -> Vec<&ConfigNode> {
        self.filter_categories(principal, Action::CREATE)
            .iter()
            .flat_map(AccessNode::flatten)
            .collect()
    }

    #[must_use]
    pub fn accessible_flags(&self, principal: &Principal) -> Vec<&ConfigNode> {
        self.filter_flags(principal)
    }

    /// Unknown categories are denied.
    #[must_use]
    pub fn can_use_category(&self, principal: &Principal, name: &str) -> bool {
        !principal.is_anonymous()
            && self.category(name).is_some_and(|node| is_accessible(node, principal.permissions()))
    }

    /// Unknown flags are denied.
    #[must_use]
    pub fn can_use_flag(&self, principal: &Principal, name: &str) -> bool {
        !principal.is_anonymous()
            && self.flag(name).is_some_and(|node| is_accessible(node, principal.permissions()))
    }

    /// Checks a ticket's category and flags before it is created or updated.
    ///
    /// # Errors
    /// - [`GrievanceError::UnknownCategory`] / [`GrievanceError::UnknownFlag`] for names that
    ///   are not configured.
    /// - [`GrievanceError::PermissionDenied`] naming the first category or flag the principal
    ///   cannot use.
    pub fn validate_ticket_access<S>(
        &self,
        principal: &Principal,
        category: &str,
        flags: &[S],
    ) -> Result<(), GrievanceError>
    where
        S: AsRef<str>,
    {
        if self.category(category).is_none() {
            return Err(GrievanceError::UnknownCategory { name: category.to_owned(), context: None });
        }
        if !self.can_use_category(principal, category) {
            debug!(principal = ?principal.id(), %category, "Category denied");
            return Err(GrievanceError::PermissionDenied {
                message: format!("no permission to use category '{category}'").into(),
                context: None,
            });
        }

        for flag in flags.iter().map(AsRef::as_ref) {
            if self.flag(flag).is_none() {
                return Err(GrievanceError::UnknownFlag { name: flag.to_owned(), context: None });
            }
            if !self.can_use_flag(principal, flag) {
                debug!(principal = ?principal.id(), %flag, "Flag denied");
                return Err(GrievanceError::PermissionDenied {
                    message: format!("no permission to use flag '{flag}'").into(),
                    context: None,
                });
            }
        }

        Ok(())
    }

    /// Whether an existing ticket shows up in the principal's query results.
    ///
    /// The category must be a configured category the principal can use. Flags must all be
    /// usable; unknown flag names on old tickets are ignored.
    #[must_use]
    pub fn ticket_visible<S>(&self, principal: &Principal, category: Option<&str>, flags: &[S]) -> bool
    where
        S: AsRef<str>,
    {
        let Some(category) = category else {
            return false;
        };
        if !self.can_use_category(principal, category) {
            return false;
        }

        flags.iter().map(AsRef::as_ref).all(|flag| {
            self.flag(flag).is_none_or(|node| is_accessible(node, principal.permissions()))
        })
    }

    /// Unknown categories get [`Priority::Medium`] and no flags.
    #[must_use]
    pub fn category_defaults(&self, name: &str) -> CategoryDefaults {
        self.category(name).map_or_else(
            || CategoryDefaults { priority: Priority::default(), default_flags: Vec::new() },
            |node| CategoryDefaults {
                priority: node.priority_level().unwrap_or_default(),
                default_flags: node.default_flags().to_vec(),
            },
        )
    }

    /// Highest recognized priority among the category and flags, never below `Medium`.
    #[must_use]
    pub fn effective_priority<S>(&self, category: &str, flags: &[S]) -> Priority
    where
        S: AsRef<str>,
    {
        let from_category = self.category(category).and_then(ConfigNode::priority_level);
        let from_flags = flags
            .iter()
            .filter_map(|flag| self.flag(flag.as_ref()))
            .filter_map(ConfigNode::priority_level);

        from_category.into_iter().chain(from_flags).fold(Priority::Medium, Ord::max)
    }

    /// Names of every configured flag an unprivileged principal may not use.
    #[must_use]
    pub fn restricted_flags(&self) -> Vec<&str> {
        walk(self.flags())
            .filter(|flag| !flag.permissions().is_unrestricted())
            .map(ConfigNode::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> GrievanceConfig {
        GrievanceConfig::from_payload(&json!({
            "grievance_types": [
                "open",
                { "name": "closed", "permissions": [] },
                { "name": "staff", "permissions": "127001" }
            ],
            "grievance_flags": [
                "NORMAL",
                { "name": "SENSITIVE", "permissions": ["127002"], "priority": "Critical" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_action_grants_nothing() {
        let config = config();
        let officer = Principal::new("officer", ["127001"]);
        assert!(config.filter_categories(&officer, Action::empty()).is_empty());
        assert_eq!(config.filter_categories(&officer, Action::VIEW).len(), 2);
    }

    #[test]
    fn test_explicit_empty_permissions_deny_everyone() {
        let config = config();
        let admin = Principal::new("admin", ["127001", "127002", "999999"]);
        assert!(!config.can_use_category(&admin, "closed"));
        assert!(config.can_use_category(&admin, "open"));
    }

    #[test]
    fn test_split_flags() {
        assert_eq!(split_flags("  SENSITIVE   SPECIAL "), ["SENSITIVE", "SPECIAL"]);
        assert!(split_flags("").is_empty());
    }

    #[test]
    fn test_effective_priority_floor_and_escalation() {
        let config = config();
        assert_eq!(config.effective_priority::<&str>("open", &[]), Priority::Medium);
        assert_eq!(config.effective_priority("open", &["SENSITIVE"]), Priority::Critical);
        assert_eq!(config.restricted_flags(), ["SENSITIVE"]);
    }
}
