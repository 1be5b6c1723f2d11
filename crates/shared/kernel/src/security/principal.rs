use fxhash::{FxHashMap, FxHashSet};

/// The acting identity whose held permission codes gate access.
///
/// A principal without an id is anonymous. Anonymous principals never pass a category or
/// flag check, whatever codes they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    id: Option<String>,
    permissions: FxHashSet<String>,
}

impl Principal {
    /// Creates an authenticated principal holding `permissions`.
    pub fn new<I, P>(id: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self { id: Some(id.into()), permissions: permissions.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }

    #[must_use]
    pub const fn permissions(&self) -> &FxHashSet<String> {
        &self.permissions
    }

    #[must_use]
    pub fn holds(&self, code: &str) -> bool {
        self.permissions.contains(code)
    }
}

/// Resolves a principal id into the permission codes it currently holds.
pub trait IdentityProvider: Send + Sync {
    fn held_permissions(&self, principal_id: &str) -> FxHashSet<String>;

    /// Builds a [`Principal`] snapshot for `principal_id`.
    fn principal(&self, principal_id: &str) -> Principal {
        Principal::new(principal_id, self.held_permissions(principal_id))
    }
}

/// Fixed id → permissions table, for tests and the operator CLI.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    grants: FxHashMap<String, FxHashSet<String>>,
}

impl StaticIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) the grants for `principal_id`.
    #[must_use]
    pub fn grant<I, P>(mut self, principal_id: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.grants
            .entry(principal_id.into())
            .or_default()
            .extend(permissions.into_iter().map(Into::into));
        self
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn held_permissions(&self, principal_id: &str) -> FxHashSet<String> {
        self.grants.get(principal_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_principal() {
        let principal = Principal::anonymous();
        assert!(principal.is_anonymous());
        assert!(principal.permissions().is_empty());
        assert_eq!(principal.id(), None);
    }

    #[test]
    fn test_static_provider_grants() {
        let provider = StaticIdentityProvider::new()
            .grant("officer", ["127000", "127001"])
            .grant("officer", ["127002"]);

        let officer = provider.principal("officer");
        assert_eq!(officer.id(), Some("officer"));
        assert!(officer.holds("127000"));
        assert!(officer.holds("127002"));
        assert!(!officer.holds("127003"));

        let stranger = provider.principal("stranger");
        assert!(!stranger.is_anonymous());
        assert!(stranger.permissions().is_empty());
    }
}
