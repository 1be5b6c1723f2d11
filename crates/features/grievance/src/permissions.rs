use crate::schema::PermissionSpec;
use fxhash::FxHashSet;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Permission codes guarding a node, with "any-of grants" semantics.
///
/// `unrestricted` means no permissions were configured at all. A configured but empty list is
/// restricted with an empty set, which nobody satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionSet {
    codes: BTreeSet<String>,
    unrestricted: bool,
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::unrestricted()
    }
}

impl PermissionSet {
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self { codes: BTreeSet::new(), unrestricted: true }
    }

    pub fn restricted<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { codes: codes.into_iter().map(Into::into).collect(), unrestricted: false }
    }

    /// Normalizes a raw `permissions` field. Absence yields an unrestricted set.
    #[must_use]
    pub fn from_spec(spec: Option<PermissionSpec>) -> Self {
        match spec {
            None => Self::unrestricted(),
            Some(PermissionSpec::One(code)) => Self::restricted([code.into_code()]),
            Some(PermissionSpec::Many(codes)) => {
                Self::restricted(codes.into_iter().map(|c| c.into_code()))
            },
        }
    }

    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    #[must_use]
    pub const fn codes(&self) -> &BTreeSet<String> {
        &self.codes
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when the set is unrestricted or shares at least one code with `held`.
    #[must_use]
    pub fn grants(&self, held: &FxHashSet<String>) -> bool {
        self.unrestricted || self.codes.iter().any(|code| held.contains(code))
    }
}

impl Serialize for PermissionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.unrestricted {
            serializer.serialize_none()
        } else {
            serializer.collect_seq(&self.codes)
        }
    }
}
