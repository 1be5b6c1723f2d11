use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const VIEW: &str = "view";
pub const CREATE: &str = "create";
pub const UPDATE: &str = "update";

bitflags! {
    /// Ticket actions gated by category/flag permissions.
    ///
    /// Every action is currently checked against the same per-node permission set; the
    /// distinction exists so callers can state intent and so per-action sets can be added
    /// without changing call sites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Action: u8 {
        const VIEW = 1 << 0;
        const CREATE = 1 << 1;
        const UPDATE = 1 << 2;

        const ALL = Self::VIEW.bits() | Self::CREATE.bits() | Self::UPDATE.bits();
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            VIEW => Self::VIEW,
            CREATE => Self::CREATE,
            UPDATE => Self::UPDATE,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u8> for Action {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
