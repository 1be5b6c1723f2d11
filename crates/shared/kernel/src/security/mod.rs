//! Principal identity and permission lookup.

mod principal;

pub use principal::{IdentityProvider, Principal, StaticIdentityProvider};
