use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a caller principal.
///
/// The host supplies one per call. The registry never inspects the contents
/// beyond equality, so any stable identity scheme (account address, service
/// name, key fingerprint) works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(pub String);

impl Principal {
    /// Create a principal from any string-like identity.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(identity: &str) -> Self {
        Self(identity.to_string())
    }
}
