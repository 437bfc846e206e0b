//! Session identifier type and ID generation.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Result, SessionError};

/// Unique identifier for a session.
///
/// Session IDs are opaque string tokens obtained from an [`IdProvider`];
/// the store never inspects or re-checks them for uniqueness. The ID is
/// displayed as `sess-XXXX…` where the suffix is the provider's token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Arc<str>);

impl SessionId {
    /// View the full token, including the `sess-` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a SessionId from a raw token.
    ///
    /// This is primarily for testing and deserialization; production IDs
    /// come from an [`IdProvider`].
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into().into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix("sess-") {
            Some(token) if !token.is_empty() => Ok(Self::from_raw(s)),
            _ => Err(SessionError::NotFound(s.into())),
        }
    }
}

/// Source of fresh session identifiers.
///
/// Implementations must produce collision-free tokens (e.g. cryptographically
/// random strings); the store trusts them and never re-checks a new ID
/// against existing keys. A provider failure surfaces from
/// [`SessionStore::create`](crate::SessionStore::create) as
/// [`SessionError::IdGeneration`].
pub trait IdProvider: Send + Sync {
    /// Generate a fresh unique session ID.
    fn new_id(&self) -> Result<SessionId>;
}

/// Default ID provider backed by UUID v4.
///
/// 122 bits of randomness per token, formatted as `sess-<32 hex digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn new_id(&self) -> Result<SessionId> {
        Ok(SessionId::from_raw(format!(
            "sess-{}",
            Uuid::new_v4().simple()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uniqueness() {
        let provider = UuidProvider;
        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            let id = provider.new_id().unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {}", id);
        }
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_display_format() {
        let provider = UuidProvider;
        let id = provider.new_id().unwrap();
        let s = id.to_string();

        assert!(s.starts_with("sess-"));
        assert_eq!(s.len(), "sess-".len() + 32);
        assert!(s["sess-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_valid() {
        let id: SessionId = "sess-000000ff".parse().unwrap();
        assert_eq!(id.as_str(), "sess-000000ff");
    }

    #[test]
    fn test_parse_invalid() {
        // Missing prefix
        assert!("000000ff".parse::<SessionId>().is_err());

        // Wrong prefix
        assert!("session-000000ff".parse::<SessionId>().is_err());

        // Prefix with no token
        assert!("sess-".parse::<SessionId>().is_err());

        // Empty
        assert!("".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_roundtrip() {
        let original = UuidProvider.new_id().unwrap();
        let s = original.to_string();
        let parsed: SessionId = s.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_hash_eq() {
        let id1 = SessionId::from_raw("sess-42");
        let id2 = SessionId::from_raw("sess-42");
        let id3 = SessionId::from_raw("sess-43");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);

        let mut set = HashSet::new();
        set.insert(id1);
        assert!(set.contains(&id2));
        assert!(!set.contains(&id3));
    }
}
