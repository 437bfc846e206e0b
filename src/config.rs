//! Store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a [`SessionStore`](crate::SessionStore).
///
/// Durations are serialized as whole seconds, matching the granularity the
/// store operates at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Time-to-live for a session, measured from creation or the most
    /// recent update.
    #[serde(with = "duration_secs")]
    pub ttl: Duration,

    /// Interval between reaper purge passes. Must be shorter than `ttl`,
    /// so a session is removed at most one tick past its expiry.
    #[serde(with = "duration_secs")]
    pub reap_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5),
            reap_interval: Duration::from_secs(1),
        }
    }
}

impl StoreConfig {
    /// Custom TTL and reap interval.
    pub fn custom(ttl: Duration, reap_interval: Duration) -> Self {
        Self { ttl, reap_interval }
    }

    /// Check that the reap interval is shorter than the TTL.
    ///
    /// A tick longer than the TTL would stretch the staleness window beyond
    /// one full TTL past expiry.
    pub fn is_valid(&self) -> bool {
        !self.ttl.is_zero() && !self.reap_interval.is_zero() && self.reap_interval < self.ttl
    }
}

/// Serde helpers for `Duration` as whole seconds.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = StoreConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(5));
        assert_eq!(config.reap_interval, Duration::from_secs(1));
        assert!(config.is_valid());
    }

    #[test]
    fn test_custom() {
        let config = StoreConfig::custom(Duration::from_secs(30), Duration::from_secs(5));
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.reap_interval, Duration::from_secs(5));
        assert!(config.is_valid());
    }

    #[test]
    fn test_invalid_when_tick_exceeds_ttl() {
        let config = StoreConfig::custom(Duration::from_secs(1), Duration::from_secs(5));
        assert!(!config.is_valid());

        let config = StoreConfig::custom(Duration::from_secs(5), Duration::from_secs(5));
        assert!(!config.is_valid());
    }

    #[test]
    fn test_invalid_when_zero() {
        assert!(!StoreConfig::custom(Duration::ZERO, Duration::from_secs(1)).is_valid());
        assert!(!StoreConfig::custom(Duration::from_secs(5), Duration::ZERO).is_valid());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = StoreConfig::custom(Duration::from_secs(10), Duration::from_secs(2));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"ttl":10,"reap_interval":2}"#);

        let parsed: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_serde_defaults_for_missing_fields() {
        let parsed: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, StoreConfig::default());
    }
}
