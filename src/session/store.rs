//! Session storage and expiry management.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::reaper::Reaper;
use super::{IdProvider, SessionId, UuidProvider};
use crate::config::StoreConfig;
use crate::error::SessionError;
use crate::Result;

/// Session payload: an arbitrary string-keyed mapping, opaque to the store.
pub type SessionData = HashMap<String, serde_json::Value>;

/// A single session record.
#[derive(Debug, Clone)]
struct Session {
    /// Payload; the store never inspects its contents.
    data: SessionData,
    /// Absolute deadline; always `last_touch + ttl`.
    expires_at: Instant,
}

impl Session {
    fn new(config: &StoreConfig) -> Self {
        Self {
            data: SessionData::new(),
            expires_at: Instant::now() + config.ttl,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Map and config shared between the store handle and its reaper task.
pub(crate) struct StoreInner {
    /// The sole source of truth: no session exists outside this map.
    sessions: RwLock<HashMap<SessionId, Session>>,
    config: StoreConfig,
}

impl StoreInner {
    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config: StoreConfig::default(),
        }
    }

    /// Remove every session whose deadline has passed.
    ///
    /// Returns the number of sessions removed. The whole scan-and-delete
    /// runs under the write lock, so a concurrent `get` sees either the
    /// pre-purge record or nothing, and a purge never acts on a stale
    /// deadline.
    pub(crate) fn purge_expired(&self) -> Result<usize> {
        let now = Instant::now();
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        Ok(before - sessions.len())
    }
}

/// Thread-safe in-memory session store with TTL-based expiry.
///
/// Every session carries a deadline of `last_touch + ttl`, reset by each
/// successful [`update`](SessionStore::update). A single background reaper,
/// spawned at construction and stopped when the store is dropped, removes
/// sessions past their deadline on every tick.
///
/// All operations go through one `RwLock` around the session map; lock hold
/// times are O(1) except for the reaper's O(n) purge scan.
pub struct SessionStore {
    pub(crate) inner: Arc<StoreInner>,
    provider: Box<dyn IdProvider>,
    /// Aborted on drop, ending the purge loop with the store.
    _reaper: Reaper,
}

impl SessionStore {
    /// Create a store with the default configuration (5s TTL, 1s reap
    /// interval) and the UUID v4 ID provider.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime (the reaper task is spawned
    /// here), or if the configuration is invalid.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store with a custom configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_provider(config, Box::new(UuidProvider))
    }

    /// Create a store with a custom configuration and ID provider.
    pub fn with_provider(config: StoreConfig, provider: Box<dyn IdProvider>) -> Self {
        assert!(
            config.is_valid(),
            "reap interval must be non-zero and shorter than the TTL"
        );

        let inner = Arc::new(StoreInner {
            sessions: RwLock::new(HashMap::new()),
            config: config.clone(),
        });
        let reaper = Reaper::spawn(Arc::downgrade(&inner), config.reap_interval);

        Self {
            inner,
            provider,
            _reaper: reaper,
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Create a new session with empty data.
    ///
    /// Returns the newly assigned session ID. Fails with
    /// [`SessionError::IdGeneration`] if the ID provider fails; no retry is
    /// attempted. The provider call completes before the lock is taken, so
    /// readers are never blocked on the external dependency.
    pub fn create(&self) -> Result<SessionId> {
        let id = self.provider.new_id()?;
        let session = Session::new(&self.inner.config);

        let mut sessions = self
            .inner
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        sessions.insert(id.clone(), session);
        Ok(id)
    }

    /// Get a copy of the session's data.
    ///
    /// Returns an owned clone; mutating it has no effect on the stored
    /// payload. Fails with [`SessionError::NotFound`] if the session is
    /// absent; whether it never existed or expired and was purged is
    /// indistinguishable to the caller.
    pub fn get(&self, id: &SessionId) -> Result<SessionData> {
        let sessions = self
            .inner
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;

        sessions
            .get(id)
            .map(|session| session.data.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Replace the session's data and renew its TTL.
    ///
    /// The deadline is reset to a full TTL from now, not from creation.
    /// Fails with [`SessionError::NotFound`] if the session is absent.
    pub fn update(&self, id: &SessionId, data: SessionData) -> Result<()> {
        let mut sessions = self
            .inner
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        session.data = data;
        session.expires_at = Instant::now() + self.inner.config.ttl;
        Ok(())
    }

    /// Remove a session explicitly (e.g. logout).
    ///
    /// Returns whether the session existed.
    pub fn remove(&self, id: &SessionId) -> Result<bool> {
        let mut sessions = self
            .inner
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.remove(id).is_some())
    }

    /// Check if a session exists.
    pub fn contains(&self, id: &SessionId) -> Result<bool> {
        let sessions = self
            .inner
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.contains_key(id))
    }

    /// Get the number of sessions in the store.
    pub fn count(&self) -> usize {
        self.inner.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("config", &self.inner.config)
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}
