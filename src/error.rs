//! Error types for session-reaper.

use thiserror::Error;

/// Main error type for session store operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Session with the given ID was not found.
    ///
    /// A session that expired and was purged is indistinguishable from one
    /// that never existed.
    #[error("session not found: {0}")]
    NotFound(String),

    /// The ID provider failed while creating a session.
    ///
    /// Propagated to the caller as-is; the store never retries generation.
    #[error("session ID generation failed: {0}")]
    IdGeneration(String),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

/// Convenience Result type for session store operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = SessionError::NotFound("sess-deadbeef".into());
        assert!(err.to_string().contains("sess-deadbeef"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_id_generation_display() {
        let err = SessionError::IdGeneration("entropy source unavailable".into());
        assert!(err.to_string().contains("generation failed"));
        assert!(err.to_string().contains("entropy source unavailable"));
    }

    #[test]
    fn test_lock_poisoned_display() {
        let err = SessionError::LockPoisoned;
        assert!(err.to_string().contains("poisoned"));
    }
}
