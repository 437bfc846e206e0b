//! # session-reaper
//!
//! In-memory session store with TTL expiry and a background reaper.
//!
//! Every session carries a time-to-live that is renewed on each update; a
//! single background task owned by the store removes sessions once their
//! TTL has lapsed, within one reap interval of the deadline.
//!
//! ## Features
//!
//! - **TTL renewal**: each successful update extends a session's life by a
//!   full TTL from the update time
//! - **Bounded staleness**: expired sessions are removed within one reap
//!   interval of their deadline
//! - **One lock, one reaper**: a single exclusion boundary guards the map,
//!   and a single reaper per store is spawned at construction and stopped
//!   when the store is dropped
//! - **Pluggable IDs**: session tokens come from an [`IdProvider`]; the
//!   default is UUID v4
//!
//! ## Quick Start
//!
//! ```no_run
//! use session_reaper::{SessionData, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> session_reaper::Result<()> {
//!     // Initialize logging
//!     session_reaper::logging::try_init().ok();
//!
//!     // Create a store; its reaper starts here and stops on drop
//!     let store = SessionStore::new();
//!
//!     // Create a new session
//!     let id = store.create()?;
//!
//!     // Attach some data; this also renews the TTL
//!     let mut data = SessionData::new();
//!     data.insert("website".into(), "longhoang.de".into());
//!     store.update(&id, data)?;
//!
//!     println!("session {} holds {:?}", id, store.get(&id)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{Result, SessionError};
pub use session::{IdProvider, SessionData, SessionId, SessionStore, UuidProvider};
