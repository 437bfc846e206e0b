//! Session management module.
//!
//! This module provides the session store, its identifier and ID-provider
//! types, and the background reaper that removes expired sessions.

mod id;
mod reaper;
mod store;

pub use id::{IdProvider, SessionId, UuidProvider};
pub use store::{SessionData, SessionStore};
