//! Session repository trait.
//!
//! Defines the interface for durable session persistence. The store is a
//! single slot under a fixed key: at most one serialized session exists.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// Durable single-slot store for the current session.
///
/// This trait decouples the session lifecycle from the specific storage
/// mechanism (e.g. a TOML file, browser-local storage, a keychain).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: A session was persisted
    /// - `Ok(None)`: No session is persisted
    /// - `Err(_)`: Error occurred during retrieval
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists the session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session.
    ///
    /// Idempotent: clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}
