//! Session domain model.

use crate::identity::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session.
///
/// At most one session exists at a time, held by the `SessionManager`.
/// The session owns the identity it was established for; "is authenticated"
/// means exactly "a session is present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The identity this session was established for
    pub identity: Identity,
    /// Timestamp when the session was established
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for the given identity, established now.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            established_at: Utc::now(),
        }
    }
}
