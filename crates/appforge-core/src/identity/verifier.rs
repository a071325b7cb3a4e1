//! Credential verification capability.
//!
//! The session manager never inspects credentials itself; it hands them to a
//! `CredentialVerifier`. The default implementation accepts anything and
//! returns the canonical demo identity, which is the demo-mode behavior of
//! the product. A real verifier can be substituted without touching the
//! session contract.

use crate::error::Result;
use crate::identity::model::Identity;
use serde::{Deserialize, Serialize};

/// Credentials submitted by a login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// Email + password form submission.
    Password { email: String, password: String },
    /// OAuth flow, identified by provider name (e.g. "github", "google").
    OAuth { provider: String },
}

impl Credentials {
    /// The email carried by the credentials, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Password { email, .. } => Some(email),
            Self::OAuth { .. } => None,
        }
    }
}

/// Verifies credentials and resolves them to an account identity.
///
/// Implementations must not mutate any session state; on failure they return
/// `ForgeError::Credential` or `ForgeError::Provider` and the caller keeps
/// whatever session it already had.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Resolves credentials to an identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Identity)`: Credentials accepted
    /// - `Err(ForgeError::Credential)`: Invalid email/password
    /// - `Err(ForgeError::Provider)`: OAuth provider failure
    async fn verify(&self, credentials: &Credentials) -> Result<Identity>;
}

/// Demo verifier that accepts any credentials.
///
/// Every verification succeeds with the canonical identity. The submitted
/// credentials are only logged, never checked.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialVerifier;

#[async_trait::async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<Identity> {
        match credentials {
            Credentials::Password { email, .. } => {
                tracing::debug!(email = %email, "accepting password credentials");
            }
            Credentials::OAuth { provider } => {
                tracing::debug!(provider = %provider, "accepting oauth credentials");
            }
        }
        Ok(Identity::canonical())
    }
}
