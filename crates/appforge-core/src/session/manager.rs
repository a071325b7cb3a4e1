//! Session lifecycle management.

use super::model::Session;
use super::repository::SessionRepository;
use crate::error::Result;
use crate::identity::{CredentialVerifier, Credentials};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Single source of truth for "who is logged in".
///
/// `SessionManager` is responsible for:
/// - Establishing sessions via login, signup, and OAuth login
/// - Rehydrating the session from durable storage on startup
/// - Tearing the session down on logout
/// - Answering `is_authenticated` / `current_session` queries
///
/// It is constructed once at process start and passed by reference to any
/// component that needs it; there is no module-level session holder.
/// Credential checking is delegated to the injected [`CredentialVerifier`],
/// so a real verifier can replace the demo one without touching this type.
pub struct SessionManager {
    /// The current session, if any
    current: RwLock<Option<Session>>,
    /// Durable storage backend for the session payload
    repository: Arc<dyn SessionRepository>,
    /// Pluggable credential verification capability
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionManager {
    /// Creates a new `SessionManager` with no active session.
    ///
    /// # Arguments
    ///
    /// * `repository` - Durable storage backend for the session payload
    /// * `verifier` - Credential verification capability
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            current: RwLock::new(None),
            repository,
            verifier,
        }
    }

    /// Attempts to rehydrate the session from durable storage on startup.
    ///
    /// # Returns
    ///
    /// `Some(session)` if a persisted session was found, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails.
    pub async fn restore(&self) -> Result<Option<Session>> {
        if let Some(session) = self.repository.load().await? {
            tracing::info!(user_id = %session.identity.id, "restored persisted session");
            let mut current = self.current.write().await;
            *current = Some(session.clone());
            return Ok(Some(session));
        }
        Ok(None)
    }

    /// Establishes a session from an email/password login.
    ///
    /// On success the new session replaces any current one and is persisted.
    /// On failure the current session (or its absence) is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Credential` if the verifier rejects the
    /// credentials, or a storage error if persisting fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let identity = self
            .verifier
            .verify(&Credentials::Password {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        tracing::info!(user_id = %identity.id, "login succeeded");
        self.establish(Session::new(identity)).await
    }

    /// Establishes a session from a signup.
    ///
    /// Behaves like [`login`](Self::login), but the submitted name and email
    /// override the verified identity before it is stored, so the returned
    /// session reflects what the user typed.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Credential` if the verifier rejects the
    /// credentials, or a storage error if persisting fails.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let mut identity = self
            .verifier
            .verify(&Credentials::Password {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        identity.name = name.to_string();
        identity.email = email.to_string();

        tracing::info!(user_id = %identity.id, email = %identity.email, "signup succeeded");
        self.establish(Session::new(identity)).await
    }

    /// Establishes a session from an OAuth login.
    ///
    /// The provider name is recorded for telemetry; the flow is otherwise
    /// identical to [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Provider` if the provider flow fails, or a
    /// storage error if persisting fails.
    pub async fn oauth_login(&self, provider: &str) -> Result<Session> {
        let identity = self
            .verifier
            .verify(&Credentials::OAuth {
                provider: provider.to_string(),
            })
            .await?;

        tracing::info!(user_id = %identity.id, provider = %provider, "oauth login succeeded");
        self.establish(Session::new(identity)).await
    }

    /// Tears down the current session and removes the persisted copy.
    ///
    /// Idempotent: logging out with no active session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the persisted copy fails.
    pub async fn logout(&self) -> Result<()> {
        let mut current = self.current.write().await;
        if current.is_none() {
            return Ok(());
        }

        if let Some(session) = current.take() {
            tracing::info!(user_id = %session.identity.id, "logged out");
        }
        drop(current);

        self.repository.clear().await
    }

    /// Returns a copy of the current session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Returns whether a session is present.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Replaces the current session and persists the new one.
    async fn establish(&self, session: Session) -> Result<Session> {
        self.repository.save(&session).await?;

        let mut current = self.current.write().await;
        *current = Some(session.clone());

        Ok(session)
    }
}
