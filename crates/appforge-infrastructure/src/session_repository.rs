//! TOML-backed session repository.
//!
//! Persists the single session slot as `session.toml` under the AppForge
//! state directory, through the versioned [`SessionDto`]. File I/O runs on
//! the blocking thread pool so async callers are never stalled.

use crate::dto::SessionDto;
use crate::paths::ForgePaths;
use crate::storage::AtomicTomlFile;
use appforge_core::error::{ForgeError, Result};
use appforge_core::session::{Session, SessionRepository};
use async_trait::async_trait;

/// Durable session storage backed by an atomic TOML file.
#[derive(Clone)]
pub struct TomlSessionRepository {
    file: AtomicTomlFile<SessionDto>,
}

impl TomlSessionRepository {
    /// Creates a repository writing to `session.toml` under the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created.
    pub fn new(paths: &ForgePaths) -> Result<Self> {
        paths.ensure_root()?;
        Ok(Self {
            file: AtomicTomlFile::new(paths.session_file()),
        })
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(AtomicTomlFile<SessionDto>) -> Result<T> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || op(file))
            .await
            .map_err(|e| ForgeError::internal(format!("blocking task failed: {}", e)))?
    }
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        let dto = self.run_blocking(|file| Ok(file.load()?)).await?;
        dto.map(Session::try_from).transpose()
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let dto = SessionDto::from(session);
        self.run_blocking(move |file| {
            file.save(&dto)?;
            Ok(())
        })
        .await?;
        tracing::debug!("session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.run_blocking(|file| {
            file.remove()?;
            Ok(())
        })
        .await?;
        tracing::debug!("persisted session removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_core::identity::Identity;

    fn repository_in(dir: &tempfile::TempDir) -> TomlSessionRepository {
        let paths = ForgePaths::new(Some(dir.path().to_path_buf())).unwrap();
        TomlSessionRepository::new(&paths).unwrap()
    }

    #[tokio::test]
    async fn test_load_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        assert!(repository.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);

        let session = Session::new(Identity::canonical());
        repository.save(&session).await.unwrap();

        let loaded = repository.load().await.unwrap().unwrap();
        assert_eq!(loaded.identity, session.identity);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);

        repository.save(&Session::new(Identity::canonical())).await.unwrap();

        let mut replacement = Identity::canonical();
        replacement.email = "second@example.com".to_string();
        repository.save(&Session::new(replacement)).await.unwrap();

        let loaded = repository.load().await.unwrap().unwrap();
        assert_eq!(loaded.identity.email, "second@example.com");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);

        repository.save(&Session::new(Identity::canonical())).await.unwrap();
        repository.clear().await.unwrap();
        assert!(repository.load().await.unwrap().is_none());

        // Clearing an already-empty store must succeed
        repository.clear().await.unwrap();
    }
}
