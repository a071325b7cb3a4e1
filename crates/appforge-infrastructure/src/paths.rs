//! Unified path management for AppForge files.
//!
//! All durable AppForge state lives under one per-user directory, resolved
//! per platform. Tests and embedders can override the root.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/appforge/          # Config directory (Linux; platform dirs elsewhere)
//! └── session.toml             # Persisted session payload
//! ```

use appforge_core::error::{ForgeError, Result};
use std::path::{Path, PathBuf};

/// Name of the per-user directory holding AppForge state.
const APP_DIR: &str = "appforge";

/// File holding the serialized session payload.
const SESSION_FILE: &str = "session.toml";

/// Resolved filesystem layout for AppForge state.
#[derive(Debug, Clone)]
pub struct ForgePaths {
    root: PathBuf,
}

impl ForgePaths {
    /// Creates a path layout rooted at the platform config directory, or at
    /// `override_root` when given (tests, embedders).
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Config` if the platform config directory cannot
    /// be determined.
    pub fn new(override_root: Option<PathBuf>) -> Result<Self> {
        let root = match override_root {
            Some(root) => root,
            None => dirs::config_dir()
                .ok_or_else(|| ForgeError::config("cannot determine config directory"))?
                .join(APP_DIR),
        };
        Ok(Self { root })
    }

    /// The root state directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the persisted session file.
    pub fn session_file(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    /// Creates the state directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_root() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ForgePaths::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.root(), dir.path());
        assert_eq!(paths.session_file(), dir.path().join("session.toml"));
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("appforge");
        let paths = ForgePaths::new(Some(nested.clone())).unwrap();
        paths.ensure_root().unwrap();
        assert!(nested.is_dir());
    }
}
