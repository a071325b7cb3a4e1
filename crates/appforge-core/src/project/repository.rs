//! Project repository trait.
//!
//! Defines the interface for project collection storage.

use super::model::Project;
use crate::error::Result;
use async_trait::async_trait;

/// Storage contract for the project collection.
///
/// This trait decouples the project store's logic from the specific backing
/// collection (in-memory vector, files, a remote API).
///
/// # Implementation Notes
///
/// Implementations must:
/// - Preserve insertion order in `list_all`
/// - Keep a replaced record at its original position
/// - Handle concurrent access safely
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a project by its ID. Exact match only.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Project))`: Project found
    /// - `Ok(None)`: Project not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, project_id: &str) -> Result<Option<Project>>;

    /// Saves a project, inserting or replacing by ID.
    ///
    /// A new ID is appended at the end of the collection; an existing ID is
    /// replaced in place.
    async fn save(&self, project: &Project) -> Result<()>;

    /// Deletes a project by ID.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: A record was removed
    /// - `Ok(false)`: No record had that ID
    /// - `Err(_)`: Error occurred during deletion
    async fn delete(&self, project_id: &str) -> Result<bool>;

    /// Lists all projects in insertion order.
    async fn list_all(&self) -> Result<Vec<Project>>;

    /// Checks if a project exists.
    async fn exists(&self, project_id: &str) -> Result<bool> {
        Ok(self.find_by_id(project_id).await?.is_some())
    }
}
