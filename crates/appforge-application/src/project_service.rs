//! Project store use cases.
//!
//! CRUD over the project collection with consistent timestamping. The store
//! owns identity and time: callers hand in drafts and patches, never ids or
//! timestamps.

use appforge_core::error::{ForgeError, Result};
use appforge_core::project::{
    Project, ProjectDraft, ProjectPatch, ProjectRepository, ProjectStats,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Service managing the project collection.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a new `ProjectService` over the given repository.
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Creates a project from a draft.
    ///
    /// The store assigns a unique id and sets `created_at == updated_at` to
    /// the current instant; the stored record is returned.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Config` for an invalid draft, or a storage error.
    pub async fn add(&self, draft: ProjectDraft) -> Result<Project> {
        draft.validate()?;

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            features: draft.features,
            created_at: now,
            updated_at: now,
            repository: draft.repository,
            deployments: draft.deployments,
        };

        self.repository.save(&project).await?;
        tracing::info!(project_id = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    /// Merges a partial update into an existing project.
    ///
    /// `updated_at` is bumped to the current instant; `id` and `created_at`
    /// are never touched.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::NotFound` if no project has the given id.
    pub async fn update(&self, project_id: &str, patch: ProjectPatch) -> Result<Project> {
        let mut project = self
            .repository
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| ForgeError::not_found("project", project_id))?;

        project.merge(patch);
        project.updated_at = Utc::now();

        self.repository.save(&project).await?;
        tracing::debug!(project_id = %project.id, "project updated");
        Ok(project)
    }

    /// Deletes a project by id.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::NotFound` if no project has the given id.
    pub async fn delete(&self, project_id: &str) -> Result<()> {
        if !self.repository.delete(project_id).await? {
            return Err(ForgeError::not_found("project", project_id));
        }
        tracing::info!(project_id = %project_id, "project deleted");
        Ok(())
    }

    /// Looks up a project by id. Exact match only.
    pub async fn get(&self, project_id: &str) -> Result<Option<Project>> {
        self.repository.find_by_id(project_id).await
    }

    /// Lists all projects in insertion order.
    pub async fn list(&self) -> Result<Vec<Project>> {
        self.repository.list_all().await
    }

    /// Computes the dashboard summary counts.
    pub async fn stats(&self) -> Result<ProjectStats> {
        let projects = self.repository.list_all().await?;
        Ok(ProjectStats::from_projects(&projects))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_infrastructure::InMemoryProjectRepository;
    use std::collections::HashSet;

    fn service() -> ProjectService {
        ProjectService::new(Arc::new(InMemoryProjectRepository::new()))
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let service = service();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let project = service
                .add(ProjectDraft::named(format!("Project {}", i)))
                .await
                .unwrap();
            assert!(ids.insert(project.id));
        }
    }

    #[tokio::test]
    async fn test_add_sets_equal_timestamps() {
        let service = service();
        let project = service.add(ProjectDraft::named("Blog")).await.unwrap();
        assert_eq!(project.created_at, project.updated_at);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name() {
        let service = service();
        let err = service.add(ProjectDraft::named("  ")).await.unwrap_err();
        assert!(matches!(err, ForgeError::Config(_)));
    }

    #[tokio::test]
    async fn test_update_merges_and_bumps_timestamp() {
        let service = service();
        let draft = ProjectDraft {
            name: "Blog".to_string(),
            technologies: vec!["React".to_string(), "Firebase".to_string()],
            features: vec!["auth".to_string()],
            ..Default::default()
        };
        let created = service.add(draft).await.unwrap();

        let updated = service
            .update(&created.id, ProjectPatch::description("new"))
            .await
            .unwrap();

        assert_eq!(updated.description.as_deref(), Some("new"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let fetched = service.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.description.as_deref(), Some("new"));
        // Untouched fields survive the merge
        assert_eq!(fetched.technologies, created.technologies);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let service = service();
        let err = service
            .update("no-such-id", ProjectPatch::rename("x"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let service = service();
        let project = service.add(ProjectDraft::named("Gone")).await.unwrap();

        service.delete(&project.id).await.unwrap();
        assert!(service.get(&project.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let service = service();
        let err = service.delete("no-such-id").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_length_tracks_adds_and_deletes() {
        let service = service();
        let mut ids = Vec::new();

        for i in 0..5 {
            ids.push(
                service
                    .add(ProjectDraft::named(format!("P{}", i)))
                    .await
                    .unwrap()
                    .id,
            );
        }
        service.delete(&ids[1]).await.unwrap();
        service.delete(&ids[3]).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let service = service();
        for name in ["First", "Second", "Third"] {
            service.add(ProjectDraft::named(name)).await.unwrap();
        }

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
