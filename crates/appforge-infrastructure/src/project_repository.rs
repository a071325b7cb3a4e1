//! In-memory project repository.
//!
//! The project collection is client-side state with no durable backing; this
//! repository holds it in an insertion-ordered vector behind an async lock.

use appforge_core::error::Result;
use appforge_core::project::{Project, ProjectRepository};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Insertion-ordered, process-lifetime project storage.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, project_id: &str) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == project_id).cloned())
    }

    async fn save(&self, project: &Project) -> Result<()> {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            // Replacing keeps the record at its original position
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        Ok(())
    }

    async fn delete(&self, project_id: &str) -> Result<bool> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != project_id);
        Ok(projects.len() < before)
    }

    async fn list_all(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(id: &str, name: &str) -> Project {
        let now = Utc::now();
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            technologies: vec![],
            features: vec![],
            created_at: now,
            updated_at: now,
            repository: None,
            deployments: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repository = InMemoryProjectRepository::new();
        repository.save(&project("a", "First")).await.unwrap();
        repository.save(&project("b", "Second")).await.unwrap();
        repository.save(&project("c", "Third")).await.unwrap();

        let ids: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_save_replaces_in_place() {
        let repository = InMemoryProjectRepository::new();
        repository.save(&project("a", "First")).await.unwrap();
        repository.save(&project("b", "Second")).await.unwrap();

        repository.save(&project("a", "Renamed")).await.unwrap();

        let projects = repository.list_all().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "a");
        assert_eq!(projects[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repository = InMemoryProjectRepository::new();
        repository.save(&project("a", "First")).await.unwrap();

        assert!(repository.delete("a").await.unwrap());
        assert!(!repository.delete("a").await.unwrap());
        assert!(repository.find_by_id("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_default_method() {
        let repository = InMemoryProjectRepository::new();
        repository.save(&project("a", "First")).await.unwrap();

        assert!(repository.exists("a").await.unwrap());
        assert!(!repository.exists("zzz").await.unwrap());
    }
}
