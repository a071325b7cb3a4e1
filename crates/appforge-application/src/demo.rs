//! Demo fixture data.
//!
//! The four showcase projects the dashboard ships with. Ids and timestamps
//! are assigned by the store at seed time, so the fixtures are drafts.

use crate::project_service::ProjectService;
use appforge_core::error::Result;
use appforge_core::project::{
    DeployStatus, Deployment, Project, ProjectDraft, RepoStatus, Repository,
};
use chrono::{Duration, Utc};

/// Returns the demo project drafts in dashboard display order.
pub fn demo_drafts() -> Vec<ProjectDraft> {
    let now = Utc::now();

    vec![
        ProjectDraft {
            name: "E-commerce Platform".to_string(),
            description: Some(
                "A full-stack e-commerce application with product catalog, shopping cart, \
                 and payment processing."
                    .to_string(),
            ),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            features: vec![
                "auth".to_string(),
                "payment".to_string(),
                "admin".to_string(),
            ],
            repository: Some(Repository {
                name: "ecommerce-app".to_string(),
                url: "https://github.com/user/ecommerce-app".to_string(),
                branch: "main".to_string(),
                last_commit: now - Duration::days(2),
                status: RepoStatus::Synced,
            }),
            deployments: vec![Deployment {
                environment: "production".to_string(),
                status: DeployStatus::Deployed,
                url: "https://ecommerce-app-demo.netlify.app".to_string(),
                last_deployed: now - Duration::days(2),
            }],
        },
        ProjectDraft {
            name: "Task Management App".to_string(),
            description: Some(
                "A collaborative task management application with real-time updates and \
                 team workspaces."
                    .to_string(),
            ),
            technologies: vec![
                "React".to_string(),
                "Express".to_string(),
                "PostgreSQL".to_string(),
            ],
            features: vec![
                "auth".to_string(),
                "realtime".to_string(),
                "notifications".to_string(),
            ],
            ..Default::default()
        },
        ProjectDraft {
            name: "Blog Platform".to_string(),
            description: Some(
                "A content management system for creating and publishing blog posts with \
                 user authentication."
                    .to_string(),
            ),
            technologies: vec![
                "React".to_string(),
                "Firebase".to_string(),
                "Tailwind".to_string(),
            ],
            features: vec![
                "auth".to_string(),
                "fileUpload".to_string(),
                "search".to_string(),
            ],
            repository: Some(Repository {
                name: "blog-platform".to_string(),
                url: "https://github.com/user/blog-platform".to_string(),
                branch: "main".to_string(),
                last_commit: now - Duration::days(8),
                status: RepoStatus::Synced,
            }),
            deployments: vec![Deployment {
                environment: "production".to_string(),
                status: DeployStatus::Deployed,
                url: "https://blog-platform-demo.netlify.app".to_string(),
                last_deployed: now - Duration::days(8),
            }],
        },
        ProjectDraft {
            name: "Weather Dashboard".to_string(),
            description: Some(
                "A weather forecasting application with location-based data and \
                 interactive visualizations."
                    .to_string(),
            ),
            technologies: vec![
                "React".to_string(),
                "Express".to_string(),
                "OpenWeatherAPI".to_string(),
            ],
            features: vec!["search".to_string(), "darkMode".to_string()],
            ..Default::default()
        },
    ]
}

/// Seeds the demo projects into an empty store.
///
/// A store that already has projects is left untouched.
pub async fn seed_if_empty(service: &ProjectService) -> Result<Vec<Project>> {
    if !service.list().await?.is_empty() {
        return Ok(Vec::new());
    }

    let mut seeded = Vec::new();
    for draft in demo_drafts() {
        seeded.push(service.add(draft).await?);
    }
    tracing::debug!(count = seeded.len(), "seeded demo projects");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_infrastructure::InMemoryProjectRepository;
    use std::sync::Arc;

    fn service() -> ProjectService {
        ProjectService::new(Arc::new(InMemoryProjectRepository::new()))
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let service = service();
        let seeded = seed_if_empty(&service).await.unwrap();
        assert_eq!(seeded.len(), 4);

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names[0], "E-commerce Platform");
        assert_eq!(names[3], "Weather Dashboard");
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let service = service();
        service
            .add(ProjectDraft::named("Existing"))
            .await
            .unwrap();

        let seeded = seed_if_empty(&service).await.unwrap();
        assert!(seeded.is_empty());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_demo_stats_match_dashboard() {
        let service = service();
        seed_if_empty(&service).await.unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.deployed, 2);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.failed, 0);
    }
}
