//! End-to-end flows across the session manager, project service, and
//! generation driver, wired with the real infrastructure backends.

use appforge_application::demo;
use appforge_application::{GenerationDriver, ProjectService};
use appforge_core::generation::{GenerationConfig, GenerationStatus};
use appforge_core::identity::StaticCredentialVerifier;
use appforge_core::project::{ProjectDraft, ProjectPatch};
use appforge_core::session::SessionManager;
use appforge_infrastructure::{ForgePaths, InMemoryProjectRepository, TomlSessionRepository};
use std::sync::Arc;

fn session_manager(dir: &tempfile::TempDir) -> SessionManager {
    let paths = ForgePaths::new(Some(dir.path().to_path_buf())).unwrap();
    let repository = Arc::new(TomlSessionRepository::new(&paths).unwrap());
    SessionManager::new(repository, Arc::new(StaticCredentialVerifier))
}

#[tokio::test]
async fn session_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let manager = session_manager(&dir);
        manager.signup("Ada", "ada@example.com", "pw").await.unwrap();
    }

    // A new manager over the same state directory plays the restarted app
    let manager = session_manager(&dir);
    let restored = manager.restore().await.unwrap().unwrap();
    assert_eq!(restored.identity.name, "Ada");
    assert_eq!(restored.identity.email, "ada@example.com");
    assert!(manager.is_authenticated().await);

    manager.logout().await.unwrap();

    // After logout nothing is left to restore
    let manager = session_manager(&dir);
    assert!(manager.restore().await.unwrap().is_none());
}

#[tokio::test]
async fn blog_project_lifecycle() {
    let service = ProjectService::new(Arc::new(InMemoryProjectRepository::new()));

    let created = service
        .add(ProjectDraft {
            name: "Blog".to_string(),
            technologies: vec!["React".to_string(), "Firebase".to_string()],
            features: vec!["auth".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let updated = service
        .update(&created.id, ProjectPatch::description("new"))
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("new"));
    assert!(updated.updated_at > created.updated_at);

    service.delete(&created.id).await.unwrap();
    assert!(service.get(&created.id).await.unwrap().is_none());
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_view_over_demo_data() {
    let service = ProjectService::new(Arc::new(InMemoryProjectRepository::new()));
    demo::seed_if_empty(&service).await.unwrap();

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.deployed + stats.in_progress, 4);

    // Summary counts stay consistent as the collection changes
    let first = service.list().await.unwrap().remove(0);
    service.delete(&first.id).await.unwrap();
    assert_eq!(service.stats().await.unwrap().total, 3);
}

#[tokio::test(start_paused = true)]
async fn generation_page_flow() {
    let driver = GenerationDriver::new(GenerationConfig::default());

    // Opening the generation view starts a run; it walks to completion
    let handle = driver.start();
    let done = handle.wait().await;
    assert_eq!(done.status, GenerationStatus::Completed);
    assert_eq!(done.progress, 100);

    // "Request changes" regenerates from 30%
    let regen = driver.start_from(30);
    assert_eq!(regen.snapshot().progress, 30);
    let done = regen.wait().await;
    assert_eq!(done.status, GenerationStatus::Completed);
}
