//! Project commands: CRUD over the demo collection.

use anyhow::Result;
use appforge_application::ProjectService;
use appforge_core::project::{Project, ProjectDraft};

pub async fn list(projects: &ProjectService) -> Result<()> {
    let all = projects.list().await?;
    for project in &all {
        let deployments = if project.deployments.is_empty() {
            "in progress".to_string()
        } else {
            project
                .deployments
                .iter()
                .map(|d| format!("{}: {}", d.environment, d.status))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{}  {}  [{}]", project.id, project.name, deployments);
    }

    let stats = projects.stats().await?;
    println!(
        "\n{} total, {} deployed, {} in progress, {} failed",
        stats.total, stats.deployed, stats.in_progress, stats.failed
    );
    Ok(())
}

pub async fn show(projects: &ProjectService, id: &str) -> Result<()> {
    match projects.get(id).await? {
        Some(project) => print_project(&project),
        None => println!("No project with id '{}'.", id),
    }
    Ok(())
}

pub async fn add(
    projects: &ProjectService,
    name: String,
    description: Option<String>,
    technologies: Vec<String>,
    features: Vec<String>,
) -> Result<()> {
    let project = projects
        .add(ProjectDraft {
            name,
            description,
            technologies,
            features,
            ..Default::default()
        })
        .await?;
    println!("Created project {} ({}).", project.name, project.id);
    Ok(())
}

pub async fn remove(projects: &ProjectService, id: &str) -> Result<()> {
    projects.delete(id).await?;
    println!("Removed project {}.", id);
    Ok(())
}

fn print_project(project: &Project) {
    println!("{}  ({})", project.name, project.id);
    if let Some(description) = &project.description {
        println!("  {}", description);
    }
    println!("  technologies: {}", project.technologies.join(", "));
    println!("  features: {}", project.features.join(", "));
    println!(
        "  created: {}  updated: {}",
        project.created_at.format("%Y-%m-%d %H:%M"),
        project.updated_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(repository) = &project.repository {
        println!(
            "  repository: {} ({}) on {} - {}",
            repository.name, repository.url, repository.branch, repository.status
        );
    }
    for deployment in &project.deployments {
        println!(
            "  deployment: {} {} ({})",
            deployment.environment, deployment.status, deployment.url
        );
    }
}
