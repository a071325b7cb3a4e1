//! Project domain model.
//!
//! This module contains the core Project entity and the value objects used
//! to create and mutate it. Projects are the records behind the dashboard:
//! what was generated, with which stack, and where it lives.

use crate::error::{ForgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Sync status of a linked source repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepoStatus {
    Synced,
    Pending,
    Error,
}

/// Status of a deployment to one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeployStatus {
    Deployed,
    Pending,
    Failed,
}

/// A source repository linked to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (e.g. "blog-platform")
    pub name: String,
    /// Repository URL
    pub url: String,
    /// Checked-out branch
    pub branch: String,
    /// Timestamp of the last known commit
    pub last_commit: DateTime<Utc>,
    /// Sync status
    pub status: RepoStatus,
}

/// A deployment of a project to one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// Environment name (e.g. "production")
    pub environment: String,
    /// Deployment status
    pub status: DeployStatus,
    /// Public URL of the deployment
    pub url: String,
    /// Timestamp of the last deploy to this environment
    pub last_deployed: DateTime<Utc>,
}

/// A generated project record.
///
/// Identity and timestamps are assigned by the store, never by the caller:
/// `id` and `created_at` are immutable after creation, and `updated_at` is
/// bumped on every mutation. `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier, assigned at creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Chosen technology stack (frontend/backend/database entries)
    pub technologies: Vec<String>,
    /// Feature identifiers chosen at creation
    pub features: Vec<String>,
    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
    /// Linked source repository, if one was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    /// Deployments, one entry per environment; empty when none recorded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployments: Vec<Deployment>,
}

impl Project {
    /// Applies a partial update to this record.
    ///
    /// Only the fields present in the patch are touched; the caller is
    /// responsible for bumping `updated_at` afterwards.
    pub fn merge(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(repository) = patch.repository {
            self.repository = repository;
        }
        if let Some(deployments) = patch.deployments {
            self.deployments = deployments;
        }
    }

    /// Whether any deployment of this project is in the given status.
    pub fn has_deployment_in(&self, status: DeployStatus) -> bool {
        self.deployments.iter().any(|d| d.status == status)
    }
}

/// Caller-supplied fields for creating a project.
///
/// Everything the store assigns itself (id, timestamps) is absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

impl ProjectDraft {
    /// Creates a draft with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Validates the draft before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Config` if the name is empty or whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ForgeError::config("project name must not be empty"));
        }
        Ok(())
    }
}

/// Partial-field merge payload for `update`.
///
/// `None` leaves a field untouched. `description` is doubly optional so a
/// patch can distinguish "leave as is" (`None`) from "clear the description"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub repository: Option<Option<Repository>>,
    #[serde(default)]
    pub deployments: Option<Vec<Deployment>>,
}

impl ProjectPatch {
    /// A patch that only sets the description.
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(Some(description.into())),
            ..Default::default()
        }
    }

    /// A patch that only renames the project.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Dashboard summary counts over the project collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    /// All projects
    pub total: usize,
    /// Projects with at least one deployment in `Deployed`
    pub deployed: usize,
    /// Projects with no deployments at all
    pub in_progress: usize,
    /// Projects with at least one deployment in `Failed`
    pub failed: usize,
}

impl ProjectStats {
    /// Computes the summary counts the dashboard header displays.
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            total: projects.len(),
            deployed: projects
                .iter()
                .filter(|p| p.has_deployment_in(DeployStatus::Deployed))
                .count(),
            in_progress: projects.iter().filter(|p| p.deployments.is_empty()).count(),
            failed: projects
                .iter()
                .filter(|p| p.has_deployment_in(DeployStatus::Failed))
                .count(),
        }
    }
}
