//! Repository for projects.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::validate_id;
use sitetrack_core::status::ProjectStatus;
use sitetrack_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{Record, Store};

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, stamping its creation time.
    ///
    /// If `status` is `None` in the input, defaults to `Planning`.
    pub async fn create(store: &Store, input: &CreateProject) -> Result<Project, CoreError> {
        input.validate()?;
        store.round_trip().await;

        let project = store
            .projects
            .insert_with(|id| Project {
                id,
                name: input.name.clone(),
                location: input.location.clone(),
                client_name: input.client_name.clone(),
                description: input.description.clone(),
                status: input.status.unwrap_or(ProjectStatus::Planning),
                start_date: input.start_date,
                end_date: input.end_date,
                total_budget: input.total_budget,
                spent_budget: input.spent_budget.unwrap_or(0.0),
                progress: input.progress.unwrap_or(0),
                created_at: chrono::Utc::now(),
            })
            .await?;

        tracing::info!(project_id = project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Project, CoreError> {
        validate_id(Project::ENTITY, id)?;
        store.round_trip().await;
        store.projects.get(id).await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(store: &Store) -> Vec<Project> {
        store.round_trip().await;
        let mut projects = store.projects.snapshot().await;
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(count = projects.len(), "Listed projects");
        projects
    }

    /// Update a project. Only `Some` fields in `input` are applied.
    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Project, CoreError> {
        validate_id(Project::ENTITY, id)?;
        input.validate()?;
        store.round_trip().await;

        let project = store
            .projects
            .update_with(id, |existing, _| Ok(apply_update(existing, input)))
            .await?;

        tracing::info!(project_id = id, "Project updated");
        Ok(project)
    }

    /// Delete a project, returning the removed record.
    pub async fn delete(store: &Store, id: DbId) -> Result<Project, CoreError> {
        validate_id(Project::ENTITY, id)?;
        store.round_trip().await;

        let project = store.projects.remove(id).await?;
        tracing::info!(project_id = id, "Project deleted");
        Ok(project)
    }
}

fn apply_update(existing: &Project, input: &UpdateProject) -> Project {
    let mut project = existing.clone();
    if let Some(name) = &input.name {
        project.name = name.clone();
    }
    if let Some(location) = &input.location {
        project.location = location.clone();
    }
    if let Some(client_name) = &input.client_name {
        project.client_name = client_name.clone();
    }
    if let Some(description) = &input.description {
        project.description = Some(description.clone());
    }
    if let Some(status) = input.status {
        project.status = status;
    }
    if let Some(start_date) = input.start_date {
        project.start_date = start_date;
    }
    if let Some(end_date) = input.end_date {
        project.end_date = end_date;
    }
    if let Some(total_budget) = input.total_budget {
        project.total_budget = total_budget;
    }
    if let Some(spent_budget) = input.spent_budget {
        project.spent_budget = spent_budget;
    }
    if let Some(progress) = input.progress {
        project.progress = progress;
    }
    project
}
