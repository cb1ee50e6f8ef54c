//! Repository for tasks.
//!
//! Besides plain CRUD this keeps the two denormalized name pairs in step with
//! their ids and maintains `completedDate` across status transitions.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::validate_id;
use sitetrack_core::status::{TaskPriority, TaskStatus};
use sitetrack_core::types::{DbId, Timestamp};

use crate::models::task::{CreateTask, NamedRef, Task, UpdateTask};
use crate::store::{Record, Store};
use crate::views::task_view;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task.
    ///
    /// Status defaults to `Not Started` and priority to `Medium`. A task
    /// created as `Completed` is stamped with a completion time.
    pub async fn create(store: &Store, input: &CreateTask) -> Result<Task, CoreError> {
        validate_id("Project", input.project_id)?;
        input.validate()?;
        store.round_trip().await;

        let now = chrono::Utc::now();
        let status = input.status.unwrap_or_default();
        let task = store
            .tasks
            .insert_with(|id| Task {
                id,
                project_id: input.project_id,
                phase_id: input.phase_id,
                phase_name: input.phase_name.clone(),
                name: input.name.clone(),
                description: input.description.clone(),
                due_date: input.due_date,
                priority: input.priority.unwrap_or(TaskPriority::Medium),
                status,
                assignee_id: input.assignee_id,
                assignee_name: input.assignee_name.clone(),
                estimated_duration: input.estimated_duration,
                completed_date: (status == TaskStatus::Completed).then_some(now),
                created_at: now,
            })
            .await?;

        tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
        Ok(task)
    }

    /// Find a task by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Task, CoreError> {
        validate_id(Task::ENTITY, id)?;
        store.round_trip().await;
        store.tasks.get(id).await
    }

    /// List all tasks in insertion order.
    pub async fn list(store: &Store) -> Vec<Task> {
        store.round_trip().await;
        store.tasks.snapshot().await
    }

    /// List the tasks of one project in insertion order.
    pub async fn list_by_project(store: &Store, project_id: DbId) -> Result<Vec<Task>, CoreError> {
        validate_id("Project", project_id)?;
        store.round_trip().await;
        let tasks: Vec<Task> = store
            .tasks
            .snapshot()
            .await
            .into_iter()
            .filter(|task| task.project_id == project_id)
            .collect();
        tracing::debug!(project_id, count = tasks.len(), "Listed project tasks");
        Ok(tasks)
    }

    /// Update a task. Only `Some` fields in `input` are applied.
    ///
    /// Changing `phaseId` or `assigneeId` without the matching name resolves
    /// the name from another task with that id, or fails with a validation
    /// error if no task carries it.
    pub async fn update(store: &Store, id: DbId, input: &UpdateTask) -> Result<Task, CoreError> {
        validate_id(Task::ENTITY, id)?;
        input.validate()?;
        if let Some(project_id) = input.project_id {
            validate_id("Project", project_id)?;
        }
        store.round_trip().await;

        let now = chrono::Utc::now();
        let task = store
            .tasks
            .update_with(id, |existing, all| apply_update(existing, all, input, now))
            .await?;

        tracing::info!(task_id = id, status = %task.status, "Task updated");
        Ok(task)
    }

    /// Move a task to the next status in the toggle cycle.
    pub async fn advance_status(store: &Store, id: DbId) -> Result<Task, CoreError> {
        validate_id(Task::ENTITY, id)?;
        store.round_trip().await;

        let now = chrono::Utc::now();
        let task = store
            .tasks
            .update_with(id, |existing, all| {
                apply_update(existing, all, &UpdateTask::status(existing.status.next()), now)
            })
            .await?;

        tracing::info!(task_id = id, status = %task.status, "Task status advanced");
        Ok(task)
    }

    /// Delete a task, returning the removed record.
    pub async fn delete(store: &Store, id: DbId) -> Result<Task, CoreError> {
        validate_id(Task::ENTITY, id)?;
        store.round_trip().await;

        let task = store.tasks.remove(id).await?;
        tracing::info!(task_id = id, "Task deleted");
        Ok(task)
    }

    /// Unique assignees across all tasks, sorted by name.
    pub async fn assignees(store: &Store) -> Vec<NamedRef> {
        store.round_trip().await;
        task_view::assignees(&store.tasks.snapshot().await)
    }

    /// Unique phases across all tasks, sorted by name.
    pub async fn phases(store: &Store) -> Vec<NamedRef> {
        store.round_trip().await;
        task_view::phases(&store.tasks.snapshot().await)
    }
}

fn apply_update(
    existing: &Task,
    all: &[Task],
    input: &UpdateTask,
    now: Timestamp,
) -> Result<Task, CoreError> {
    let mut task = existing.clone();

    let (phase_id, phase_name) = resolve_pair(
        existing.phase_id,
        &existing.phase_name,
        input.phase_id,
        input.phase_name.as_deref(),
        all,
        |t| (t.phase_id, &t.phase_name),
        "phase",
    )?;
    task.phase_id = phase_id;
    task.phase_name = phase_name;

    let (assignee_id, assignee_name) = resolve_pair(
        existing.assignee_id,
        &existing.assignee_name,
        input.assignee_id,
        input.assignee_name.as_deref(),
        all,
        |t| (t.assignee_id, &t.assignee_name),
        "assignee",
    )?;
    task.assignee_id = assignee_id;
    task.assignee_name = assignee_name;

    if let Some(project_id) = input.project_id {
        task.project_id = project_id;
    }
    if let Some(name) = &input.name {
        task.name = name.clone();
    }
    if let Some(description) = &input.description {
        task.description = Some(description.clone());
    }
    if let Some(due_date) = input.due_date {
        task.due_date = due_date;
    }
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    if let Some(estimated_duration) = input.estimated_duration {
        task.estimated_duration = Some(estimated_duration);
    }

    match input.status {
        Some(TaskStatus::Completed) if existing.status != TaskStatus::Completed => {
            task.completed_date = Some(now);
        }
        Some(TaskStatus::Completed) | None => {}
        Some(_) => task.completed_date = None,
    }
    if let Some(status) = input.status {
        task.status = status;
    }

    Ok(task)
}

/// Work out the `(id, name)` pair a task ends up with after an update.
fn resolve_pair(
    current_id: DbId,
    current_name: &str,
    requested_id: Option<DbId>,
    requested_name: Option<&str>,
    all: &[Task],
    pick: impl Fn(&Task) -> (DbId, &String),
    label: &str,
) -> Result<(DbId, String), CoreError> {
    let id = requested_id.unwrap_or(current_id);

    if let Some(name) = requested_name {
        return Ok((id, name.to_string()));
    }
    if id == current_id {
        return Ok((id, current_name.to_string()));
    }

    all.iter()
        .map(&pick)
        .find(|(other_id, _)| *other_id == id)
        .map(|(_, name)| (id, name.clone()))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "{label}Name is required when {label}Id changes to unknown {label} {id}"
            ))
        })
}
