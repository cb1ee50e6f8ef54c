//! Task entity model and DTOs.
//!
//! Tasks carry two denormalized pairs: `phaseId`/`phaseName` and
//! `assigneeId`/`assigneeName`. The names are cached copies and must be kept
//! in step with their ids on every write.

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::{TaskPriority, TaskStatus};
use sitetrack_core::types::{Date, DbId, Timestamp};
use sitetrack_core::validation::validate_required;

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub project_id: DbId,
    pub phase_id: DbId,
    pub phase_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: Date,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee_id: DbId,
    pub assignee_name: String,
    /// Estimated effort in days.
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    /// Set on the transition into `Completed`, cleared on the way out.
    #[serde(default)]
    pub completed_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Record for Task {
    const ENTITY: &'static str = "Task";

    fn id(&self) -> DbId {
        self.id
    }
}

/// An `(id, name)` pair used to populate assignee and phase pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub project_id: DbId,
    pub phase_id: DbId,
    pub phase_name: String,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Date,
    /// Defaults to `Medium` if omitted.
    pub priority: Option<TaskPriority>,
    /// Defaults to `Not Started` if omitted.
    pub status: Option<TaskStatus>,
    pub assignee_id: DbId,
    pub assignee_name: String,
    pub estimated_duration: Option<u32>,
}

impl CreateTask {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.name, "name")?;
        validate_required(&self.phase_name, "phaseName")?;
        validate_required(&self.assignee_name, "assigneeName")?;
        validate_duration(self.estimated_duration)
    }
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    pub phase_id: Option<DbId>,
    pub phase_name: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<DbId>,
    pub assignee_name: Option<String>,
    pub estimated_duration: Option<u32>,
}

impl UpdateTask {
    /// An update that only changes the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(phase_name) = &self.phase_name {
            validate_required(phase_name, "phaseName")?;
        }
        if let Some(assignee_name) = &self.assignee_name {
            validate_required(assignee_name, "assigneeName")?;
        }
        validate_duration(self.estimated_duration)
    }
}

fn validate_duration(days: Option<u32>) -> Result<(), CoreError> {
    if days == Some(0) {
        return Err(CoreError::Validation(
            "estimatedDuration must be a positive number of days".to_string(),
        ));
    }
    Ok(())
}
