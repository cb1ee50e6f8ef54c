//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::ProjectStatus;
use sitetrack_core::types::{Date, DbId, Timestamp};
use sitetrack_core::validation::{
    validate_non_negative, validate_progress, validate_required,
};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub client_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Date,
    pub end_date: Date,
    pub total_budget: f64,
    #[serde(default)]
    pub spent_budget: f64,
    #[serde(default)]
    pub progress: u8,
    pub created_at: Timestamp,
}

impl Record for Project {
    const ENTITY: &'static str = "Project";

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    pub client_name: String,
    pub description: Option<String>,
    /// Defaults to `Planning` if omitted.
    pub status: Option<ProjectStatus>,
    pub start_date: Date,
    pub end_date: Date,
    pub total_budget: f64,
    pub spent_budget: Option<f64>,
    pub progress: Option<u8>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.name, "name")?;
        validate_non_negative(self.total_budget, "totalBudget")?;
        if let Some(spent) = self.spent_budget {
            validate_non_negative(spent, "spentBudget")?;
        }
        if let Some(progress) = self.progress {
            validate_progress(progress)?;
        }
        Ok(())
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub total_budget: Option<f64>,
    pub spent_budget: Option<f64>,
    pub progress: Option<u8>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(total) = self.total_budget {
            validate_non_negative(total, "totalBudget")?;
        }
        if let Some(spent) = self.spent_budget {
            validate_non_negative(spent, "spentBudget")?;
        }
        if let Some(progress) = self.progress {
            validate_progress(progress)?;
        }
        Ok(())
    }
}
