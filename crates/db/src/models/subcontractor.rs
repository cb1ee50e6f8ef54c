//! Subcontractor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::SubcontractorStatus;
use sitetrack_core::types::{Date, DbId};
use sitetrack_core::validation::{validate_rating, validate_required};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcontractor {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Zero to five.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub insurance_expiry: Option<Date>,
    pub status: SubcontractorStatus,
    #[serde(default)]
    pub projects_completed: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for Subcontractor {
    const ENTITY: &'static str = "Subcontractor";

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for registering a new subcontractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcontractor {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub rating: Option<f64>,
    pub license_number: Option<String>,
    pub insurance_expiry: Option<Date>,
    /// Defaults to `Active` if omitted.
    pub status: Option<SubcontractorStatus>,
    pub projects_completed: Option<u32>,
    pub notes: Option<String>,
}

impl CreateSubcontractor {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.name, "name")?;
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }
}

/// DTO for updating a subcontractor. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubcontractor {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub license_number: Option<String>,
    pub insurance_expiry: Option<Date>,
    pub status: Option<SubcontractorStatus>,
    pub projects_completed: Option<u32>,
    pub notes: Option<String>,
}

impl UpdateSubcontractor {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }
}
