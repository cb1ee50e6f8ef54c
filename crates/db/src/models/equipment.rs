//! Equipment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::EquipmentStatus;
use sitetrack_core::types::{Date, DbId};
use sitetrack_core::validation::{validate_non_negative, validate_required};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub serial_number: String,
    pub status: EquipmentStatus,
    pub location: String,
    #[serde(default)]
    pub purchase_date: Option<Date>,
    #[serde(default)]
    pub purchase_cost: f64,
    #[serde(default)]
    pub hours_used: u32,
    #[serde(default)]
    pub last_maintenance: Option<Date>,
    #[serde(default)]
    pub next_maintenance: Option<Date>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for Equipment {
    const ENTITY: &'static str = "Equipment";

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for registering new equipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub serial_number: String,
    /// Defaults to `Available` if omitted.
    pub status: Option<EquipmentStatus>,
    pub location: String,
    pub purchase_date: Option<Date>,
    pub purchase_cost: Option<f64>,
    pub hours_used: Option<u32>,
    pub last_maintenance: Option<Date>,
    pub next_maintenance: Option<Date>,
    pub notes: Option<String>,
}

impl CreateEquipment {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.name, "name")?;
        if let Some(cost) = self.purchase_cost {
            validate_non_negative(cost, "purchaseCost")?;
        }
        Ok(())
    }
}

/// DTO for updating equipment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub location: Option<String>,
    pub purchase_date: Option<Date>,
    pub purchase_cost: Option<f64>,
    pub hours_used: Option<u32>,
    pub last_maintenance: Option<Date>,
    pub next_maintenance: Option<Date>,
    pub notes: Option<String>,
}

impl UpdateEquipment {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(cost) = self.purchase_cost {
            validate_non_negative(cost, "purchaseCost")?;
        }
        Ok(())
    }
}
