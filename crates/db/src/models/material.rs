//! Material entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::{MaterialStatus, RequestUrgency};
use sitetrack_core::stock::StockLevel;
use sitetrack_core::types::DbId;
use sitetrack_core::validation::{validate_non_negative, validate_required};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(rename = "Id")]
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub quantity_in_stock: u32,
    #[serde(default)]
    pub quantity_needed: u32,
    #[serde(default)]
    pub quantity_ordered: u32,
    #[serde(default)]
    pub quantity_delivered: u32,
    pub unit_cost: f64,
    pub supplier: String,
    #[serde(default)]
    pub reorder_level: u32,
    pub status: MaterialStatus,
    #[serde(default)]
    pub description: String,
}

impl Material {
    /// Effective stock level, derived from the current quantities.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity_in_stock, self.reorder_level, self.status)
    }
}

impl Record for Material {
    const ENTITY: &'static str = "Material";

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new material. Quantities default to zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity_in_stock: Option<u32>,
    pub quantity_needed: Option<u32>,
    pub quantity_ordered: Option<u32>,
    pub quantity_delivered: Option<u32>,
    pub unit_cost: f64,
    pub supplier: String,
    pub reorder_level: Option<u32>,
    /// Defaults to `In Stock` if omitted.
    pub status: Option<MaterialStatus>,
    pub description: Option<String>,
}

impl CreateMaterial {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.name, "name")?;
        validate_non_negative(self.unit_cost, "unitCost")
    }
}

/// DTO for updating an existing material. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterial {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub quantity_in_stock: Option<u32>,
    pub quantity_needed: Option<u32>,
    pub quantity_ordered: Option<u32>,
    pub quantity_delivered: Option<u32>,
    pub unit_cost: Option<f64>,
    pub supplier: Option<String>,
    pub reorder_level: Option<u32>,
    pub status: Option<MaterialStatus>,
    pub description: Option<String>,
}

impl UpdateMaterial {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(cost) = self.unit_cost {
            validate_non_negative(cost, "unitCost")?;
        }
        Ok(())
    }
}

/// A request to order more of a material.
///
/// Quantity is signed so that non-positive input can be rejected with a
/// proper error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequest {
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub urgency: RequestUrgency,
}
