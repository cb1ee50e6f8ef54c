//! Stock-level derivation for materials.
//!
//! The effective level is a pure function of the quantity in stock, the
//! reorder level and the recorded status. It is recomputed on every read.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::MaterialStatus;

/// Fraction of the reorder level at or below which stock is critical.
pub const CRITICAL_RATIO: f64 = 0.5;

/// Effective stock level of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Adequate,
    Low,
    Critical,
}

impl StockLevel {
    /// Derive the stock level from quantities and the recorded status.
    pub fn classify(quantity_in_stock: u32, reorder_level: u32, status: MaterialStatus) -> Self {
        if is_critical(quantity_in_stock, reorder_level, status) {
            Self::Critical
        } else if is_low(quantity_in_stock, reorder_level) {
            Self::Low
        } else {
            Self::Adequate
        }
    }
}

/// Stock is low once it has dropped to the reorder level.
pub fn is_low(quantity_in_stock: u32, reorder_level: u32) -> bool {
    quantity_in_stock <= reorder_level
}

/// Stock is critical when flagged so, or at half the reorder level or below,
/// whatever the recorded status says.
pub fn is_critical(quantity_in_stock: u32, reorder_level: u32, status: MaterialStatus) -> bool {
    status == MaterialStatus::Critical
        || f64::from(quantity_in_stock) <= f64::from(reorder_level) * CRITICAL_RATIO
}

/// Bucket selector for the materials list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockBucket {
    #[default]
    All,
    Low,
    Critical,
    Ordered,
}

impl StockBucket {
    /// Whether a material with these attributes belongs in the bucket.
    pub fn matches(self, quantity_in_stock: u32, reorder_level: u32, status: MaterialStatus) -> bool {
        match self {
            Self::All => true,
            Self::Low => is_low(quantity_in_stock, reorder_level),
            Self::Critical => is_critical(quantity_in_stock, reorder_level, status),
            Self::Ordered => status == MaterialStatus::Ordered,
        }
    }
}

impl FromStr for StockBucket {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "critical" => Ok(Self::Critical),
            "ordered" => Ok(Self::Ordered),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid stock filter '{s}'. Must be one of: all, low, critical, ordered"
            ))),
        }
    }
}
