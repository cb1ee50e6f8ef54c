//! Derived views over entity collections.
//!
//! Everything here is a pure function of `(collection, criteria)`: no store
//! access, no hidden state. Handlers fetch a snapshot through a repository
//! and pass it in.

pub mod material_view;
pub mod project_view;
pub mod resource_search;
pub mod task_view;

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;

/// Sort direction shared by the sortable views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid sort order '{s}'. Must be one of: asc, desc"
            ))),
        }
    }
}
