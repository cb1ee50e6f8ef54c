//! Status, priority and urgency enums for every entity type.
//!
//! Each variant serializes to the human-readable label used in fixtures and
//! over the wire (`"In Progress"`, `"Out of Service"`, ...). Parsing is exact
//! and case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire label of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    _ => {
                        let labels: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        Err(CoreError::InvalidArgument(format!(
                            "Invalid {} '{s}'. Must be one of: {}",
                            $kind,
                            labels.join(", ")
                        )))
                    }
                }
            }
        }
    };
}

labelled_enum! {
    /// Lifecycle of a construction project.
    ProjectStatus, "project status" {
        Planning => "Planning",
        InProgress => "In Progress",
        OnHold => "On Hold",
        Completed => "Completed",
    }
}

labelled_enum! {
    /// Progress of a single task.
    TaskStatus, "task status" {
        NotStarted => "Not Started",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

labelled_enum! {
    TaskPriority, "task priority" {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

labelled_enum! {
    /// Stock state recorded on a material. The effective stock level is
    /// derived separately, see [`crate::stock::StockLevel`].
    MaterialStatus, "material status" {
        InStock => "In Stock",
        LowStock => "Low Stock",
        Critical => "Critical",
        Ordered => "Ordered",
    }
}

labelled_enum! {
    EquipmentStatus, "equipment status" {
        Available => "Available",
        InUse => "In Use",
        Maintenance => "Maintenance",
        OutOfService => "Out of Service",
    }
}

labelled_enum! {
    SubcontractorStatus, "subcontractor status" {
        Active => "Active",
        Pending => "Pending",
        Inactive => "Inactive",
    }
}

labelled_enum! {
    /// How urgently a material request should be fulfilled.
    RequestUrgency, "request urgency" {
        Low => "Low",
        Normal => "Normal",
        High => "High",
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl Default for RequestUrgency {
    fn default() -> Self {
        Self::Normal
    }
}

impl TaskStatus {
    /// The status a one-click toggle moves a task to.
    ///
    /// `Not Started -> In Progress -> Completed -> In Progress`.
    pub fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::InProgress,
        }
    }
}
