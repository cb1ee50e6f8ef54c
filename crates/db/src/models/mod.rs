//! Entity models and their create/update DTOs.
//!
//! Wire and fixture field names are camelCase with an upper-case `Id`.
//! Update DTOs carry every mutable field as an `Option`; the id is never
//! part of them.

pub mod equipment;
pub mod material;
pub mod project;
pub mod subcontractor;
pub mod task;
