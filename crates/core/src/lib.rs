//! Domain types and pure logic for the SiteTrack construction dashboard.
//!
//! This crate has no internal dependencies so it can be shared by the store,
//! the event bus and the HTTP layer alike.

pub mod error;
pub mod ids;
pub mod project_health;
pub mod schedule;
pub mod status;
pub mod stock;
pub mod text;
pub mod types;
pub mod validation;
