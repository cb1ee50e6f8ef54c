//! One repository per entity type.
//!
//! Repositories are stateless unit structs whose methods take the [`Store`]
//! by reference. Every method validates its arguments, waits out the store's
//! simulated latency and then touches the collection in a single critical
//! section; callers always receive owned copies.
//!
//! [`Store`]: crate::Store

pub mod equipment_repo;
pub mod material_repo;
pub mod project_repo;
pub mod subcontractor_repo;
pub mod task_repo;

pub use equipment_repo::EquipmentRepo;
pub use material_repo::MaterialRepo;
pub use project_repo::ProjectRepo;
pub use subcontractor_repo::SubcontractorRepo;
pub use task_repo::TaskRepo;
