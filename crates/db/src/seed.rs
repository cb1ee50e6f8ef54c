//! Fixture data loaded into the [`Store`](crate::Store) at startup.
//!
//! A seed directory holds up to three JSON files:
//!
//! ```text
//! projects.json    [ { "Id": 1, "name": ..., ... }, ... ]
//! tasks.json       [ { "Id": 1, "projectId": 1, ... }, ... ]
//! resources.json   { "materials": [...], "equipment": [...], "subcontractors": [...] }
//! ```
//!
//! A missing file seeds an empty collection; a malformed one is an error.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sitetrack_core::types::DbId;

use crate::models::equipment::Equipment;
use crate::models::material::Material;
use crate::models::project::Project;
use crate::models::subcontractor::Subcontractor;
use crate::models::task::Task;
use crate::store::Record;

pub const PROJECTS_FILE: &str = "projects.json";
pub const TASKS_FILE: &str = "tasks.json";
pub const RESOURCES_FILE: &str = "resources.json";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed data for {entity} contains invalid id {id}")]
    InvalidId { entity: &'static str, id: DbId },

    #[error("Seed data for {entity} contains duplicate id {id}")]
    DuplicateId { entity: &'static str, id: DbId },
}

/// Resource fixtures share one file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResourceSeed {
    pub materials: Vec<Material>,
    pub equipment: Vec<Equipment>,
    pub subcontractors: Vec<Subcontractor>,
}

/// Initial contents of every collection.
#[derive(Debug, Default)]
pub struct Seed {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub materials: Vec<Material>,
    pub equipment: Vec<Equipment>,
    pub subcontractors: Vec<Subcontractor>,
}

impl Seed {
    /// Load every fixture file found in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        let projects: Vec<Project> = read_optional(&dir.join(PROJECTS_FILE))?.unwrap_or_default();
        let tasks: Vec<Task> = read_optional(&dir.join(TASKS_FILE))?.unwrap_or_default();
        let resources: ResourceSeed =
            read_optional(&dir.join(RESOURCES_FILE))?.unwrap_or_default();

        let seed = Self {
            projects,
            tasks,
            materials: resources.materials,
            equipment: resources.equipment,
            subcontractors: resources.subcontractors,
        };
        seed.check_ids()?;

        tracing::info!(dir = %dir.display(), "Loaded seed fixtures");
        Ok(seed)
    }

    /// Ensure every collection holds unique, positive ids.
    pub fn check_ids(&self) -> Result<(), SeedError> {
        check_collection(&self.projects)?;
        check_collection(&self.tasks)?;
        check_collection(&self.materials)?;
        check_collection(&self.equipment)?;
        check_collection(&self.subcontractors)?;
        Ok(())
    }
}

fn check_collection<T: Record>(records: &[T]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if id <= 0 {
            return Err(SeedError::InvalidId {
                entity: T::ENTITY,
                id,
            });
        }
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                entity: T::ENTITY,
                id,
            });
        }
    }
    Ok(())
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SeedError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Seed file missing, starting empty");
            return Ok(None);
        }
        Err(source) => {
            return Err(SeedError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
