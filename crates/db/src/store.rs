//! The in-memory entity store.
//!
//! Each entity type lives in its own [`Collection`]. Locks are only taken
//! for short synchronous sections and never held across an `.await`, so
//! concurrent calls interleave without ever observing a half-applied write.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::next_id;
use sitetrack_core::types::DbId;
use tokio::sync::RwLock;

use crate::latency::LatencyProfile;
use crate::models::equipment::Equipment;
use crate::models::material::Material;
use crate::models::project::Project;
use crate::models::subcontractor::Subcontractor;
use crate::models::task::Task;
use crate::seed::Seed;

/// A record kept in a [`Collection`].
pub trait Record: Clone + Send + Sync {
    /// Entity name used in error messages, e.g. `"Material"`.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;
}

/// An ordered, id-keyed collection of records.
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Independent copies of every record, in insertion order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Copy of the record with the given id.
    pub async fn get(&self, id: DbId) -> Result<T, CoreError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    /// Append a record built around the next free id.
    pub async fn insert_with(&self, build: impl FnOnce(DbId) -> T) -> Result<T, CoreError> {
        let mut items = self.items.write().await;
        let id = next_id(items.iter().map(Record::id))?;
        let record = build(id);
        items.push(record.clone());
        Ok(record)
    }

    /// Replace the record with the given id by the result of `change`.
    ///
    /// `change` receives the current record and the whole collection and
    /// may reject the update; the collection is only written once it has
    /// returned `Ok`.
    pub async fn update_with(
        &self,
        id: DbId,
        change: impl FnOnce(&T, &[T]) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;

        let updated = change(&items[index], &items)?;
        if updated.id() != id {
            return Err(CoreError::Internal(format!(
                "{} update attempted to change id {id} to {}",
                T::ENTITY,
                updated.id()
            )));
        }
        items[index] = updated.clone();
        Ok(updated)
    }

    /// Remove and return the record with the given id.
    pub async fn remove(&self, id: DbId) -> Result<T, CoreError> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        Ok(items.remove(index))
    }
}

/// All entity collections plus the latency profile applied to every call.
pub struct Store {
    pub(crate) projects: Collection<Project>,
    pub(crate) tasks: Collection<Task>,
    pub(crate) materials: Collection<Material>,
    pub(crate) equipment: Collection<Equipment>,
    pub(crate) subcontractors: Collection<Subcontractor>,
    latency: LatencyProfile,
}

impl Store {
    /// Build a store that owns the given seed data.
    pub fn new(seed: Seed, latency: LatencyProfile) -> Self {
        tracing::debug!(
            projects = seed.projects.len(),
            tasks = seed.tasks.len(),
            materials = seed.materials.len(),
            equipment = seed.equipment.len(),
            subcontractors = seed.subcontractors.len(),
            "Seeding in-memory store"
        );
        Self {
            projects: Collection::new(seed.projects),
            tasks: Collection::new(seed.tasks),
            materials: Collection::new(seed.materials),
            equipment: Collection::new(seed.equipment),
            subcontractors: Collection::new(seed.subcontractors),
            latency,
        }
    }

    /// An empty store with no simulated latency.
    pub fn empty() -> Self {
        Self::new(Seed::default(), LatencyProfile::none())
    }

    /// Wait out one simulated round trip.
    pub(crate) async fn round_trip(&self) {
        self.latency.simulate().await;
    }

    /// Total number of records across all collections.
    pub async fn record_count(&self) -> usize {
        self.projects.len().await
            + self.tasks.len().await
            + self.materials.len().await
            + self.equipment.len().await
            + self.subcontractors.len().await
    }
}
