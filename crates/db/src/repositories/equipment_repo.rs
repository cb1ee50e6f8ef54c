//! Repository for equipment.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::validate_id;
use sitetrack_core::status::EquipmentStatus;
use sitetrack_core::types::DbId;

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use crate::store::{Record, Store};

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Register new equipment. Status defaults to `Available`.
    pub async fn create(store: &Store, input: &CreateEquipment) -> Result<Equipment, CoreError> {
        input.validate()?;
        store.round_trip().await;

        let equipment = store
            .equipment
            .insert_with(|id| Equipment {
                id,
                name: input.name.clone(),
                equipment_type: input.equipment_type.clone(),
                serial_number: input.serial_number.clone(),
                status: input.status.unwrap_or(EquipmentStatus::Available),
                location: input.location.clone(),
                purchase_date: input.purchase_date,
                purchase_cost: input.purchase_cost.unwrap_or(0.0),
                hours_used: input.hours_used.unwrap_or(0),
                last_maintenance: input.last_maintenance,
                next_maintenance: input.next_maintenance,
                notes: input.notes.clone(),
            })
            .await?;

        tracing::info!(equipment_id = equipment.id, name = %equipment.name, "Equipment created");
        Ok(equipment)
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Equipment, CoreError> {
        validate_id(Equipment::ENTITY, id)?;
        store.round_trip().await;
        store.equipment.get(id).await
    }

    pub async fn list(store: &Store) -> Vec<Equipment> {
        store.round_trip().await;
        store.equipment.snapshot().await
    }

    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateEquipment,
    ) -> Result<Equipment, CoreError> {
        validate_id(Equipment::ENTITY, id)?;
        input.validate()?;
        store.round_trip().await;

        let equipment = store
            .equipment
            .update_with(id, |existing, _| {
                let mut equipment = existing.clone();
                if let Some(name) = &input.name {
                    equipment.name = name.clone();
                }
                if let Some(equipment_type) = &input.equipment_type {
                    equipment.equipment_type = equipment_type.clone();
                }
                if let Some(serial_number) = &input.serial_number {
                    equipment.serial_number = serial_number.clone();
                }
                if let Some(status) = input.status {
                    equipment.status = status;
                }
                if let Some(location) = &input.location {
                    equipment.location = location.clone();
                }
                if let Some(purchase_date) = input.purchase_date {
                    equipment.purchase_date = Some(purchase_date);
                }
                if let Some(purchase_cost) = input.purchase_cost {
                    equipment.purchase_cost = purchase_cost;
                }
                if let Some(hours_used) = input.hours_used {
                    equipment.hours_used = hours_used;
                }
                if let Some(last_maintenance) = input.last_maintenance {
                    equipment.last_maintenance = Some(last_maintenance);
                }
                if let Some(next_maintenance) = input.next_maintenance {
                    equipment.next_maintenance = Some(next_maintenance);
                }
                if let Some(notes) = &input.notes {
                    equipment.notes = Some(notes.clone());
                }
                Ok(equipment)
            })
            .await?;

        tracing::info!(equipment_id = id, "Equipment updated");
        Ok(equipment)
    }

    pub async fn delete(store: &Store, id: DbId) -> Result<Equipment, CoreError> {
        validate_id(Equipment::ENTITY, id)?;
        store.round_trip().await;

        let equipment = store.equipment.remove(id).await?;
        tracing::info!(equipment_id = id, name = %equipment.name, "Equipment deleted");
        Ok(equipment)
    }
}
