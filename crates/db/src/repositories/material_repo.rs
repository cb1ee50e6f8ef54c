//! Repository for materials.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::{validate_id, validate_quantity};
use sitetrack_core::status::MaterialStatus;
use sitetrack_core::types::DbId;

use crate::models::material::{CreateMaterial, Material, MaterialRequest, UpdateMaterial};
use crate::store::{Record, Store};

/// Provides CRUD and ordering operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material. Missing quantities default to zero and the
    /// status to `In Stock`.
    pub async fn create(store: &Store, input: &CreateMaterial) -> Result<Material, CoreError> {
        input.validate()?;
        store.round_trip().await;

        let material = store
            .materials
            .insert_with(|id| Material {
                id,
                name: input.name.clone(),
                category: input.category.clone(),
                unit: input.unit.clone(),
                quantity_in_stock: input.quantity_in_stock.unwrap_or(0),
                quantity_needed: input.quantity_needed.unwrap_or(0),
                quantity_ordered: input.quantity_ordered.unwrap_or(0),
                quantity_delivered: input.quantity_delivered.unwrap_or(0),
                unit_cost: input.unit_cost,
                supplier: input.supplier.clone(),
                reorder_level: input.reorder_level.unwrap_or(0),
                status: input.status.unwrap_or(MaterialStatus::InStock),
                description: input.description.clone().unwrap_or_default(),
            })
            .await?;

        tracing::info!(material_id = material.id, name = %material.name, "Material created");
        Ok(material)
    }

    /// Find a material by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Material, CoreError> {
        validate_id(Material::ENTITY, id)?;
        store.round_trip().await;
        store.materials.get(id).await
    }

    /// List all materials in insertion order.
    pub async fn list(store: &Store) -> Vec<Material> {
        store.round_trip().await;
        store.materials.snapshot().await
    }

    /// Update a material. Only `Some` fields in `input` are applied.
    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateMaterial,
    ) -> Result<Material, CoreError> {
        validate_id(Material::ENTITY, id)?;
        input.validate()?;
        store.round_trip().await;

        let material = store
            .materials
            .update_with(id, |existing, _| Ok(apply_update(existing, input)))
            .await?;

        tracing::info!(material_id = id, "Material updated");
        Ok(material)
    }

    /// Delete a material, returning the removed record.
    pub async fn delete(store: &Store, id: DbId) -> Result<Material, CoreError> {
        validate_id(Material::ENTITY, id)?;
        store.round_trip().await;

        let material = store.materials.remove(id).await?;
        tracing::info!(material_id = id, name = %material.name, "Material deleted");
        Ok(material)
    }

    /// Place an order for more of a material.
    ///
    /// Adds the requested quantity to `quantityOrdered`. Stock on hand and the
    /// recorded status are left alone.
    pub async fn request(
        store: &Store,
        id: DbId,
        request: &MaterialRequest,
    ) -> Result<Material, CoreError> {
        validate_id(Material::ENTITY, id)?;
        let quantity = validate_quantity(request.quantity)?;
        store.round_trip().await;

        let material = store
            .materials
            .update_with(id, |existing, _| {
                let quantity_ordered =
                    existing.quantity_ordered.checked_add(quantity).ok_or_else(|| {
                        CoreError::InvalidArgument(format!(
                            "Ordering {quantity} more {} would overflow the ordered quantity",
                            existing.unit
                        ))
                    })?;
                Ok(Material {
                    quantity_ordered,
                    ..existing.clone()
                })
            })
            .await?;

        tracing::info!(
            material_id = id,
            quantity,
            urgency = %request.urgency,
            notes = request.notes.as_deref().unwrap_or(""),
            "Material requested"
        );
        Ok(material)
    }
}

fn apply_update(existing: &Material, input: &UpdateMaterial) -> Material {
    let mut material = existing.clone();
    if let Some(name) = &input.name {
        material.name = name.clone();
    }
    if let Some(category) = &input.category {
        material.category = category.clone();
    }
    if let Some(unit) = &input.unit {
        material.unit = unit.clone();
    }
    if let Some(quantity) = input.quantity_in_stock {
        material.quantity_in_stock = quantity;
    }
    if let Some(quantity) = input.quantity_needed {
        material.quantity_needed = quantity;
    }
    if let Some(quantity) = input.quantity_ordered {
        material.quantity_ordered = quantity;
    }
    if let Some(quantity) = input.quantity_delivered {
        material.quantity_delivered = quantity;
    }
    if let Some(unit_cost) = input.unit_cost {
        material.unit_cost = unit_cost;
    }
    if let Some(supplier) = &input.supplier {
        material.supplier = supplier.clone();
    }
    if let Some(reorder_level) = input.reorder_level {
        material.reorder_level = reorder_level;
    }
    if let Some(status) = input.status {
        material.status = status;
    }
    if let Some(description) = &input.description {
        material.description = description.clone();
    }
    material
}
