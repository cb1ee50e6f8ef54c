//! Repository for subcontractors.

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::validate_id;
use sitetrack_core::status::SubcontractorStatus;
use sitetrack_core::types::DbId;

use crate::models::subcontractor::{CreateSubcontractor, Subcontractor, UpdateSubcontractor};
use crate::store::{Record, Store};

/// Provides CRUD operations for subcontractors.
pub struct SubcontractorRepo;

impl SubcontractorRepo {
    /// Register a new subcontractor. Status defaults to `Active`.
    pub async fn create(
        store: &Store,
        input: &CreateSubcontractor,
    ) -> Result<Subcontractor, CoreError> {
        input.validate()?;
        store.round_trip().await;

        let subcontractor = store
            .subcontractors
            .insert_with(|id| Subcontractor {
                id,
                name: input.name.clone(),
                contact_person: input.contact_person.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
                address: input.address.clone().unwrap_or_default(),
                specialties: input.specialties.clone(),
                rating: input.rating.unwrap_or(0.0),
                license_number: input.license_number.clone().unwrap_or_default(),
                insurance_expiry: input.insurance_expiry,
                status: input.status.unwrap_or(SubcontractorStatus::Active),
                projects_completed: input.projects_completed.unwrap_or(0),
                notes: input.notes.clone(),
            })
            .await?;

        tracing::info!(
            subcontractor_id = subcontractor.id,
            name = %subcontractor.name,
            "Subcontractor created"
        );
        Ok(subcontractor)
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Result<Subcontractor, CoreError> {
        validate_id(Subcontractor::ENTITY, id)?;
        store.round_trip().await;
        store.subcontractors.get(id).await
    }

    pub async fn list(store: &Store) -> Vec<Subcontractor> {
        store.round_trip().await;
        store.subcontractors.snapshot().await
    }

    pub async fn update(
        store: &Store,
        id: DbId,
        input: &UpdateSubcontractor,
    ) -> Result<Subcontractor, CoreError> {
        validate_id(Subcontractor::ENTITY, id)?;
        input.validate()?;
        store.round_trip().await;

        let subcontractor = store
            .subcontractors
            .update_with(id, |existing, _| {
                let mut sub = existing.clone();
                if let Some(name) = &input.name {
                    sub.name = name.clone();
                }
                if let Some(contact_person) = &input.contact_person {
                    sub.contact_person = contact_person.clone();
                }
                if let Some(email) = &input.email {
                    sub.email = email.clone();
                }
                if let Some(phone) = &input.phone {
                    sub.phone = phone.clone();
                }
                if let Some(address) = &input.address {
                    sub.address = address.clone();
                }
                if let Some(specialties) = &input.specialties {
                    sub.specialties = specialties.clone();
                }
                if let Some(rating) = input.rating {
                    sub.rating = rating;
                }
                if let Some(license_number) = &input.license_number {
                    sub.license_number = license_number.clone();
                }
                if let Some(insurance_expiry) = input.insurance_expiry {
                    sub.insurance_expiry = Some(insurance_expiry);
                }
                if let Some(status) = input.status {
                    sub.status = status;
                }
                if let Some(projects_completed) = input.projects_completed {
                    sub.projects_completed = projects_completed;
                }
                if let Some(notes) = &input.notes {
                    sub.notes = Some(notes.clone());
                }
                Ok(sub)
            })
            .await?;

        tracing::info!(subcontractor_id = id, "Subcontractor updated");
        Ok(subcontractor)
    }

    pub async fn delete(store: &Store, id: DbId) -> Result<Subcontractor, CoreError> {
        validate_id(Subcontractor::ENTITY, id)?;
        store.round_trip().await;

        let subcontractor = store.subcontractors.remove(id).await?;
        tracing::info!(subcontractor_id = id, name = %subcontractor.name, "Subcontractor deleted");
        Ok(subcontractor)
    }
}
