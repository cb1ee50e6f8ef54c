//! Free-text search over equipment and subcontractors.

use sitetrack_core::text::{contains_ignore_case, search_term};

use crate::models::equipment::Equipment;
use crate::models::subcontractor::Subcontractor;

/// Equipment whose name, type or status label contains `search`.
pub fn search_equipment(equipment: &[Equipment], search: Option<&str>) -> Vec<Equipment> {
    let Some(term) = search_term(search) else {
        return equipment.to_vec();
    };
    equipment
        .iter()
        .filter(|e| {
            contains_ignore_case(&e.name, &term)
                || contains_ignore_case(&e.equipment_type, &term)
                || contains_ignore_case(e.status.as_str(), &term)
        })
        .cloned()
        .collect()
}

/// Subcontractors whose name, contact person or any specialty contains `search`.
pub fn search_subcontractors(subcontractors: &[Subcontractor], search: Option<&str>) -> Vec<Subcontractor> {
    let Some(term) = search_term(search) else {
        return subcontractors.to_vec();
    };
    subcontractors
        .iter()
        .filter(|s| {
            contains_ignore_case(&s.name, &term)
                || contains_ignore_case(&s.contact_person, &term)
                || s.specialties.iter().any(|sp| contains_ignore_case(sp, &term))
        })
        .cloned()
        .collect()
}
