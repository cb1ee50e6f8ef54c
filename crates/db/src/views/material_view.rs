//! Inventory filtering, sorting and summary counts.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitetrack_core::error::CoreError;
use sitetrack_core::status::MaterialStatus;
use sitetrack_core::stock::{is_critical, is_low, StockBucket, StockLevel};
use sitetrack_core::text::{compare_text, search_term};

use super::SortOrder;
use crate::models::material::Material;

/// Field the materials list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSortKey {
    #[default]
    Name,
    Stock,
    Status,
    Supplier,
}

impl MaterialSortKey {
    fn compare(self, a: &Material, b: &Material) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Stock => a.quantity_in_stock.cmp(&b.quantity_in_stock),
            Self::Status => compare_text(a.status.as_str(), b.status.as_str()),
            Self::Supplier => compare_text(&a.supplier, &b.supplier),
        }
    }
}

impl FromStr for MaterialSortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "stock" => Ok(Self::Stock),
            "status" => Ok(Self::Status),
            "supplier" => Ok(Self::Supplier),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid sort key '{s}'. Must be one of: name, stock, status, supplier"
            ))),
        }
    }
}

/// Criteria for [`filter_materials`].
#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    /// Case-insensitive substring of the name, category or supplier.
    pub search: Option<String>,
    pub bucket: StockBucket,
    pub sort: MaterialSortKey,
    pub order: SortOrder,
}

/// Materials in the selected bucket matching the search, sorted.
///
/// The sort is stable, so ties keep their stored order.
pub fn filter_materials(materials: &[Material], filter: &MaterialFilter) -> Vec<Material> {
    let search = search_term(filter.search.as_deref());
    let mut matched: Vec<Material> = materials
        .iter()
        .filter(|m| {
            filter
                .bucket
                .matches(m.quantity_in_stock, m.reorder_level, m.status)
        })
        .filter(|m| match search.as_deref() {
            Some(term) => {
                m.name.to_lowercase().contains(term)
                    || m.category.to_lowercase().contains(term)
                    || m.supplier.to_lowercase().contains(term)
            }
            None => true,
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| filter.order.apply(filter.sort.compare(a, b)));
    matched
}

/// A material together with its derived stock level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCard {
    #[serde(flatten)]
    pub material: Material,
    pub stock_level: StockLevel,
}

pub fn annotate(materials: Vec<Material>) -> Vec<MaterialCard> {
    materials
        .into_iter()
        .map(|material| MaterialCard {
            stock_level: material.stock_level(),
            material,
        })
        .collect()
}

/// Inventory summary counts. A material may count in several buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialStats {
    pub total: usize,
    pub low_stock: usize,
    pub critical: usize,
    pub ordered: usize,
}

impl MaterialStats {
    pub fn from_materials(materials: &[Material]) -> Self {
        materials.iter().fold(Self::default(), |mut stats, m| {
            stats.total += 1;
            if is_low(m.quantity_in_stock, m.reorder_level) {
                stats.low_stock += 1;
            }
            if is_critical(m.quantity_in_stock, m.reorder_level, m.status) {
                stats.critical += 1;
            }
            if m.status == MaterialStatus::Ordered {
                stats.ordered += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: i64, name: &str, in_stock: u32, reorder: u32, status: MaterialStatus) -> Material {
        Material {
            id,
            name: name.to_string(),
            category: "Structural".to_string(),
            unit: "tons".to_string(),
            quantity_in_stock: in_stock,
            quantity_needed: 0,
            quantity_ordered: 0,
            quantity_delivered: 0,
            unit_cost: 100.0,
            supplier: "Acme Supply".to_string(),
            reorder_level: reorder,
            status,
            description: String::new(),
        }
    }

    fn names(materials: &[Material]) -> Vec<&str> {
        materials.iter().map(|m| m.name.as_str()).collect()
    }

    fn bucket(bucket: StockBucket) -> MaterialFilter {
        MaterialFilter {
            bucket,
            ..MaterialFilter::default()
        }
    }

    #[test]
    fn rebar_shows_up_in_all_low_and_critical() {
        let rebar = vec![material(1, "Rebar", 10, 20, MaterialStatus::InStock)];
        assert_eq!(filter_materials(&rebar, &bucket(StockBucket::All)).len(), 1);
        assert_eq!(filter_materials(&rebar, &bucket(StockBucket::Low)).len(), 1);
        assert_eq!(filter_materials(&rebar, &bucket(StockBucket::Critical)).len(), 1);
        assert!(filter_materials(&rebar, &bucket(StockBucket::Ordered)).is_empty());
    }

    #[test]
    fn ordered_bucket_uses_recorded_status() {
        let materials = vec![
            material(1, "Lumber", 500, 100, MaterialStatus::Ordered),
            material(2, "Drywall", 500, 100, MaterialStatus::InStock),
        ];
        let ordered = filter_materials(&materials, &bucket(StockBucket::Ordered));
        assert_eq!(names(&ordered), vec!["Lumber"]);
    }

    #[test]
    fn search_covers_category_and_supplier() {
        let mut concrete = material(1, "Concrete", 50, 10, MaterialStatus::InStock);
        concrete.supplier = "Metro Ready-Mix".to_string();
        let mut wire = material(2, "Wire", 50, 10, MaterialStatus::InStock);
        wire.category = "Electrical".to_string();

        let filter = MaterialFilter {
            search: Some("ready".to_string()),
            ..MaterialFilter::default()
        };
        assert_eq!(names(&filter_materials(&[concrete.clone(), wire.clone()], &filter)), vec!["Concrete"]);

        let filter = MaterialFilter {
            search: Some("ELECTRICAL".to_string()),
            ..MaterialFilter::default()
        };
        assert_eq!(names(&filter_materials(&[concrete, wire], &filter)), vec!["Wire"]);
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let materials = vec![
            material(1, "lumber", 5, 1, MaterialStatus::InStock),
            material(2, "Cement", 5, 1, MaterialStatus::InStock),
            material(3, "Gravel", 5, 1, MaterialStatus::InStock),
        ];
        let sorted = filter_materials(&materials, &MaterialFilter::default());
        assert_eq!(names(&sorted), vec!["Cement", "Gravel", "lumber"]);

        let filter = MaterialFilter {
            order: SortOrder::Desc,
            ..MaterialFilter::default()
        };
        assert_eq!(names(&filter_materials(&materials, &filter)), vec!["lumber", "Gravel", "Cement"]);
    }

    #[test]
    fn sorts_by_stock_numerically() {
        let materials = vec![
            material(1, "A", 100, 1, MaterialStatus::InStock),
            material(2, "B", 9, 1, MaterialStatus::InStock),
            material(3, "C", 20, 1, MaterialStatus::InStock),
        ];
        let filter = MaterialFilter {
            sort: MaterialSortKey::Stock,
            ..MaterialFilter::default()
        };
        assert_eq!(names(&filter_materials(&materials, &filter)), vec!["B", "C", "A"]);
    }

    #[test]
    fn stats_count_overlapping_buckets() {
        let materials = vec![
            material(1, "Rebar", 10, 20, MaterialStatus::InStock),
            material(2, "Lumber", 500, 100, MaterialStatus::Ordered),
            material(3, "Sand", 15, 20, MaterialStatus::LowStock),
        ];
        let stats = MaterialStats::from_materials(&materials);
        assert_eq!(
            stats,
            MaterialStats {
                total: 3,
                low_stock: 2,
                critical: 1,
                ordered: 1,
            }
        );
    }

    #[test]
    fn cards_carry_the_derived_level() {
        let cards = annotate(vec![
            material(1, "Rebar", 10, 20, MaterialStatus::InStock),
            material(2, "Sand", 15, 20, MaterialStatus::InStock),
        ]);
        assert_eq!(cards[0].stock_level, StockLevel::Critical);
        assert_eq!(cards[1].stock_level, StockLevel::Low);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!("price".parse::<MaterialSortKey>().is_err());
        assert_eq!("supplier".parse::<MaterialSortKey>(), Ok(MaterialSortKey::Supplier));
    }
}
