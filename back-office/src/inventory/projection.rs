//! Display projection of a catalog entry
//!
//! The listing table never reads [`CatalogEntry`] directly: every row is a
//! [`DisplayProjection`] derived from the filtered catalog.

use serde::Serialize;
use shared::models::{CatalogEntry, Specification};

use crate::utils::format::{format_inventory, format_price};

/// Read-only listing row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProjection {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Specification names joined with `", "`
    pub specification: String,
    /// Structured specifications for the stock popover
    pub specifications: Vec<Specification>,
    /// `NT$ 1,234`
    pub price: String,
    /// `缺貨` or `{n} 件`
    pub inventory: String,
    pub total_stock: u64,
    pub image: String,
}

impl From<&CatalogEntry> for DisplayProjection {
    fn from(entry: &CatalogEntry) -> Self {
        let specification = entry
            .specifications
            .iter()
            .map(|spec| spec.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let total_stock = entry.total_stock();

        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            specification,
            specifications: entry.specifications.clone(),
            price: format_price(entry.price),
            inventory: format_inventory(total_stock),
            total_stock,
            image: entry.image.clone(),
        }
    }
}

/// Project a list of entries, order preserved
pub fn project<'a, I>(entries: I) -> Vec<DisplayProjection>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    entries.into_iter().map(DisplayProjection::from).collect()
}
