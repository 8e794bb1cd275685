//! Catalog Entry Model

use crate::types::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product specification (size / color variant) with its own stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

impl Specification {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Catalog entry (one product in the inventory list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Unit price, never negative
    pub price: Decimal,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub image: String,
}

impl CatalogEntry {
    /// Build a new entry from a create payload
    pub fn from_create(id: impl Into<String>, data: CatalogEntryCreate, now: Timestamp) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            category: data.category,
            specifications: data.specifications,
            price: data.price,
            created_at: now,
            updated_at: now,
            image: data.image.unwrap_or_default(),
        }
    }

    /// Total stock across all specifications.
    ///
    /// Always derived, never stored.
    pub fn total_stock(&self) -> u64 {
        self.specifications
            .iter()
            .map(|spec| u64::from(spec.quantity))
            .sum()
    }

    /// Merge the present fields of `data` and stamp `updated_at`
    pub fn apply_update(&mut self, data: CatalogEntryUpdate, now: Timestamp) {
        if let Some(v) = data.name {
            self.name = v;
        }
        if let Some(v) = data.category {
            self.category = v;
        }
        if let Some(v) = data.specifications {
            self.specifications = v;
        }
        if let Some(v) = data.price {
            self.price = v;
        }
        if let Some(v) = data.image {
            self.image = v;
        }
        self.updated_at = now;
    }
}

/// Create catalog entry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryCreate {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    pub price: Decimal,
    pub image: Option<String>,
}

/// Update catalog entry payload (partial)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub specifications: Option<Vec<Specification>>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}

impl CatalogEntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.specifications.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}
