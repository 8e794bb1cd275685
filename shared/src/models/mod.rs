//! Domain models

pub mod catalog_entry;
pub mod category_node;
pub mod filter;

pub use catalog_entry::{CatalogEntry, CatalogEntryCreate, CatalogEntryUpdate, Specification};
pub use category_node::CategoryNode;
pub use filter::{FilterSpec, StockStatus};
