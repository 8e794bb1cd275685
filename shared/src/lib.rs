//! Shared types for the merchandising back-office
//!
//! Domain models, page metadata, the unified error system and small
//! id/time utilities used by the `back-office` crate.

pub mod error;
pub mod models;
pub mod query;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    CatalogEntry, CatalogEntryCreate, CatalogEntryUpdate, CategoryNode, FilterSpec,
    Specification, StockStatus,
};
pub use query::PageInfo;
