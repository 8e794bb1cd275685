//! Initial catalog source

use std::collections::HashSet;
use std::path::Path;

use shared::error::AppError;
use shared::models::CatalogEntry;

use super::error::{CatalogSourceError, Result};

/// Read a JSON array of catalog entries from `path`.
///
/// Duplicate ids and negative prices are rejected.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&text).map_err(|source| CatalogSourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    check_catalog(&entries)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "Catalog file loaded");
    Ok(entries)
}

fn check_catalog(entries: &[CatalogEntry]) -> std::result::Result<(), AppError> {
    let mut ids = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !ids.insert(entry.id.as_str()) {
            return Err(AppError::with_message(
                shared::error::ErrorCode::AlreadyExists,
                format!("Duplicate catalog id {}", entry.id),
            ));
        }
        if entry.price.is_sign_negative() && !entry.price.is_zero() {
            return Err(AppError::with_message(
                shared::error::ErrorCode::ProductInvalidPrice,
                format!("Catalog entry {} has a negative price", entry.id),
            ));
        }
    }
    Ok(())
}
