//! InventoryService - 库存列表管线编排
//!
//! Owns the catalog and every piece of listing state (filter, search
//! query, pagination, selection, pending delete dialog) behind one lock.
//!
//! # Mutation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Take the write lock
//!     ├─ 2. Validate (state untouched on error)
//!     ├─ 3. Apply the change to catalog / filter / query / page / selection
//!     ├─ 4. Recompute: filter → project → search → prune selection → clamp page
//!     ├─ 5. Release the lock
//!     └─ 6. Report any error through the ErrorReporter and return it
//! ```

mod state;

pub use state::{DeleteTarget, InventoryPage, PendingDelete};

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CatalogEntry, CatalogEntryCreate, CatalogEntryUpdate, FilterSpec};
use shared::util::now_millis;

use crate::inventory::Paginator;
use crate::services::collaborators::{
    ErrorReporter, Navigator, SharedNavigator, SharedReporter, report_to,
};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use state::InventoryState;

/// Cloneable handle over the inventory listing state
#[derive(Clone)]
pub struct InventoryService {
    state: Arc<RwLock<InventoryState>>,
    reporter: Option<SharedReporter>,
    navigator: Option<SharedNavigator>,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("InventoryService")
            .field("catalog", &state.catalog.len())
            .field("visible", &state.view().len())
            .field("reporter", &self.reporter.is_some())
            .field("navigator", &self.navigator.is_some())
            .finish()
    }
}

impl InventoryService {
    /// Create a service over `catalog` with the default page size
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self::from_state(InventoryState::new(catalog, Paginator::default()))
    }

    /// Create a service with a custom page size (must be >= 1)
    pub fn with_rows_per_page(catalog: Vec<CatalogEntry>, rows_per_page: usize) -> AppResult<Self> {
        let paginator = Paginator::new(rows_per_page)?;
        Ok(Self::from_state(InventoryState::new(catalog, paginator)))
    }

    fn from_state(state: InventoryState) -> Self {
        tracing::info!(entries = state.catalog.len(), "Inventory catalog loaded");
        Self {
            state: Arc::new(RwLock::new(state)),
            reporter: None,
            navigator: None,
        }
    }

    /// Attach the toast collaborator
    pub fn with_error_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Attach the routing collaborator
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Forward errors to the reporter before handing them back
    fn reported<T>(&self, result: AppResult<T>) -> AppResult<T> {
        if let Err(err) = &result {
            report_to(self.reporter.as_ref(), &err.message);
        }
        result
    }

    /// Run `op` under the write lock, then recompute the view
    fn mutate<T>(&self, op: impl FnOnce(&mut InventoryState) -> AppResult<T>) -> AppResult<T> {
        let result = {
            let mut state = self.state.write();
            let result = op(&mut state);
            if result.is_ok() {
                state.recompute();
            }
            result
        };
        self.reported(result)
    }

    // ========== Reads ==========

    /// Everything the listing screen renders
    pub fn page(&self) -> InventoryPage {
        self.state.read().snapshot()
    }

    /// Size of the filtered and searched collection (pagination footer)
    pub fn filtered_count(&self) -> usize {
        self.state.read().view().len()
    }

    pub fn get_entry(&self, id: &str) -> Option<CatalogEntry> {
        self.state
            .read()
            .catalog
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    /// Raw catalog in insertion order
    pub fn list_entries(&self) -> Vec<CatalogEntry> {
        self.state.read().catalog.clone()
    }

    pub fn filter(&self) -> FilterSpec {
        self.state.read().filter.clone()
    }

    pub fn query(&self) -> String {
        self.state.read().query.clone()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.state.read().selection.selected_ids()
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.state.read().pending_delete.clone()
    }

    // ========== Pipeline ==========

    /// Replace the filter. Malformed price bounds are rejected.
    pub fn set_filter(&self, filter: FilterSpec) -> AppResult<()> {
        self.mutate(|state| {
            filter.validate()?;
            tracing::debug!(active = filter.active_count(), "Filter changed");
            state.filter = filter;
            Ok(())
        })
    }

    pub fn reset_filter(&self) {
        let _ = self.mutate(|state| {
            state.filter = FilterSpec::default();
            Ok(())
        });
    }

    /// Change the search query. A different query clears the selection and
    /// returns to page 1.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        let _ = self.mutate(|state| {
            if state.query != query {
                state.query = query;
                state.selection.clear();
                state.paginator.reset();
            }
            Ok(())
        });
    }

    pub fn set_current_page(&self, page: usize) -> AppResult<()> {
        self.mutate(|state| state.paginator.set_current_page(page))
    }

    pub fn set_rows_per_page(&self, rows_per_page: usize) -> AppResult<()> {
        self.mutate(|state| state.paginator.set_rows_per_page(rows_per_page))
    }

    /// Check or uncheck one visible row
    pub fn select_row(&self, id: &str, checked: bool) -> AppResult<()> {
        self.mutate(|state| {
            if !state.view().iter().any(|row| row.id == id) {
                return Err(AppError::product_not_found(id));
            }
            state.selection.select_row(id, checked);
            Ok(())
        })
    }

    /// Header checkbox: add or remove every row of the current page
    pub fn select_all_on_page(&self, checked: bool) {
        let _ = self.mutate(|state| {
            let page_ids = state.page_ids();
            state.selection.select_all_on_page(checked, page_ids);
            Ok(())
        });
    }

    pub fn clear_selection(&self) {
        let _ = self.mutate(|state| {
            state.selection.clear();
            Ok(())
        });
    }

    // ========== Catalog ==========

    /// Create a new entry with a fresh UUID
    pub fn add_entry(&self, data: CatalogEntryCreate) -> AppResult<CatalogEntry> {
        self.mutate(|state| {
            validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
            validate_required_text(&data.category, "category", MAX_NAME_LEN)?;
            validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
            validate_price(data.price)?;

            let id = uuid::Uuid::new_v4().to_string();
            let entry = CatalogEntry::from_create(id, data, now_millis());
            tracing::info!(id = %entry.id, name = %entry.name, "Catalog entry added");
            state.catalog.push(entry.clone());
            Ok(entry)
        })
    }

    /// Merge the present fields of `data` into entry `id`.
    ///
    /// Page and selection are kept; the usual invariants still prune rows
    /// that no longer match the filter.
    pub fn edit_entry(&self, id: &str, data: CatalogEntryUpdate) -> AppResult<CatalogEntry> {
        self.mutate(|state| {
            if let Some(name) = &data.name {
                validate_required_text(name, "name", MAX_NAME_LEN)?;
            }
            if let Some(category) = &data.category {
                validate_required_text(category, "category", MAX_NAME_LEN)?;
            }
            validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
            if let Some(price) = data.price {
                validate_price(price)?;
            }

            let entry = state
                .entry_mut(id)
                .ok_or_else(|| AppError::product_not_found(id))?;
            entry.apply_update(data, now_millis());
            tracing::info!(id = %entry.id, "Catalog entry updated");
            Ok(entry.clone())
        })
    }

    pub fn delete_entry(&self, id: &str) -> AppResult<()> {
        self.mutate(|state| {
            if !state.contains_entry(id) {
                return Err(AppError::product_not_found(id));
            }
            state.remove_entries(&BTreeSet::from([id.to_string()]));
            tracing::info!(id, "Catalog entry deleted");
            Ok(())
        })
    }

    /// Delete every listed id that exists; returns the number removed.
    pub fn delete_many<I, S>(&self, ids: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        self.mutate(|state| remove_many(state, &ids))
    }

    /// Delete the current selection, then clear it
    pub fn delete_selected(&self) -> AppResult<usize> {
        self.mutate(|state| {
            let ids = state.selection.selected().clone();
            let removed = remove_many(state, &ids)?;
            state.selection.clear();
            Ok(removed)
        })
    }

    // ========== Delete dialog ==========

    /// Open the delete dialog. Only one dialog can be pending.
    pub fn request_delete(&self, target: DeleteTarget) -> AppResult<PendingDelete> {
        self.mutate(|state| {
            if state.pending_delete.is_some() {
                return Err(AppError::confirmation_pending());
            }
            let count = match &target {
                DeleteTarget::Single(id) => {
                    if !state.contains_entry(id) {
                        return Err(AppError::product_not_found(id));
                    }
                    1
                }
                DeleteTarget::Selected => {
                    if state.selection.is_empty() {
                        return Err(AppError::nothing_selected());
                    }
                    state.selection.len()
                }
            };
            let pending = PendingDelete { target, count };
            state.pending_delete = Some(pending.clone());
            Ok(pending)
        })
    }

    /// Execute the pending delete; returns the number of entries removed
    pub fn confirm_delete(&self) -> AppResult<usize> {
        self.mutate(|state| {
            let pending = state
                .pending_delete
                .take()
                .ok_or_else(|| AppError::invalid_request("No delete is pending"))?;
            match pending.target {
                DeleteTarget::Single(id) => {
                    let removed = state.remove_entries(&BTreeSet::from([id.clone()]));
                    if removed == 0 {
                        return Err(AppError::product_not_found(id));
                    }
                    tracing::info!(id = %id, "Catalog entry deleted");
                    Ok(removed)
                }
                DeleteTarget::Selected => {
                    let ids = state.selection.selected().clone();
                    let removed = remove_many(state, &ids)?;
                    state.selection.clear();
                    Ok(removed)
                }
            }
        })
    }

    /// Close the delete dialog without deleting
    pub fn cancel_delete(&self) {
        let _ = self.mutate(|state| {
            state.pending_delete = None;
            Ok(())
        });
    }

    /// Hand over to the add-product screen
    pub fn open_add_entry(&self) {
        tracing::debug!("Opening add product screen");
        if let Some(navigator) = &self.navigator {
            navigator.navigate();
        }
    }
}

fn validate_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(
            AppError::with_message(ErrorCode::ProductInvalidPrice, "Price must be >= 0")
                .with_detail("field", "price"),
        );
    }
    Ok(())
}

fn remove_many(state: &mut InventoryState, ids: &BTreeSet<String>) -> AppResult<usize> {
    if ids.is_empty() {
        return Err(AppError::nothing_selected());
    }
    let removed = state.remove_entries(ids);
    tracing::info!(requested = ids.len(), removed, "Catalog entries deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests;
