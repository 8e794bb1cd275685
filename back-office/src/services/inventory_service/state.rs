//! Owned pipeline state and its derived view

use std::collections::BTreeSet;

use serde::Serialize;
use shared::models::{CatalogEntry, FilterSpec};
use shared::query::PageInfo;

use crate::inventory::{
    DisplayProjection, Paginator, SelectAllState, SelectionTracker, filter, projection, search,
};

/// What the delete dialog is about to remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "productId", rename_all = "camelCase")]
pub enum DeleteTarget {
    /// One entry by id
    Single(String),
    /// The current selection
    Selected,
}

/// Open delete dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDelete {
    pub target: DeleteTarget,
    /// Number of entries the dialog announces
    pub count: usize,
}

/// Snapshot of everything the listing screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPage {
    pub items: Vec<DisplayProjection>,
    pub page_info: PageInfo,
    pub selected_ids: Vec<String>,
    pub select_all_state: SelectAllState,
    pub filter: FilterSpec,
    pub active_filter_count: usize,
    pub query: String,
    pub pending_delete: Option<PendingDelete>,
}

#[derive(Debug, Clone)]
pub(crate) struct InventoryState {
    pub catalog: Vec<CatalogEntry>,
    pub filter: FilterSpec,
    pub query: String,
    pub paginator: Paginator,
    pub selection: SelectionTracker,
    pub pending_delete: Option<PendingDelete>,
    /// Filtered, projected and searched rows
    view: Vec<DisplayProjection>,
}

impl InventoryState {
    pub fn new(catalog: Vec<CatalogEntry>, paginator: Paginator) -> Self {
        let mut state = Self {
            catalog,
            filter: FilterSpec::default(),
            query: String::new(),
            paginator,
            selection: SelectionTracker::new(),
            pending_delete: None,
            view: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn view(&self) -> &[DisplayProjection] {
        &self.view
    }

    /// Re-run the pipeline and restore the selection and page invariants
    pub fn recompute(&mut self) {
        let filtered = filter::apply(&self.catalog, &self.filter);
        let rows = projection::project(filtered);
        self.view = search::search(&rows, &self.query);

        let before = self.selection.len();
        self.selection
            .prune(self.view.iter().map(|row| row.id.as_str()));
        let pruned = before - self.selection.len();

        let clamped = self.paginator.reconcile(self.view.len());

        tracing::debug!(
            catalog = self.catalog.len(),
            filtered = rows.len(),
            visible = self.view.len(),
            page = self.paginator.current_page(),
            pruned,
            clamped,
            "inventory view recomputed"
        );
    }

    /// Ids of the rows on the current page
    pub fn page_ids(&self) -> Vec<String> {
        self.paginator
            .current_items(&self.view)
            .iter()
            .map(|row| row.id.clone())
            .collect()
    }

    pub fn contains_entry(&self, id: &str) -> bool {
        self.catalog.iter().any(|entry| entry.id == id)
    }

    pub fn entry_mut(&mut self, id: &str) -> Option<&mut CatalogEntry> {
        self.catalog.iter_mut().find(|entry| entry.id == id)
    }

    /// Drop every entry whose id is in `ids`, returning how many were removed
    pub fn remove_entries(&mut self, ids: &BTreeSet<String>) -> usize {
        let before = self.catalog.len();
        self.catalog.retain(|entry| !ids.contains(&entry.id));
        before - self.catalog.len()
    }

    pub fn snapshot(&self) -> InventoryPage {
        let items = self.paginator.current_items(&self.view).to_vec();
        let page_ids: Vec<&str> = items.iter().map(|row| row.id.as_str()).collect();
        InventoryPage {
            select_all_state: self.selection.state_for(&page_ids),
            items,
            page_info: self.paginator.page_info(self.view.len()),
            selected_ids: self.selection.selected_ids(),
            filter: self.filter.clone(),
            active_filter_count: self.filter.active_count(),
            query: self.query.clone(),
            pending_delete: self.pending_delete.clone(),
        }
    }
}
