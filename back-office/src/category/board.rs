//! Category board - two-level category tree behind one lock
//!
//! The board owns the top-level list, the child lists keyed by parent id
//! and the currently selected top-level id. Strategies are cheap views
//! over it, built per scope.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::CategoryNode;

use super::confirm::{ConfirmationSlot, DeleteConfirmer};
use super::scope::{NestedScope, TopLevelScope};
use super::strategy::CategoryStrategy;
use crate::services::collaborators::{ErrorReporter, SharedReporter, report_to};

/// Raw board data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub(crate) top_level: Vec<CategoryNode>,
    pub(crate) children: BTreeMap<String, Vec<CategoryNode>>,
    pub(crate) selected: Option<String>,
}

impl BoardState {
    pub fn top_level(&self) -> &[CategoryNode] {
        &self.top_level
    }

    pub fn children(&self) -> &BTreeMap<String, Vec<CategoryNode>> {
        &self.children
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Cloneable handle over the category tree
#[derive(Clone)]
pub struct CategoryBoard {
    state: Arc<RwLock<BoardState>>,
    slot: ConfirmationSlot,
    reporter: Option<SharedReporter>,
    confirmer: Option<Arc<dyn DeleteConfirmer>>,
}

impl std::fmt::Debug for CategoryBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryBoard")
            .field("state", &*self.state.read())
            .field("pending", &self.slot.pending())
            .field("confirmer", &self.confirmer.is_some())
            .finish()
    }
}

impl CategoryBoard {
    /// Create a board; the first top-level node starts selected
    pub fn new(
        top_level: Vec<CategoryNode>,
        children: impl IntoIterator<Item = (String, Vec<CategoryNode>)>,
    ) -> Self {
        let selected = top_level.first().map(|node| node.id.clone());
        let state = BoardState {
            top_level,
            children: children.into_iter().collect(),
            selected,
        };
        tracing::info!(
            top_level = state.top_level.len(),
            parents = state.children.len(),
            "Category board loaded"
        );
        Self {
            state: Arc::new(RwLock::new(state)),
            slot: ConfirmationSlot::new(),
            reporter: None,
            confirmer: None,
        }
    }

    pub fn with_error_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Require confirmation before every delete
    pub fn with_confirmer(mut self, confirmer: impl DeleteConfirmer + 'static) -> Self {
        self.confirmer = Some(Arc::new(confirmer));
        self
    }

    // ========== Strategies ==========

    pub fn top_level_strategy(&self) -> CategoryStrategy {
        CategoryStrategy::new(TopLevelScope.into(), self.clone())
    }

    /// Strategy for the children of the selected top-level node
    pub fn nested_strategy(&self) -> Option<CategoryStrategy> {
        let parent = self.selected_parent()?;
        Some(self.nested_strategy_for(parent))
    }

    pub fn nested_strategy_for(&self, parent_id: impl Into<String>) -> CategoryStrategy {
        CategoryStrategy::new(NestedScope::new(parent_id).into(), self.clone())
    }

    // ========== Reads ==========

    pub fn top_level(&self) -> Vec<CategoryNode> {
        self.state.read().top_level.clone()
    }

    pub fn children_of(&self, parent_id: &str) -> Vec<CategoryNode> {
        self.state
            .read()
            .children
            .get(parent_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn selected_parent(&self) -> Option<String> {
        self.state.read().selected.clone()
    }

    /// Id whose delete confirmation is open
    pub fn pending_confirmation(&self) -> Option<String> {
        self.slot.pending()
    }

    /// Copy of the whole tree (what the save button submits)
    pub fn snapshot(&self) -> BoardState {
        self.state.read().clone()
    }

    // ========== Crate internals for strategies ==========

    pub(crate) fn read<T>(&self, f: impl FnOnce(&BoardState) -> T) -> T {
        f(&self.state.read())
    }

    pub(crate) fn write<T>(&self, f: impl FnOnce(&mut BoardState) -> T) -> T {
        f(&mut self.state.write())
    }

    pub(crate) fn slot(&self) -> &ConfirmationSlot {
        &self.slot
    }

    pub(crate) fn confirmer(&self) -> Option<Arc<dyn DeleteConfirmer>> {
        self.confirmer.clone()
    }

    pub(crate) fn report(&self, message: &str) {
        report_to(self.reporter.as_ref(), message);
    }
}
