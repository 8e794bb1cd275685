//! Category strategy - the operations one category list offers
//!
//! Both lists of the category page expose the same contract; the
//! [`Scope`] chosen at construction decides which list is touched.
//! Failures never escape: they go to the board's error reporter.

use std::sync::Arc;

use shared::error::AppError;
use shared::models::CategoryNode;

use super::board::CategoryBoard;
use super::scope::{CategoryScope, Scope, ScopeKind};
use crate::services::collaborators::{SelectHandler, SharedSelectHandler};

pub struct CategoryStrategy {
    scope: Scope,
    board: CategoryBoard,
    on_select: Option<SharedSelectHandler>,
}

impl std::fmt::Debug for CategoryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryStrategy")
            .field("scope", &self.scope)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl CategoryStrategy {
    pub(crate) fn new(scope: Scope, board: CategoryBoard) -> Self {
        Self {
            scope,
            board,
            on_select: None,
        }
    }

    /// Attach the click callback
    pub fn with_select_handler(mut self, handler: impl SelectHandler + 'static) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn kind(&self) -> ScopeKind {
        self.scope.kind()
    }

    /// Nodes of the managed list, in display order
    pub fn items(&self) -> Vec<CategoryNode> {
        self.board.read(|state| self.scope.items(state).to_vec())
    }

    /// Append a node with a fresh id. Names are not checked for duplicates.
    ///
    /// A nested list whose parent is gone rejects the add and reports it.
    pub fn add(&self, name: impl Into<String>) -> Option<CategoryNode> {
        let node = CategoryNode::new(self.scope.new_id(), name);
        let result = self.board.write(|state| {
            self.scope
                .items_for_add(state)
                .map(|items| items.push(node.clone()))
        });
        if let Err(err) = result {
            self.board.report(&err.message);
            return None;
        }
        tracing::info!(id = %node.id, name = %node.name, kind = ?self.kind(), "Category added");
        Some(node)
    }

    /// Delete node `id`, asking the confirmer first when one is attached.
    ///
    /// Returns true when a node was removed. A declined confirmation is
    /// silent; a missing node or an already open confirmation is reported.
    pub async fn delete(&self, id: &str) -> bool {
        if let Some(confirmer) = self.board.confirmer() {
            let name = self.board.read(|state| {
                self.scope
                    .items(state)
                    .iter()
                    .find(|node| node.id == id)
                    .map(|node| node.name.clone())
            });
            let Some(name) = name else {
                self.board.report(&AppError::category_not_found(id).message);
                return false;
            };
            let Some(_guard) = self.board.slot().try_acquire(id) else {
                self.board.report(&AppError::confirmation_pending().message);
                return false;
            };

            if !confirmer.confirm(id, &name).await {
                tracing::debug!(id, "Category delete declined");
                return false;
            }
        }

        let removed = self.board.write(|state| {
            let Some(items) = self.scope.items_mut(state) else {
                return false;
            };
            let before = items.len();
            items.retain(|node| node.id != id);
            let removed = items.len() < before;
            if removed {
                self.scope.after_remove(state, id);
            }
            removed
        });
        if removed {
            tracing::info!(id, kind = ?self.kind(), "Category deleted");
        }
        removed
    }

    /// Move `source` to the position of `target` (drag end)
    pub fn on_reorder(&self, source: &str, target: &str) {
        if source == target {
            return;
        }
        let result = self.board.write(|state| {
            let Some(items) = self.scope.items_mut(state) else {
                return Err(AppError::category_not_found(source));
            };
            let from = items.iter().position(|node| node.id == source);
            let to = items.iter().position(|node| node.id == target);
            match (from, to) {
                (Some(from), Some(to)) => {
                    let node = items.remove(from);
                    items.insert(to, node);
                    Ok((from, to))
                }
                (None, _) => Err(AppError::category_not_found(source)),
                (_, None) => Err(AppError::category_not_found(target)),
            }
        });
        match result {
            Ok((from, to)) => tracing::debug!(source, from, to, "Category reordered"),
            Err(err) => self.board.report(&err.message),
        }
    }

    /// Click on node `id`
    pub fn on_select(&self, id: &str) {
        self.board.write(|state| self.scope.select(state, id));
        if let Some(handler) = &self.on_select {
            handler.on_select(id);
        }
    }
}
