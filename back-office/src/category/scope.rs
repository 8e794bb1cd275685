//! Category list scopes
//!
//! A strategy works on exactly one list of the board: the top-level list,
//! or the child list of one parent. The scope decides which list that is,
//! how new ids look and what else changes on select/delete.

use enum_dispatch::enum_dispatch;
use shared::error::{AppError, AppResult};
use shared::models::CategoryNode;
use shared::util::snowflake_id;

use super::board::BoardState;

/// Which list a strategy manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeKind {
    TopLevel,
    Nested,
}

#[enum_dispatch]
pub trait CategoryScope {
    fn kind(&self) -> ScopeKind;

    /// Current nodes of the managed list
    fn items<'a>(&self, board: &'a BoardState) -> &'a [CategoryNode];

    /// Mutable managed list, `None` when the list does not exist yet.
    /// Only this slice of the board is rewritten.
    fn items_mut<'a>(&self, board: &'a mut BoardState) -> Option<&'a mut Vec<CategoryNode>>;

    /// List that receives added nodes, created on demand where allowed
    fn items_for_add<'a>(&self, board: &'a mut BoardState) -> AppResult<&'a mut Vec<CategoryNode>>;

    /// Fresh id for an added node
    fn new_id(&self) -> String;

    /// Board bookkeeping after node `id` was removed
    fn after_remove(&self, _board: &mut BoardState, _id: &str) {}

    /// Board bookkeeping on click
    fn select(&self, _board: &mut BoardState, _id: &str) {}
}

/// The flat list of top-level categories
#[derive(Debug, Clone, Copy, Default)]
pub struct TopLevelScope;

impl CategoryScope for TopLevelScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::TopLevel
    }

    fn items<'a>(&self, board: &'a BoardState) -> &'a [CategoryNode] {
        &board.top_level
    }

    fn items_mut<'a>(&self, board: &'a mut BoardState) -> Option<&'a mut Vec<CategoryNode>> {
        Some(&mut board.top_level)
    }

    fn items_for_add<'a>(&self, board: &'a mut BoardState) -> AppResult<&'a mut Vec<CategoryNode>> {
        Ok(&mut board.top_level)
    }

    fn new_id(&self) -> String {
        snowflake_id().to_string()
    }

    fn after_remove(&self, board: &mut BoardState, id: &str) {
        board.children.remove(id);
        if board.selected.as_deref() == Some(id) {
            board.selected = None;
        }
    }

    fn select(&self, board: &mut BoardState, id: &str) {
        if board.selected.as_deref() == Some(id) {
            return;
        }
        board.selected = Some(id.to_string());
    }
}

/// The child list of one parent
#[derive(Debug, Clone)]
pub struct NestedScope {
    parent_id: String,
}

impl NestedScope {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }
}

impl CategoryScope for NestedScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Nested
    }

    fn items<'a>(&self, board: &'a BoardState) -> &'a [CategoryNode] {
        board
            .children
            .get(&self.parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn items_mut<'a>(&self, board: &'a mut BoardState) -> Option<&'a mut Vec<CategoryNode>> {
        board.children.get_mut(&self.parent_id)
    }

    /// The parent must still be a top-level node
    fn items_for_add<'a>(&self, board: &'a mut BoardState) -> AppResult<&'a mut Vec<CategoryNode>> {
        if !board.top_level.iter().any(|node| node.id == self.parent_id) {
            return Err(AppError::category_not_found(&self.parent_id));
        }
        Ok(board.children.entry(self.parent_id.clone()).or_default())
    }

    fn new_id(&self) -> String {
        format!("{}-{}", self.parent_id, snowflake_id())
    }
}

/// Scope dispatch
#[enum_dispatch(CategoryScope)]
#[derive(Debug, Clone)]
pub enum Scope {
    TopLevel(TopLevelScope),
    Nested(NestedScope),
}
