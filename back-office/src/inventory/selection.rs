//! Page-scoped multi-select
//!
//! Every mutation is a [`SelectionAction`] folded through the pure
//! [`reduce`] function, so sequential updates compose without loss.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

/// Header checkbox state over the rows of the current page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectAllState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

/// Serialized as `false`, `true` or `"indeterminate"`
impl Serialize for SelectAllState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectAllState::Unchecked => serializer.serialize_bool(false),
            SelectAllState::Checked => serializer.serialize_bool(true),
            SelectAllState::Indeterminate => serializer.serialize_str("indeterminate"),
        }
    }
}

/// Selection mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Check or uncheck one row
    Row { id: String, checked: bool },
    /// Header checkbox: add or remove every row of the page
    Page { page_ids: Vec<String>, checked: bool },
    /// Drop ids no longer present in the filtered collection
    Prune { valid_ids: BTreeSet<String> },
    Clear,
}

/// Pure reducer: previous selection + action → next selection
pub fn reduce(prev: &BTreeSet<String>, action: SelectionAction) -> BTreeSet<String> {
    match action {
        SelectionAction::Row { id, checked } => {
            let mut next = prev.clone();
            if checked {
                next.insert(id);
            } else {
                next.remove(&id);
            }
            next
        }
        SelectionAction::Page { page_ids, checked } => {
            let mut next = prev.clone();
            if checked {
                next.extend(page_ids);
            } else {
                for id in &page_ids {
                    next.remove(id);
                }
            }
            next
        }
        SelectionAction::Prune { valid_ids } => prev.intersection(&valid_ids).cloned().collect(),
        SelectionAction::Clear => BTreeSet::new(),
    }
}

/// Tri-state of the header checkbox for `page_ids`
pub fn select_all_state<S: AsRef<str>>(
    selected: &BTreeSet<String>,
    page_ids: &[S],
) -> SelectAllState {
    if page_ids.is_empty() {
        return SelectAllState::Unchecked;
    }
    let checked = page_ids
        .iter()
        .filter(|id| selected.contains(AsRef::<str>::as_ref(*id)))
        .count();
    if checked == 0 {
        SelectAllState::Unchecked
    } else if checked == page_ids.len() {
        SelectAllState::Checked
    } else {
        SelectAllState::Indeterminate
    }
}

/// Ordered set of selected entry ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn dispatch(&mut self, action: SelectionAction) {
        self.selected = reduce(&self.selected, action);
    }

    pub fn select_row(&mut self, id: impl Into<String>, checked: bool) {
        self.dispatch(SelectionAction::Row {
            id: id.into(),
            checked,
        });
    }

    pub fn select_all_on_page(&mut self, checked: bool, page_ids: Vec<String>) {
        self.dispatch(SelectionAction::Page { page_ids, checked });
    }

    pub fn prune<I, S>(&mut self, valid_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(SelectionAction::Prune {
            valid_ids: valid_ids.into_iter().map(Into::into).collect(),
        });
    }

    pub fn clear(&mut self) {
        self.dispatch(SelectionAction::Clear);
    }

    pub fn state_for<S: AsRef<str>>(&self, page_ids: &[S]) -> SelectAllState {
        select_all_state(&self.selected, page_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<String> {
        (1..=5).map(|i| i.to_string()).collect()
    }

    #[test]
    fn tri_state_over_page() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.state_for(&page()), SelectAllState::Unchecked);

        tracker.select_all_on_page(true, page());
        assert_eq!(tracker.state_for(&page()), SelectAllState::Checked);

        tracker.select_row("3", false);
        assert_eq!(tracker.state_for(&page()), SelectAllState::Indeterminate);

        tracker.select_all_on_page(false, page());
        assert_eq!(tracker.state_for(&page()), SelectAllState::Unchecked);
        assert!(tracker.is_empty());
    }

    #[test]
    fn empty_page_is_unchecked() {
        let mut tracker = SelectionTracker::new();
        tracker.select_row("1", true);
        assert_eq!(tracker.state_for::<String>(&[]), SelectAllState::Unchecked);
    }

    #[test]
    fn page_deselect_keeps_other_pages() {
        let mut tracker = SelectionTracker::new();
        tracker.select_row("99", true);
        tracker.select_all_on_page(true, page());
        tracker.select_all_on_page(false, page());
        assert_eq!(tracker.selected_ids(), vec!["99".to_string()]);
    }

    #[test]
    fn prune_keeps_only_valid_ids() {
        let mut tracker = SelectionTracker::new();
        tracker.select_all_on_page(true, page());
        tracker.prune(["2", "4", "7"]);
        assert_eq!(tracker.selected_ids(), vec!["2".to_string(), "4".to_string()]);

        // idempotent
        tracker.prune(["2", "4", "7"]);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn prune_and_clear_commute() {
        let start: BTreeSet<String> = page().into_iter().collect();
        let valid: BTreeSet<String> = ["1".to_string()].into_iter().collect();

        let a = reduce(
            &reduce(&start, SelectionAction::Prune { valid_ids: valid.clone() }),
            SelectionAction::Clear,
        );
        let b = reduce(
            &reduce(&start, SelectionAction::Clear),
            SelectionAction::Prune { valid_ids: valid },
        );
        assert_eq!(a, b);
        assert!(a.is_empty());
    }

    #[test]
    fn sequential_row_updates_are_not_lost() {
        let mut tracker = SelectionTracker::new();
        for id in ["a", "b", "c"] {
            tracker.select_row(id, true);
        }
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn select_all_state_serialization() {
        assert_eq!(serde_json::to_string(&SelectAllState::Unchecked).unwrap(), "false");
        assert_eq!(serde_json::to_string(&SelectAllState::Checked).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&SelectAllState::Indeterminate).unwrap(),
            "\"indeterminate\""
        );
    }
}
