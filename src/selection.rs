//! Selection Manager
//!
//! Tracks the row checkboxes and derives everything else from them: the
//! selected count, the select-all control's tri-state and the action bar.
//! Derived state is recomputed after every change, never edited directly.

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::table::RowId;

/// Visual state of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl SelectAllState {
    pub fn is_checked(&self) -> bool {
        matches!(self, SelectAllState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, SelectAllState::Indeterminate)
    }
}

/// Contextual bar shown while rows are selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionBar {
    pub visible: bool,
    pub label: String,
}

/// Bulk actions offered by the action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordAction {
    AddKeyword,
    AddNegativeKeyword,
}

impl KeywordAction {
    /// Confirmation shown for `count` selected rows
    pub fn message(&self, count: usize) -> String {
        match self {
            KeywordAction::AddKeyword => {
                format!("Adding {} search term(s) as keyword(s)", count)
            }
            KeywordAction::AddNegativeKeyword => {
                format!("Adding {} search term(s) as negative keyword(s)", count)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionManager {
    rows: Vec<(RowId, bool)>,
    select_all: SelectAllState,
    action_bar: ActionBar,
}

impl SelectionManager {
    /// Start with every checkbox in `rows` unchecked
    pub fn new(rows: impl IntoIterator<Item = RowId>) -> Self {
        let mut manager = Self {
            rows: rows.into_iter().map(|id| (id, false)).collect(),
            select_all: SelectAllState::Unchecked,
            action_bar: ActionBar {
                visible: false,
                label: String::new(),
            },
        };
        manager.update_selection();
        manager
    }

    pub fn count(&self) -> usize {
        self.rows.iter().filter(|(_, checked)| *checked).count()
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn is_checked(&self, id: RowId) -> bool {
        self.rows
            .iter()
            .any(|(rid, checked)| *rid == id && *checked)
    }

    pub fn selected(&self) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn select_all_state(&self) -> SelectAllState {
        self.select_all
    }

    pub fn action_bar(&self) -> &ActionBar {
        &self.action_bar
    }

    /// Recompute the label, the action bar and the select-all state
    pub fn update_selection(&mut self) {
        let count = self.count();
        let total = self.total();

        self.action_bar.label = format!("{} selected", count);
        self.action_bar.visible = count > 0;
        self.select_all = if total > 0 && count == total {
            SelectAllState::Checked
        } else if count > 0 {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        };

        tracing::debug!(count, total, state = ?self.select_all, "Selection updated");
    }

    /// A single row checkbox changed
    pub fn set_row(&mut self, id: RowId, checked: bool) -> DashboardResult<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|(rid, _)| *rid == id)
            .ok_or(DashboardError::UnknownRow(id.0))?;
        row.1 = checked;
        self.update_selection();
        Ok(())
    }

    /// The select-all control changed to `checked`
    pub fn set_select_all(&mut self, checked: bool) {
        for (_, row) in self.rows.iter_mut() {
            *row = checked;
        }
        self.update_selection();
    }

    /// Close the action bar, clearing every checkbox
    pub fn close(&mut self) {
        self.set_select_all(false);
    }

    /// Confirmation for a bulk action. Nothing is mutated.
    pub fn confirm(&self, action: KeywordAction) -> String {
        action.message(self.count())
    }

    pub fn add_as_keyword(&self) -> String {
        self.confirm(KeywordAction::AddKeyword)
    }

    pub fn add_as_negative_keyword(&self) -> String {
        self.confirm(KeywordAction::AddNegativeKeyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(n: usize) -> SelectionManager {
        SelectionManager::new((0..n).map(RowId))
    }

    #[test]
    fn test_initial_state() {
        let m = manager(4);
        assert_eq!(m.count(), 0);
        assert_eq!(m.action_bar().label, "0 selected");
        assert!(!m.action_bar().visible);
        assert_eq!(m.select_all_state(), SelectAllState::Unchecked);
    }

    #[test]
    fn test_subset_is_indeterminate() {
        let mut m = manager(4);
        m.set_row(RowId(1), true).unwrap();
        m.set_row(RowId(3), true).unwrap();

        assert_eq!(m.count(), 2);
        assert_eq!(m.action_bar().label, "2 selected");
        assert!(m.action_bar().visible);
        assert!(m.select_all_state().is_indeterminate());
        assert!(!m.select_all_state().is_checked());
        assert_eq!(m.selected(), vec![RowId(1), RowId(3)]);
    }

    #[test]
    fn test_every_row_is_checked() {
        let mut m = manager(3);
        for i in 0..3 {
            m.set_row(RowId(i), true).unwrap();
        }
        assert_eq!(m.select_all_state(), SelectAllState::Checked);
        assert!(!m.select_all_state().is_indeterminate());
    }

    #[test]
    fn test_select_all_then_none() {
        let mut m = manager(5);
        m.set_select_all(true);
        assert_eq!(m.count(), 5);
        assert_eq!(m.select_all_state(), SelectAllState::Checked);

        m.set_select_all(false);
        assert_eq!(m.count(), 0);
        assert_eq!(m.select_all_state(), SelectAllState::Unchecked);
        assert!(!m.action_bar().visible);
    }

    #[test]
    fn test_close_clears_selection() {
        let mut m = manager(3);
        m.set_row(RowId(0), true).unwrap();
        m.close();
        assert_eq!(m.count(), 0);
        assert!(!m.is_checked(RowId(0)));
        assert_eq!(m.select_all_state(), SelectAllState::Unchecked);
        assert!(!m.action_bar().visible);
    }

    #[test]
    fn test_unchecking_last_row() {
        let mut m = manager(2);
        m.set_row(RowId(0), true).unwrap();
        m.set_row(RowId(0), false).unwrap();
        assert!(!m.action_bar().visible);
        assert_eq!(m.action_bar().label, "0 selected");
    }

    #[test]
    fn test_unknown_row() {
        let mut m = manager(2);
        let err = m.set_row(RowId(9), true).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownRow(9)));
    }

    #[test]
    fn test_empty_table_is_unchecked() {
        let m = manager(0);
        assert_eq!(m.select_all_state(), SelectAllState::Unchecked);
    }

    #[test]
    fn test_keyword_messages() {
        let mut m = manager(4);
        m.set_row(RowId(2), true).unwrap();
        m.set_row(RowId(0), true).unwrap();
        assert_eq!(m.add_as_keyword(), "Adding 2 search term(s) as keyword(s)");
        assert_eq!(
            m.add_as_negative_keyword(),
            "Adding 2 search term(s) as negative keyword(s)"
        );
        assert_eq!(m.count(), 2);
    }
}
