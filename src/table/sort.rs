//! Table Sort Engine
//!
//! Clicking a sortable header flips that column's direction (first click is
//! ascending), moves the arrow indicator to that header and reorders the
//! body. Directions are remembered per column for the whole session.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::value::cell_value;
use super::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> SortIndicator {
        match self {
            SortDirection::Ascending => SortIndicator::Up,
            SortDirection::Descending => SortIndicator::Down,
        }
    }
}

/// Arrow shown next to the active header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Up,
    Down,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Up => "↑",
            SortIndicator::Down => "↓",
        }
    }
}

impl fmt::Display for SortIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    directions: HashMap<String, SortDirection>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last direction applied to `column`, if it was ever sorted
    pub fn direction(&self, column: &str) -> Option<SortDirection> {
        self.directions.get(column).copied()
    }

    /// Toggle `column`'s direction, update header indicators and reorder
    /// `table`. Returns the direction applied.
    pub fn sort_by(&mut self, table: &mut Table, column: &str) -> SortDirection {
        let direction = match self.direction(column) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.directions.insert(column.to_string(), direction);

        for header in table.headers_mut() {
            header.indicator = match header.column.as_deref() {
                Some(name) if name == column => Some(direction.indicator()),
                _ => None,
            };
        }

        table.reorder_rows(
            |row| cell_value(row, column),
            |a, b| direction.apply(a.cmp(b)),
        );

        tracing::debug!(table = table.id(), column, ?direction, "Sorted table");
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sample::search_terms_table;
    use crate::table::{cells, Column, Header, Row, RowId};

    fn column_cells(table: &Table, column: Column) -> Vec<String> {
        table
            .rows()
            .iter()
            .filter(|r| !r.is_summary())
            .map(|r| r.cell(column.cell_index()).unwrap_or("").to_string())
            .collect()
    }

    fn summary_positions(table: &Table) -> Vec<(usize, RowId)> {
        table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_summary())
            .map(|(i, r)| (i, r.id()))
            .collect()
    }

    #[test]
    fn test_first_click_is_ascending() {
        let mut table = search_terms_table();
        let mut engine = SortEngine::new();

        assert_eq!(engine.direction("cost"), None);
        assert_eq!(engine.sort_by(&mut table, "cost"), SortDirection::Ascending);
        assert_eq!(engine.sort_by(&mut table, "cost"), SortDirection::Descending);
        assert_eq!(engine.sort_by(&mut table, "cost"), SortDirection::Ascending);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut table = search_terms_table();
        let mut engine = SortEngine::new();

        engine.sort_by(&mut table, "cost");
        engine.sort_by(&mut table, "impressions");
        assert_eq!(engine.sort_by(&mut table, "cost"), SortDirection::Descending);
        assert_eq!(engine.direction("impressions"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_numeric_sort_ignores_separators() {
        let mut table = search_terms_table();
        let mut engine = SortEngine::new();

        engine.sort_by(&mut table, "impressions");
        let values: Vec<i64> = column_cells(&table, Column::Impressions)
            .iter()
            .map(|v| v.replace(',', "").parse().unwrap())
            .collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_second_sort_reverses_first() {
        // Every column except match type has distinct keys in the sample.
        for column in Column::ALL.into_iter().filter(|c| *c != Column::MatchType) {
            let mut table = search_terms_table();
            let mut engine = SortEngine::new();

            engine.sort_by(&mut table, column.name());
            let ascending: Vec<RowId> = table.selectable_ids();
            engine.sort_by(&mut table, column.name());
            let mut descending = table.selectable_ids();
            descending.reverse();

            assert_eq!(ascending, descending, "column {}", column);
        }
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut table = Table::builder("t")
            .header(Header::sortable("Search term", "search-term"))
            .row(Row::new(cells(["", "banana"])))
            .row(Row::new(cells(["", "Apple"])))
            .row(Row::new(cells(["", "cherry"])))
            .build();

        SortEngine::new().sort_by(&mut table, "search-term");
        let order: Vec<_> = table.rows().iter().filter_map(|r| r.cell(1)).collect();
        assert_eq!(order, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_summary_rows_never_move() {
        let mut table = search_terms_table();
        let before = summary_positions(&table);
        assert!(!before.is_empty());

        let mut engine = SortEngine::new();
        for column in ["cost", "search-term", "interaction-rate", "cost", "match-type"] {
            engine.sort_by(&mut table, column);
            assert_eq!(summary_positions(&table), before);
        }
    }

    #[test]
    fn test_indicator_moves_to_clicked_header() {
        let mut table = search_terms_table();
        let mut engine = SortEngine::new();

        engine.sort_by(&mut table, "cost");
        engine.sort_by(&mut table, "cost");
        engine.sort_by(&mut table, "impressions");

        let indicators: Vec<_> = table
            .headers()
            .iter()
            .filter_map(|h| h.indicator.map(|i| (h.column.clone().unwrap_or_default(), i)))
            .collect();
        assert_eq!(indicators, vec![("impressions".to_string(), SortIndicator::Up)]);

        engine.sort_by(&mut table, "impressions");
        let header = table
            .headers()
            .iter()
            .find(|h| h.column.as_deref() == Some("impressions"))
            .unwrap();
        assert_eq!(header.indicator.map(|i| i.glyph()), Some("↓"));
    }

    #[test]
    fn test_equal_keys_keep_relative_order() {
        let mut table = Table::builder("t")
            .row(Row::new(cells(["", "b", "Exact"])))
            .row(Row::new(cells(["", "a", "Broad"])))
            .row(Row::new(cells(["", "c", "Exact"])))
            .row(Row::new(cells(["", "d", "Broad"])))
            .build();

        SortEngine::new().sort_by(&mut table, "match-type");
        let order: Vec<_> = table.rows().iter().filter_map(|r| r.cell(1)).collect();
        assert_eq!(order, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        let mut table = search_terms_table();
        let before = table.row_ids();
        SortEngine::new().sort_by(&mut table, "campaign");
        assert_eq!(table.row_ids(), before);
    }
}
