//! Search Terms Table
//!
//! Rows are ordered lists of display cells. Sorting moves rows around but
//! never changes a row's [`RowId`], so selection state follows each row.
//!
//! - **column**: `data-column` names, cell positions and value kinds
//! - **value**: Lenient typed extraction of sort keys
//! - **sort**: Per-column direction toggling and stable reordering
//! - **csv_import**: Load a table from a CSV export
//! - **sample**: Built-in demo data

pub mod column;
pub mod csv_import;
pub mod sample;
pub mod sort;
pub mod value;

pub use column::{Column, ValueKind};
pub use sort::{SortDirection, SortEngine, SortIndicator};
pub use value::{cell_value, CellValue};

use std::cmp::Ordering;
use std::fmt;

/// Stable identity of a row, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A header cell. Sortable when it carries a `data-column` name.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub label: String,
    pub column: Option<String>,
    pub indicator: Option<SortIndicator>,
}

impl Header {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: None,
            indicator: None,
        }
    }

    pub fn sortable(label: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: Some(column.into()),
            indicator: None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.column.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    cells: Vec<String>,
    summary: bool,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            id: RowId(0),
            cells,
            summary: false,
        }
    }

    /// A totals row: never sorted and never selectable
    pub fn summary(cells: Vec<String>) -> Self {
        Self {
            summary: true,
            ..Self::new(cells)
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn is_summary(&self) -> bool {
        self.summary
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    id: String,
    headers: Vec<Header>,
    rows: Vec<Row>,
}

impl Table {
    pub fn builder(id: impl Into<String>) -> TableBuilder {
        TableBuilder {
            id: id.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Rows in display order
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Rows that carry a selection checkbox
    pub fn selectable_ids(&self) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|r| !r.summary)
            .map(|r| r.id)
            .collect()
    }

    pub(crate) fn headers_mut(&mut self) -> &mut [Header] {
        &mut self.headers
    }

    /// Stable-sort the non-summary rows into the slots they occupy now.
    /// Summary rows keep their exact index.
    pub(crate) fn reorder_rows<K, F, C>(&mut self, key: F, mut compare: C)
    where
        F: Fn(&Row) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let total = self.rows.len();
        let mut fixed = Vec::new();
        let mut movable = Vec::with_capacity(total);

        for (index, row) in std::mem::take(&mut self.rows).into_iter().enumerate() {
            if row.summary {
                fixed.push((index, row));
            } else {
                movable.push((key(&row), row));
            }
        }

        movable.sort_by(|a, b| compare(&a.0, &b.0));

        let mut movable = movable.into_iter().map(|(_, row)| row);
        let mut fixed = fixed.into_iter().peekable();
        let mut rows = Vec::with_capacity(total);

        for index in 0..total {
            let row = match fixed.peek() {
                Some((slot, _)) if *slot == index => fixed.next().map(|(_, row)| row),
                _ => movable.next(),
            };
            rows.extend(row);
        }

        self.rows = rows;
    }
}

pub struct TableBuilder {
    id: String,
    headers: Vec<Header>,
    rows: Vec<Row>,
}

impl TableBuilder {
    pub fn header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = Header>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Assigns row ids in insertion order
    pub fn build(self) -> Table {
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| Row {
                id: RowId(index),
                ..row
            })
            .collect();

        Table {
            id: self.id,
            headers: self.headers,
            rows,
        }
    }
}

/// Cells built from string slices, for fixtures and samples
pub fn cells<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::builder("t")
            .row(Row::new(cells(["", "c"])))
            .row(Row::summary(cells(["", "Total"])))
            .row(Row::new(cells(["", "a"])))
            .row(Row::new(cells(["", "b"])))
            .build()
    }

    fn labels(table: &Table) -> Vec<&str> {
        table.rows().iter().filter_map(|r| r.cell(1)).collect()
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let table = table();
        assert_eq!(table.row_ids(), vec![RowId(0), RowId(1), RowId(2), RowId(3)]);
        assert_eq!(table.selectable_ids(), vec![RowId(0), RowId(2), RowId(3)]);
    }

    #[test]
    fn test_reorder_keeps_summary_slot() {
        let mut table = table();
        table.reorder_rows(|r| r.cell(1).unwrap_or("").to_string(), |a, b| a.cmp(b));
        assert_eq!(labels(&table), vec!["a", "Total", "b", "c"]);
        assert_eq!(table.rows()[1].id(), RowId(1));
    }

    #[test]
    fn test_reorder_preserves_identity() {
        let mut table = table();
        table.reorder_rows(|r| r.cell(1).unwrap_or("").to_string(), |a, b| b.cmp(a));
        let row = table.row(RowId(2)).unwrap();
        assert_eq!(row.cell(1), Some("a"));
        assert_eq!(labels(&table), vec!["c", "Total", "b", "a"]);
    }
}
