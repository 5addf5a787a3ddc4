//! Load a search terms report from CSV
//!
//! The CSV holds the report's data columns in display order, starting with
//! the search term. The checkbox column is added on import. Rows whose
//! search term starts with `Total` become summary rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::sample::TABLE_ID;
use super::{Column, Header, Row, Table};
use crate::error::DashboardResult;

const SUMMARY_PREFIX: &str = "Total";

pub fn read_table<R: Read>(reader: R) -> DashboardResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut builder = Table::builder(TABLE_ID).header(Header::plain(""));
    for (offset, label) in csv_reader.headers()?.iter().enumerate() {
        let header = match Column::from_cell_index(offset + 1) {
            Some(column) => Header::sortable(label, column.name()),
            None => Header::plain(label),
        };
        builder = builder.header(header);
    }

    let mut count = 0;
    for record in csv_reader.records() {
        let record = record?;
        let mut cells = vec![String::new()];
        cells.extend(record.iter().map(str::to_string));

        let summary = record
            .get(0)
            .map(|term| term.starts_with(SUMMARY_PREFIX))
            .unwrap_or(false);

        builder = builder.row(if summary {
            Row::summary(cells)
        } else {
            Row::new(cells)
        });
        count += 1;
    }

    tracing::debug!(rows = count, "Imported table from CSV");
    Ok(builder.build())
}

pub fn load_table(path: &Path) -> DashboardResult<Table> {
    let file = File::open(path)?;
    read_table(file)
}
