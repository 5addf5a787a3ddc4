//! Demo search terms report

use super::{cells, Column, Header, Row, Table};

/// Element id of the results table
pub const TABLE_ID: &str = "searchTermsTable";

/// The eleven header cells of the report. Cell 0 is the select-all column.
pub fn search_terms_headers() -> Vec<Header> {
    let label = |index: usize| match index {
        0 => "",
        1 => "Search term",
        2 => "Match type",
        3 => "Added/Excluded",
        4 => "Campaign",
        5 => "Ad group",
        6 => "Impr.",
        7 => "Interactions",
        8 => "Interaction rate",
        9 => "Avg. cost",
        _ => "Cost",
    };

    (0..=10)
        .map(|index| match Column::from_cell_index(index) {
            Some(column) => Header::sortable(label(index), column.name()),
            None => Header::plain(label(index)),
        })
        .collect()
}

pub fn search_terms_table() -> Table {
    let rows = [
        ["running shoes", "Phrase", "None", "Spring Sale", "Footwear", "12,480", "642", "5.14%", "$1.38", "$885.96"],
        ["trail running shoes women", "Exact", "Added", "Spring Sale", "Trail", "3,215", "298", "9.27%", "$1.92", "$572.16"],
        ["best marathon shoes", "Broad", "None", "Brand - Performance", "Marathon", "8,903", "187", "2.10%", "$2.45", "$458.15"],
        ["cheap sneakers", "Broad", "Excluded", "Spring Sale", "Footwear", "21,337", "402", "1.88%", "$0.74", "$297.48"],
        ["Nike pegasus 40", "Exact", "None", "Brand - Performance", "Road", "5,612", "511", "9.11%", "$1.61", "$822.71"],
        ["waterproof hiking boots", "Phrase", "None", "Outdoor", "Boots", "1,044", "96", "9.20%", "$3.08", "$295.68"],
        ["running shoe store near me", "Broad", "Added", "Local", "Stores", "967", "121", "12.51%", "$2.17", "$262.57"],
        ["kids running shoes", "Phrase", "None", "Spring Sale", "Kids", "4,128", "233", "5.64%", "$1.05", "$244.65"],
    ];

    let builder = Table::builder(TABLE_ID).headers(search_terms_headers());
    let builder = rows.into_iter().fold(builder, |builder, row| {
        let mut values = vec![String::new()];
        values.extend(row.iter().map(|v| v.to_string()));
        builder.row(Row::new(values))
    });

    builder
        .row(Row::summary(cells([
            "",
            "Total: Search terms",
            "",
            "",
            "",
            "",
            "57,686",
            "2,490",
            "4.32%",
            "$1.54",
            "$3,839.36",
        ])))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::value::{cell_value, CellValue};

    #[test]
    fn test_rows_have_every_cell() {
        let table = search_terms_table();
        assert_eq!(table.headers().len(), 11);
        assert!(table.rows().iter().all(|r| r.cells().len() == 11));
        assert_eq!(table.selectable_ids().len(), 8);
    }

    #[test]
    fn test_summary_totals_match_rows() {
        let table = search_terms_table();
        let (summary, rows): (Vec<_>, Vec<_>) =
            table.rows().iter().partition(|r| r.is_summary());

        let total: i64 = rows
            .iter()
            .map(|r| match cell_value(r, "impressions") {
                CellValue::Integer(v) => v,
                _ => 0,
            })
            .sum();
        assert_eq!(cell_value(summary[0], "impressions"), CellValue::Integer(total));
    }

    #[test]
    fn test_sortable_headers() {
        let sortable: Vec<_> = search_terms_headers()
            .into_iter()
            .filter_map(|h| h.column)
            .collect();
        assert_eq!(
            sortable,
            vec!["search-term", "match-type", "impressions", "interactions", "interaction-rate", "avg-cost", "cost"]
        );
    }
}
