//! Logical columns of the search terms table

use std::fmt;

/// How a column's display text is interpreted for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Case-insensitive text
    Text,
    /// Whole number with thousands separators, e.g. `1,234`
    Count,
    /// Decimal with a trailing percent sign, e.g. `4.52%`
    Percent,
    /// Decimal with a leading `$` and thousands separators, e.g. `$1,234.50`
    Currency,
}

/// A sortable column, addressed by its `data-column` name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SearchTerm,
    MatchType,
    Impressions,
    Interactions,
    InteractionRate,
    AvgCost,
    Cost,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::SearchTerm,
        Column::MatchType,
        Column::Impressions,
        Column::Interactions,
        Column::InteractionRate,
        Column::AvgCost,
        Column::Cost,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Value of the header's `data-column` attribute
    pub fn name(&self) -> &'static str {
        match self {
            Column::SearchTerm => "search-term",
            Column::MatchType => "match-type",
            Column::Impressions => "impressions",
            Column::Interactions => "interactions",
            Column::InteractionRate => "interaction-rate",
            Column::AvgCost => "avg-cost",
            Column::Cost => "cost",
        }
    }

    /// Position of the column's cell within a row. Cell 0 holds the checkbox.
    pub fn cell_index(&self) -> usize {
        match self {
            Column::SearchTerm => 1,
            Column::MatchType => 2,
            Column::Impressions => 6,
            Column::Interactions => 7,
            Column::InteractionRate => 8,
            Column::AvgCost => 9,
            Column::Cost => 10,
        }
    }

    pub fn from_cell_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.cell_index() == index)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Column::SearchTerm | Column::MatchType => ValueKind::Text,
            Column::Impressions | Column::Interactions => ValueKind::Count,
            Column::InteractionRate => ValueKind::Percent,
            Column::AvgCost | Column::Cost => ValueKind::Currency,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
