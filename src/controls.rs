//! Placeholder page controls
//!
//! The cost filter chip and the date range arrows are rendered and reachable,
//! but there is no query layer behind them.

use crate::series::SeriesPoint;

/// Filter chip shown above the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostFilter {
    label: String,
    visible: bool,
}

impl Default for CostFilter {
    fn default() -> Self {
        Self::new("Cost > $1.00")
    }
}

impl CostFilter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the chip. Table rows are not affected.
    pub fn remove(&mut self) {
        self.visible = false;
        tracing::debug!(filter = %self.label, "Cost filter removed");
    }
}

/// Previous/next arrows around the reporting window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNavigator {
    range_label: String,
}

impl DateNavigator {
    pub fn new(range_label: impl Into<String>) -> Self {
        Self {
            range_label: range_label.into(),
        }
    }

    /// Label spanning the first and last day of `series`
    pub fn for_series(series: &[SeriesPoint]) -> Self {
        match (series.first(), series.last()) {
            (Some(first), Some(last)) => Self::new(format!("{} - {}", first.label, last.label)),
            _ => Self::new(""),
        }
    }

    pub fn range_label(&self) -> &str {
        &self.range_label
    }

    pub fn previous(&self) {
        tracing::debug!("Previous date range");
    }

    pub fn next(&self) {
        tracing::debug!("Next date range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesGenerator;

    #[test]
    fn test_remove_hides_filter() {
        let mut filter = CostFilter::default();
        assert!(filter.is_visible());
        filter.remove();
        assert!(!filter.is_visible());
        filter.remove();
        assert!(!filter.is_visible());
    }

    #[test]
    fn test_range_label() {
        let series = SeriesGenerator::default().generate_with(|| 0.5);
        let nav = DateNavigator::for_series(&series);
        assert_eq!(nav.range_label(), "Aug 31 - Sep 29");

        nav.previous();
        nav.next();
        assert_eq!(nav.range_label(), "Aug 31 - Sep 29");
        assert_eq!(DateNavigator::for_series(&[]).range_label(), "");
    }
}
