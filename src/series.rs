//! Sample Series Generator
//!
//! Placeholder performance data for the chart: daily interaction counts and
//! average cost per interaction over a fixed 30-day window. Values follow a
//! slow sine wave with uniform jitter layered on top.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of sample performance data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day, e.g. `Aug 31`
    pub label: String,
    pub interactions: u32,
    /// Average cost per interaction, rounded to cents
    pub average_cost: f64,
}

#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    start: NaiveDate,
    days: u32,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            start: default_start(),
            days: 30,
        }
    }
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 31).unwrap_or_default()
}

impl SeriesGenerator {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Generate with thread-local randomness
    #[cfg(feature = "native")]
    pub fn generate(&self) -> Vec<SeriesPoint> {
        self.generate_with(rand::random::<f64>)
    }

    /// Generate drawing jitter from `jitter`, which must yield values in `[0, 1)`.
    /// It is called twice per day: once for interactions, once for cost.
    pub fn generate_with(&self, mut jitter: impl FnMut() -> f64) -> Vec<SeriesPoint> {
        (0..self.days)
            .map(|i| {
                let wave = (i as f64 / 5.0).sin();
                let interactions = (200.0 + jitter() * 100.0 + wave * 50.0).floor().max(0.0);
                let average_cost = (2.5 + jitter() * 2.0 + wave * 1.5).max(0.0);

                SeriesPoint {
                    label: day_label(self.start, i),
                    interactions: interactions as u32,
                    average_cost: (average_cost * 100.0).round() / 100.0,
                }
            })
            .collect()
    }
}

/// Short month and day, the way an en-US locale renders it
pub fn day_label(start: NaiveDate, offset: u32) -> String {
    start
        .checked_add_days(Days::new(offset as u64))
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_cross_month_boundary() {
        let points = SeriesGenerator::default().generate_with(|| 0.5);
        assert_eq!(points.len(), 30);
        assert_eq!(points[0].label, "Aug 31");
        assert_eq!(points[1].label, "Sep 1");
        assert_eq!(points[29].label, "Sep 29");
    }

    #[test]
    fn test_values_without_jitter() {
        let points = SeriesGenerator::default().generate_with(|| 0.0);
        // sin(0) = 0 on the first day
        assert_eq!(points[0].interactions, 200);
        assert_eq!(points[0].average_cost, 2.5);
    }

    #[test]
    fn test_values_stay_in_axis_ranges() {
        for jitter in [0.0, 0.5, 0.999] {
            for point in SeriesGenerator::default().generate_with(|| jitter) {
                assert!(point.interactions <= 500);
                assert!(point.average_cost >= 0.0 && point.average_cost <= 10.0);
            }
        }
    }

    #[test]
    fn test_cost_is_rounded_to_cents() {
        let points = SeriesGenerator::default().generate_with(|| 0.123456);
        for point in points {
            let cents = point.average_cost * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_random_generation_shape() {
        let points = SeriesGenerator::default().generate();
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(|p| p.interactions >= 150));
    }
}
