//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod action_bar;
pub mod chart;
pub mod filters;
pub mod results_table;
pub mod theme_toggle;
pub mod toast;

pub use action_bar::ActionBar;
pub use chart::PerformanceChart;
pub use filters::{CostFilterChip, DateNavigation};
pub use results_table::ResultsTable;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
