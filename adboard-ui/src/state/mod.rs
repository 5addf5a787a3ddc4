//! Application state shared through the Leptos context

pub mod session;

pub use session::{provide_dashboard_state, DashboardState};
