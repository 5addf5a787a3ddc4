//! Performance Chart
//!
//! - **config**: Chart.js-shaped configuration model
//! - **layout**: Viewport breakpoints and theme palettes
//! - **backend**: The drawing seam (`update`/`resize`)
//! - **adapter**: Keeps configuration and backend in step with theme and viewport

pub mod adapter;
pub mod backend;
pub mod config;
pub mod layout;

pub use adapter::ChartAdapter;
pub use backend::{ChartBackend, HeadlessBackend, UpdateMode};
pub use config::{Axis, ChartConfig, Dataset, TickFormat, COST_AXIS, INTERACTIONS_AXIS};
pub use layout::{Breakpoints, ResponsiveLayout, ThemePalette};
