//! # Adboard
//!
//! Search terms performance dashboard: a persisted light/dark theme, a
//! dual-axis interactions/cost chart, a sortable results table and row
//! selection with a contextual action bar.
//!
//! The crate holds all page logic as plain, single-threaded state. The
//! `adboard-ui` frontend binds it to the browser; the `adboard` binary drives
//! it from the command line.
//!
//! ## Modules
//!
//! - [`preferences`]: Key-value surface the theme is persisted to
//! - [`theme`]: Theme controller with explicit change subscriptions
//! - [`series`]: Sample 30-day performance series
//! - [`chart`]: Chart configuration, responsive layout and backend seam
//! - [`timer`]: Cancellable timers and the resize debouncer
//! - [`table`]: Table model, value extraction and the sort engine
//! - [`selection`]: Row checkboxes, select-all and action bar state
//! - [`dashboard`]: Per-session controller tying it all together
//!
//! ## Quick Start
//!
//! ```rust
//! use adboard::chart::HeadlessBackend;
//! use adboard::dashboard::{Dashboard, DashboardOptions, DashboardParts};
//! use adboard::preferences::MemoryStore;
//! use adboard::series::SeriesGenerator;
//! use adboard::table::sample::search_terms_table;
//! use adboard::timer::ManualScheduler;
//!
//! let parts = DashboardParts {
//!     store: MemoryStore::new(),
//!     backend: HeadlessBackend::new(),
//!     scheduler: ManualScheduler::new(),
//!     table: search_terms_table(),
//!     series: SeriesGenerator::default().generate_with(|| 0.5),
//! };
//! let mut dashboard = Dashboard::new(parts, 1280.0, DashboardOptions::default()).unwrap();
//!
//! dashboard.toggle_theme();
//! dashboard.sort_by("cost");
//! dashboard.set_select_all(true);
//! println!("{}", dashboard.add_as_keyword());
//! ```

pub mod chart;
#[cfg(feature = "native")]
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod error;
pub mod preferences;
pub mod selection;
pub mod series;
pub mod table;
pub mod theme;
pub mod timer;

pub use chart::{ChartAdapter, ChartBackend, ChartConfig, HeadlessBackend, UpdateMode};
pub use dashboard::{Dashboard, DashboardOptions, DashboardParts};
pub use error::{DashboardError, DashboardResult};
pub use preferences::{MemoryStore, PreferenceStore, THEME_KEY};
pub use selection::{ActionBar, KeywordAction, SelectAllState, SelectionManager};
pub use series::{SeriesGenerator, SeriesPoint};
pub use table::{Column, RowId, SortDirection, SortEngine, Table};
pub use theme::{Theme, ThemeController};
pub use timer::{Debouncer, ManualScheduler, Scheduler, TimerHandle};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use preferences::FileStore;
#[cfg(feature = "native")]
pub use timer::TokioScheduler;
