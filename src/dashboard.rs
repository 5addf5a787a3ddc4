//! Dashboard Session
//!
//! One controller per page session. It owns every piece of page state and
//! exposes one method per user interaction, so event handlers only need a
//! reference to the session.
//!
//! ```text
//! toggle_theme ─► ThemeController ─► subscribers ─► ChartAdapter::apply_theme
//! viewport_resized ─► Debouncer (250 ms) ─► ChartAdapter::apply_viewport
//! sort_by ─► SortEngine ─► Table
//! set_row_checked / set_select_all / close_action_bar ─► SelectionManager
//! ```

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::chart::{Breakpoints, ChartAdapter, ChartBackend};
use crate::controls::{CostFilter, DateNavigator};
use crate::error::DashboardResult;
use crate::preferences::{PreferenceStore, THEME_KEY};
use crate::selection::SelectionManager;
use crate::series::SeriesPoint;
use crate::table::{RowId, SortDirection, SortEngine, Table};
use crate::theme::{SubscriptionId, Theme, ThemeController};
use crate::timer::{Debouncer, Scheduler};

/// Collaborators handed to [`Dashboard::new`]
pub struct DashboardParts<S, B, T> {
    pub store: S,
    pub backend: B,
    pub scheduler: T,
    pub table: Table,
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub preference_key: String,
    pub debounce: Duration,
    pub breakpoints: Breakpoints,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            preference_key: THEME_KEY.to_string(),
            debounce: Duration::from_millis(250),
            breakpoints: Breakpoints::default(),
        }
    }
}

#[cfg(feature = "native")]
impl From<&crate::config::Config> for DashboardOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            preference_key: config.preferences.key.clone(),
            debounce: config.chart.debounce(),
            breakpoints: config.chart.breakpoints.clone(),
        }
    }
}

pub struct Dashboard<S, B, T>
where
    S: PreferenceStore,
    B: ChartBackend + 'static,
    T: Scheduler,
{
    theme: ThemeController<S>,
    chart: Rc<RefCell<ChartAdapter<B>>>,
    resize: Debouncer<T>,
    table: Table,
    sorter: SortEngine,
    selection: SelectionManager,
    cost_filter: CostFilter,
    dates: DateNavigator,
}

impl<S, B, T> Dashboard<S, B, T>
where
    S: PreferenceStore,
    B: ChartBackend + 'static,
    T: Scheduler,
{
    /// Load the theme, build and style the chart, and compute the initial
    /// selection state
    pub fn new(
        parts: DashboardParts<S, B, T>,
        viewport_width: f64,
        options: DashboardOptions,
    ) -> DashboardResult<Self> {
        let mut theme = ThemeController::load_with_key(parts.store, options.preference_key);

        let chart = Rc::new(RefCell::new(ChartAdapter::new(
            &parts.series,
            parts.backend,
            options.breakpoints,
            viewport_width,
        )));

        let subscriber = Rc::clone(&chart);
        theme.subscribe(move |theme| {
            if let Err(e) = subscriber.borrow_mut().apply_theme(theme) {
                tracing::warn!("Failed to restyle chart: {}", e);
            }
        });
        chart.borrow_mut().apply_theme(theme.theme())?;

        let selection = SelectionManager::new(parts.table.selectable_ids());
        let dates = DateNavigator::for_series(&parts.series);

        tracing::info!(
            theme = %theme.theme(),
            rows = parts.table.rows().len(),
            viewport_width,
            "Dashboard initialized"
        );

        Ok(Self {
            theme,
            chart,
            resize: Debouncer::new(parts.scheduler, options.debounce),
            table: parts.table,
            sorter: SortEngine::new(),
            selection,
            cost_filter: CostFilter::default(),
            dates,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn chart(&self) -> Ref<'_, ChartAdapter<B>> {
        self.chart.borrow()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn sorter(&self) -> &SortEngine {
        &self.sorter
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn cost_filter(&self) -> &CostFilter {
        &self.cost_filter
    }

    pub fn dates(&self) -> &DateNavigator {
        &self.dates
    }

    pub fn resize_debouncer(&self) -> &Debouncer<T> {
        &self.resize
    }

    /// Theme toggle clicked
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Listen for theme changes alongside the chart
    pub fn subscribe_theme(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        self.theme.subscribe(listener)
    }

    /// Window resized. The chart is re-laid out once the burst settles.
    pub fn viewport_resized(&self, width: f64) {
        let chart = Rc::clone(&self.chart);
        self.resize.call(move || {
            if let Err(e) = chart.borrow_mut().apply_viewport(width) {
                tracing::warn!("Failed to resize chart: {}", e);
            }
        });
    }

    /// Redraw the chart without changing it, e.g. once its surface exists
    pub fn redraw(&self) -> DashboardResult<()> {
        self.chart.borrow_mut().redraw()
    }

    /// Sortable header clicked
    pub fn sort_by(&mut self, column: &str) -> SortDirection {
        self.sorter.sort_by(&mut self.table, column)
    }

    /// Row checkbox changed
    pub fn set_row_checked(&mut self, id: RowId, checked: bool) -> DashboardResult<()> {
        self.selection.set_row(id, checked)
    }

    /// Select-all checkbox changed
    pub fn set_select_all(&mut self, checked: bool) {
        self.selection.set_select_all(checked);
    }

    /// Action bar close button clicked
    pub fn close_action_bar(&mut self) {
        self.selection.close();
    }

    pub fn add_as_keyword(&self) -> String {
        let message = self.selection.add_as_keyword();
        tracing::info!("{}", message);
        message
    }

    pub fn add_as_negative_keyword(&self) -> String {
        let message = self.selection.add_as_negative_keyword();
        tracing::info!("{}", message);
        message
    }

    pub fn remove_cost_filter(&mut self) {
        self.cost_filter.remove();
    }

    pub fn previous_date_range(&self) {
        self.dates.previous();
    }

    pub fn next_date_range(&self) {
        self.dates.next();
    }
}
