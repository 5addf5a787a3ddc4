//! Chart Adapter
//!
//! Keeps the chart configuration in step with the page: restyles it when the
//! theme changes and re-lays it out when the viewport width changes.

use super::backend::{ChartBackend, UpdateMode};
use super::config::ChartConfig;
use super::layout::{Breakpoints, ResponsiveLayout, ThemePalette};
use crate::error::DashboardResult;
use crate::series::SeriesPoint;
use crate::theme::Theme;

pub struct ChartAdapter<B: ChartBackend> {
    config: ChartConfig,
    backend: B,
    breakpoints: Breakpoints,
    layout: ResponsiveLayout,
    theme: Theme,
}

impl<B: ChartBackend> ChartAdapter<B> {
    /// Build the performance chart sized for `viewport_width`. Nothing is
    /// drawn until [`apply_theme`](Self::apply_theme) or [`redraw`](Self::redraw).
    pub fn new(
        series: &[SeriesPoint],
        backend: B,
        breakpoints: Breakpoints,
        viewport_width: f64,
    ) -> Self {
        let layout = breakpoints.layout_for(viewport_width);
        Self {
            config: ChartConfig::performance(series, layout),
            backend,
            breakpoints,
            layout,
            theme: Theme::Light,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn layout(&self) -> ResponsiveLayout {
        self.layout
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Recolour ticks, grid and legend for `theme`, then redraw
    pub fn apply_theme(&mut self, theme: Theme) -> DashboardResult<()> {
        let palette = ThemePalette::for_theme(theme);
        let text = Some(palette.text.to_string());

        let scales = &mut self.config.options.scales;
        scales.x.ticks.color = text.clone();
        scales.y.ticks.color = text.clone();
        scales.y1.ticks.color = text.clone();
        scales.y.grid.color = Some(palette.grid.to_string());
        self.config.options.plugins.legend.labels.color = text;

        self.theme = theme;
        tracing::debug!(%theme, "Restyled chart");
        self.backend.update(&self.config, UpdateMode::Default)
    }

    /// Recompute tick budget and font size for `width`, then resize and redraw
    /// without animation
    pub fn apply_viewport(&mut self, width: f64) -> DashboardResult<ResponsiveLayout> {
        let layout = self.breakpoints.layout_for(width);
        let scales = &mut self.config.options.scales;
        scales.x.ticks.max_ticks_limit = Some(layout.max_ticks);
        scales.x.ticks.font.size = layout.font_size;
        scales.y.ticks.font.size = layout.font_size;
        scales.y1.ticks.font.size = layout.font_size;
        self.layout = layout;

        tracing::debug!(width, max_ticks = layout.max_ticks, font = layout.font_size, "Chart layout updated");
        self.backend.resize()?;
        self.backend.update(&self.config, UpdateMode::None)?;
        Ok(layout)
    }

    /// Redraw the current configuration as is
    pub fn redraw(&mut self) -> DashboardResult<()> {
        self.backend.update(&self.config, UpdateMode::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::backend::HeadlessBackend;
    use crate::series::SeriesGenerator;

    fn adapter(width: f64) -> ChartAdapter<HeadlessBackend> {
        let series = SeriesGenerator::default().generate_with(|| 0.25);
        ChartAdapter::new(&series, HeadlessBackend::new(), Breakpoints::default(), width)
    }

    #[test]
    fn test_initial_layout_follows_viewport() {
        let chart = adapter(400.0);
        let x = &chart.config().options.scales.x;
        assert_eq!(x.ticks.max_ticks_limit, Some(5));
        assert_eq!(x.ticks.font.size, 10);
        assert_eq!(chart.backend().updates, 0);
    }

    #[test]
    fn test_dark_theme_colours() {
        let mut chart = adapter(1024.0);
        chart.apply_theme(Theme::Dark).unwrap();

        let options = &chart.config().options;
        assert_eq!(options.scales.x.ticks.color.as_deref(), Some("#FFFFFF"));
        assert_eq!(options.scales.y1.ticks.color.as_deref(), Some("#FFFFFF"));
        assert_eq!(
            options.scales.y.grid.color.as_deref(),
            Some("rgba(255, 255, 255, 0.1)")
        );
        assert_eq!(options.plugins.legend.labels.color.as_deref(), Some("#FFFFFF"));
        assert_eq!(chart.backend().updates, 1);
        assert_eq!(chart.backend().last_mode, Some(UpdateMode::Default));
    }

    #[test]
    fn test_light_theme_colours() {
        let mut chart = adapter(1024.0);
        chart.apply_theme(Theme::Dark).unwrap();
        chart.apply_theme(Theme::Light).unwrap();

        let options = &chart.config().options;
        assert_eq!(options.scales.y.ticks.color.as_deref(), Some("#343434"));
        assert_eq!(options.scales.y.grid.color.as_deref(), Some("rgba(0, 0, 0, 0.1)"));
        assert_eq!(chart.theme(), Theme::Light);
    }

    #[test]
    fn test_viewport_updates_all_axes() {
        let mut chart = adapter(1024.0);
        let layout = chart.apply_viewport(700.0).unwrap();
        assert_eq!(layout, ResponsiveLayout::new(7, 12));

        let layout = chart.apply_viewport(500.0).unwrap();
        assert_eq!(layout, ResponsiveLayout::new(5, 10));

        let scales = &chart.config().options.scales;
        assert_eq!(scales.x.ticks.max_ticks_limit, Some(5));
        assert_eq!(scales.y.ticks.font.size, 10);
        assert_eq!(scales.y1.ticks.font.size, 10);

        assert_eq!(chart.backend().resizes, 2);
        assert_eq!(chart.backend().last_mode, Some(UpdateMode::None));
    }
}
