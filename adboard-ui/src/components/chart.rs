//! Performance Chart Component
//!
//! Dual-axis interactions / average cost chart drawn on an HTML5 canvas.
//! The [`ChartAdapter`](adboard::chart::ChartAdapter) owns the configuration;
//! this module only renders whatever configuration it is handed.

use adboard::chart::config::{Axis, ChartConfig, COST_AXIS};
use adboard::chart::{ChartBackend, UpdateMode};
use adboard::error::{DashboardError, DashboardResult};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::platform::viewport_width;
use crate::state::DashboardState;

const DEFAULT_TEXT: &str = "#343434";
const DEFAULT_GRID: &str = "rgba(0, 0, 0, 0.1)";
const GRID_DIVISIONS: usize = 5;

/// Renders chart updates onto the `performanceChart` canvas. Updates before
/// the canvas is mounted are skipped; the mount effect redraws.
#[derive(Clone, Copy)]
pub struct CanvasBackend {
    canvas: NodeRef<html::Canvas>,
}

impl CanvasBackend {
    pub fn new(canvas: NodeRef<html::Canvas>) -> Self {
        Self { canvas }
    }
}

impl ChartBackend for CanvasBackend {
    fn update(&mut self, config: &ChartConfig, _mode: UpdateMode) -> DashboardResult<()> {
        match self.canvas.get_untracked() {
            Some(canvas) => draw_chart(&canvas, config),
            None => Ok(()),
        }
    }

    fn resize(&mut self) -> DashboardResult<()> {
        if let Some(canvas) = self.canvas.get_untracked() {
            let width = canvas.client_width();
            let height = canvas.client_height();
            if width > 0 && height > 0 {
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
            }
        }
        Ok(())
    }
}

/// Chart card
#[component]
pub fn PerformanceChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = state.canvas;

    // First draw once the canvas exists, then size it to its box
    create_effect(move |_| {
        if canvas_ref.get().is_some() {
            state.peek(|s| {
                if let Err(e) = s.redraw() {
                    web_sys::console::error_1(&format!("Chart draw failed: {}", e).into());
                }
                s.viewport_resized(viewport_width());
            });
        }
    });

    view! {
        <section class="card rounded-lg shadow p-4 mb-6">
            <h2 class="text-lg font-semibold mb-2">"Performance"</h2>
            <div class="relative h-72">
                <canvas
                    id="performanceChart"
                    node_ref=canvas_ref
                    width="800"
                    height="288"
                    class="w-full h-full"
                />
            </div>
        </section>
    }
}

fn text_color(axis: &Axis) -> &str {
    axis.ticks.color.as_deref().unwrap_or(DEFAULT_TEXT)
}

/// Draw the chart on canvas
pub fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) -> DashboardResult<()> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| DashboardError::MissingElement("performanceChart 2d context".to_string()))?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let scales = &config.options.scales;
    let legend = &config.options.plugins.legend;
    let font_size = scales.x.ticks.font.size as f64;
    let font = format!("{}px sans-serif", scales.x.ticks.font.size);

    // Margins
    let margin_left = 50.0;
    let margin_right = 55.0;
    let margin_top = if legend.display { 36.0 } else { 12.0 };
    let margin_bottom = font_size + 16.0;

    let chart_width = (width - margin_left - margin_right).max(1.0);
    let chart_height = (height - margin_top - margin_bottom).max(1.0);

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_font(&font);

    // Legend
    if legend.display {
        let legend_color = legend.labels.color.as_deref().unwrap_or(DEFAULT_TEXT);
        let mut x = margin_left;
        for dataset in &config.data.datasets {
            ctx.set_fill_style(&dataset.border_color.as_str().into());
            ctx.fill_rect(x, 10.0, 12.0, 12.0);
            ctx.set_fill_style(&legend_color.into());
            let _ = ctx.fill_text(&dataset.label, x + 18.0, 20.0);
            x += 36.0 + dataset.label.len() as f64 * font_size * 0.6;
        }
    }

    // Horizontal grid lines and both value axes
    let left_max = scales.y.max.unwrap_or(1.0);
    let right_max = scales.y1.max.unwrap_or(1.0);
    let grid_color = scales.y.grid.color.as_deref().unwrap_or(DEFAULT_GRID);
    ctx.set_line_width(1.0);

    for i in 0..=GRID_DIVISIONS {
        let fraction = i as f64 / GRID_DIVISIONS as f64;
        let y = margin_top + fraction * chart_height;

        ctx.set_stroke_style(&grid_color.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_text_align("right");
        ctx.set_fill_style(&text_color(&scales.y).into());
        let _ = ctx.fill_text(
            &scales.y.tick_label((left_max * (1.0 - fraction)).round()),
            margin_left - 6.0,
            y + 4.0,
        );

        ctx.set_text_align("left");
        ctx.set_fill_style(&text_color(&scales.y1).into());
        let _ = ctx.fill_text(
            &scales.y1.tick_label(right_max * (1.0 - fraction)),
            width - margin_right + 6.0,
            y + 4.0,
        );
    }

    // X-axis labels, thinned to the tick limit
    let labels = &config.data.labels;
    let count = labels.len();
    let x_at = |i: usize| {
        if count > 1 {
            margin_left + (i as f64 / (count - 1) as f64) * chart_width
        } else {
            margin_left + chart_width / 2.0
        }
    };
    let limit = scales.x.ticks.max_ticks_limit.map_or(count, |l| l as usize).max(1);
    let step = ((count + limit - 1) / limit).max(1);

    ctx.set_text_align("center");
    ctx.set_fill_style(&text_color(&scales.x).into());
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let _ = ctx.fill_text(label, x_at(i), height - 8.0);
    }
    ctx.set_text_align("start");

    // Each data series against its own axis
    for dataset in &config.data.datasets {
        if dataset.data.is_empty() {
            continue;
        }
        let axis_max = if dataset.y_axis_id == COST_AXIS { right_max } else { left_max };
        let points: Vec<(f64, f64)> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let scaled = (value / axis_max).clamp(0.0, 1.0);
                (x_at(i), margin_top + (1.0 - scaled) * chart_height)
            })
            .collect();

        ctx.set_stroke_style(&dataset.border_color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        trace_line(&ctx, &points, dataset.tension > 0.0);
        ctx.stroke();

        ctx.set_fill_style(&dataset.border_color.as_str().into());
        for &(x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(x, y, 2.5, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    Ok(())
}

/// Path through `points`; smoothed with midpoint quadratic curves
fn trace_line(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], smooth: bool) {
    let Some(&(first_x, first_y)) = points.first() else {
        return;
    };
    ctx.move_to(first_x, first_y);

    if !smooth {
        for &(x, y) in &points[1..] {
            ctx.line_to(x, y);
        }
        return;
    }

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        ctx.quadratic_curve_to(x0, y0, (x0 + x1) / 2.0, (y0 + y1) / 2.0);
    }
    if let Some(&(last_x, last_y)) = points.last() {
        ctx.line_to(last_x, last_y);
    }
}
