//! Chart configuration model
//!
//! Mirrors the shape of a Chart.js configuration object so the whole chart can
//! be serialized and handed to any backend that understands it.

use serde::{Deserialize, Serialize};

use super::layout::ResponsiveLayout;
use crate::series::SeriesPoint;

pub const INTERACTIONS_AXIS: &str = "y";
pub const COST_AXIS: &str = "y1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    pub tension: f64,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
}

/// Hover behaviour shared by tooltip and highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Every dataset's point at the hovered index
    Index,
    Nearest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub position: Position,
    #[serde(default)]
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
    pub y1: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScaleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TickFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

impl Default for Font {
    fn default() -> Self {
        Self { size: 12 }
    }
}

/// Tick label formatting, standing in for a Chart.js tick callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TickFormat {
    Currency { prefix: String, decimals: usize },
}

impl TickFormat {
    pub fn dollars() -> Self {
        TickFormat::Currency {
            prefix: "$".to_string(),
            decimals: 2,
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Currency { prefix, decimals } => {
                format!("{}{:.*}", prefix, *decimals, value)
            }
        }
    }
}

impl Axis {
    /// Label for a tick value, honouring the axis format if it has one
    pub fn tick_label(&self, value: f64) -> String {
        match &self.ticks.format {
            Some(format) => format.format(value),
            None => format!("{}", value),
        }
    }
}

impl ChartConfig {
    /// Dual-axis performance chart: interactions on the left, average cost on the right
    pub fn performance(series: &[SeriesPoint], layout: ResponsiveLayout) -> Self {
        let labels = series.iter().map(|p| p.label.clone()).collect();
        let interactions = series.iter().map(|p| p.interactions as f64).collect();
        let average_cost = series.iter().map(|p| p.average_cost).collect();

        let font = Font {
            size: layout.font_size,
        };

        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels,
                datasets: vec![
                    Dataset {
                        label: "Interactions".to_string(),
                        data: interactions,
                        border_color: "#2277D1".to_string(),
                        background_color: "rgba(34, 119, 209, 0.1)".to_string(),
                        y_axis_id: INTERACTIONS_AXIS.to_string(),
                        tension: 0.4,
                        fill: false,
                    },
                    Dataset {
                        label: "Avg. CPC".to_string(),
                        data: average_cost,
                        border_color: "#dc3545".to_string(),
                        background_color: "rgba(220, 53, 69, 0.1)".to_string(),
                        y_axis_id: COST_AXIS.to_string(),
                        tension: 0.4,
                        fill: false,
                    },
                ],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                interaction: Interaction {
                    mode: InteractionMode::Index,
                    intersect: false,
                },
                plugins: Plugins {
                    legend: Legend {
                        display: true,
                        position: Position::Top,
                        labels: LegendLabels::default(),
                    },
                    tooltip: Tooltip { enabled: true },
                },
                scales: Scales {
                    x: Axis {
                        grid: Grid {
                            display: Some(false),
                            ..Grid::default()
                        },
                        ticks: Ticks {
                            max_ticks_limit: Some(layout.max_ticks),
                            font,
                            ..Ticks::default()
                        },
                        ..Axis::default()
                    },
                    y: Axis {
                        kind: Some(ScaleKind::Linear),
                        display: Some(true),
                        position: Some(Position::Left),
                        max: Some(500.0),
                        begin_at_zero: Some(true),
                        grid: Grid {
                            color: Some("rgba(0, 0, 0, 0.1)".to_string()),
                            ..Grid::default()
                        },
                        ticks: Ticks {
                            font,
                            ..Ticks::default()
                        },
                    },
                    y1: Axis {
                        kind: Some(ScaleKind::Linear),
                        display: Some(true),
                        position: Some(Position::Right),
                        max: Some(10.0),
                        begin_at_zero: Some(true),
                        grid: Grid {
                            draw_on_chart_area: Some(false),
                            ..Grid::default()
                        },
                        ticks: Ticks {
                            font,
                            format: Some(TickFormat::dollars()),
                            ..Ticks::default()
                        },
                    },
                },
            },
        }
    }

    /// Datasets plotted against the named axis
    pub fn datasets_on<'a>(&'a self, axis: &'a str) -> impl Iterator<Item = &'a Dataset> + 'a {
        self.data.datasets.iter().filter(move |d| d.y_axis_id == axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesGenerator;

    fn config() -> ChartConfig {
        let series = SeriesGenerator::default().generate_with(|| 0.5);
        ChartConfig::performance(&series, ResponsiveLayout::new(10, 12))
    }

    #[test]
    fn test_datasets_share_labels() {
        let config = config();
        assert_eq!(config.data.labels.len(), 30);
        for dataset in &config.data.datasets {
            assert_eq!(dataset.data.len(), config.data.labels.len());
        }
        assert_eq!(config.datasets_on(INTERACTIONS_AXIS).count(), 1);
        assert_eq!(config.datasets_on(COST_AXIS).count(), 1);
    }

    #[test]
    fn test_axis_ranges() {
        let scales = config().options.scales;
        assert_eq!(scales.y.max, Some(500.0));
        assert_eq!(scales.y.position, Some(Position::Left));
        assert_eq!(scales.y1.max, Some(10.0));
        assert_eq!(scales.y1.position, Some(Position::Right));
        assert_eq!(scales.y1.grid.draw_on_chart_area, Some(false));
    }

    #[test]
    fn test_currency_ticks() {
        let y1 = config().options.scales.y1;
        assert_eq!(y1.tick_label(2.5), "$2.50");
        assert_eq!(y1.tick_label(10.0), "$10.00");
    }

    #[test]
    fn test_serializes_chartjs_keys() {
        let json = serde_json::to_value(config()).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["interaction"]["mode"], "index");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["data"]["datasets"][1]["yAxisID"], "y1");
        assert_eq!(json["options"]["scales"]["x"]["ticks"]["maxTicksLimit"], 10);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
    }
}
