//! Responsive layout and theme palette for the chart

use serde::Deserialize;

use crate::theme::Theme;

/// X-axis tick budget and font size for one viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveLayout {
    pub max_ticks: u32,
    pub font_size: u32,
}

impl ResponsiveLayout {
    pub fn new(max_ticks: u32, font_size: u32) -> Self {
        Self {
            max_ticks,
            font_size,
        }
    }
}

/// Viewport thresholds, in CSS pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_small_width")]
    pub small_width: f64,

    #[serde(default = "default_medium_width")]
    pub medium_width: f64,

    #[serde(default = "default_small_ticks")]
    pub small_ticks: u32,

    #[serde(default = "default_medium_ticks")]
    pub medium_ticks: u32,

    #[serde(default = "default_large_ticks")]
    pub large_ticks: u32,

    #[serde(default = "default_small_font")]
    pub small_font: u32,

    #[serde(default = "default_font")]
    pub font: u32,
}

fn default_small_width() -> f64 {
    576.0
}

fn default_medium_width() -> f64 {
    768.0
}

fn default_small_ticks() -> u32 {
    5
}

fn default_medium_ticks() -> u32 {
    7
}

fn default_large_ticks() -> u32 {
    10
}

fn default_small_font() -> u32 {
    10
}

fn default_font() -> u32 {
    12
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small_width: default_small_width(),
            medium_width: default_medium_width(),
            small_ticks: default_small_ticks(),
            medium_ticks: default_medium_ticks(),
            large_ticks: default_large_ticks(),
            small_font: default_small_font(),
            font: default_font(),
        }
    }
}

impl Breakpoints {
    pub fn layout_for(&self, width: f64) -> ResponsiveLayout {
        if width < self.small_width {
            ResponsiveLayout::new(self.small_ticks, self.small_font)
        } else if width < self.medium_width {
            ResponsiveLayout::new(self.medium_ticks, self.font)
        } else {
            ResponsiveLayout::new(self.large_ticks, self.font)
        }
    }
}

/// Text and grid colours for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub text: &'static str,
    pub grid: &'static str,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: "#343434",
                grid: "rgba(0, 0, 0, 0.1)",
            },
            Theme::Dark => Self {
                text: "#FFFFFF",
                grid: "rgba(255, 255, 255, 0.1)",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        let bp = Breakpoints::default();
        assert_eq!(bp.layout_for(375.0), ResponsiveLayout::new(5, 10));
        assert_eq!(bp.layout_for(575.9), ResponsiveLayout::new(5, 10));
        assert_eq!(bp.layout_for(576.0), ResponsiveLayout::new(7, 12));
        assert_eq!(bp.layout_for(767.0), ResponsiveLayout::new(7, 12));
        assert_eq!(bp.layout_for(768.0), ResponsiveLayout::new(10, 12));
        assert_eq!(bp.layout_for(1920.0), ResponsiveLayout::new(10, 12));
    }

    #[test]
    fn test_palettes() {
        assert_eq!(ThemePalette::for_theme(Theme::Light).text, "#343434");
        assert_eq!(ThemePalette::for_theme(Theme::Dark).text, "#FFFFFF");
        assert_eq!(
            ThemePalette::for_theme(Theme::Dark).grid,
            "rgba(255, 255, 255, 0.1)"
        );
    }
}
