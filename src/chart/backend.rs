//! Chart backend seam
//!
//! The adapter owns the configuration; a backend turns it into pixels. The
//! browser frontend draws on a canvas, the CLI and tests use [`HeadlessBackend`].

use super::config::ChartConfig;
use crate::error::DashboardResult;

/// How a redraw should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Animate to the new state
    Default,
    /// Jump straight to the new state
    None,
}

pub trait ChartBackend {
    /// Redraw from `config`
    fn update(&mut self, config: &ChartConfig, mode: UpdateMode) -> DashboardResult<()>;

    /// Re-measure the drawing surface
    fn resize(&mut self) -> DashboardResult<()>;
}

/// Backend with no surface. Counts calls and keeps the last drawn config.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    pub updates: usize,
    pub resizes: usize,
    pub last_mode: Option<UpdateMode>,
    pub last_config: Option<ChartConfig>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartBackend for HeadlessBackend {
    fn update(&mut self, config: &ChartConfig, mode: UpdateMode) -> DashboardResult<()> {
        self.updates += 1;
        self.last_mode = Some(mode);
        self.last_config = Some(config.clone());
        Ok(())
    }

    fn resize(&mut self) -> DashboardResult<()> {
        self.resizes += 1;
        Ok(())
    }
}
