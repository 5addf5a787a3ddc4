//! Dashboard error types
//!
//! Defines all errors that can occur while driving the dashboard.

use thiserror::Error;

/// Errors that can occur in the dashboard layer
#[derive(Error, Debug)]
pub enum DashboardError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// CSV table import failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The preference surface rejected a read or write
    #[error("Preference store error: {0}")]
    Preference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A page element the dashboard binds to is absent
    #[error("Missing page element: {0}")]
    MissingElement(String),

    /// The chart backend failed to draw
    #[error("Chart error: {0}")]
    Chart(String),

    /// A checkbox event referenced a row the table does not have
    #[error("Unknown row: {0}")]
    UnknownRow(usize),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
