//! Error types for the plotting adapter

use thiserror::Error;

/// Errors raised while building plot geometry or rendering
#[derive(Error, Debug)]
pub enum VizError {
    /// Only one- and two-dimensional objects can be drawn
    #[error("Cannot plot a {dimension}-dimensional object")]
    Unsupported { dimension: usize },

    /// The plotting backend failed
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Querying the histogram failed
    #[error("Histogram error: {0}")]
    Core(#[from] rootplots_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, VizError>;

impl VizError {
    /// Wrap any backend error
    pub fn drawing(err: impl std::fmt::Display) -> Self {
        VizError::Drawing(err.to_string())
    }
}
