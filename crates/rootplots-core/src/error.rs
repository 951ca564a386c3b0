//! Error types for histogram operations
//!
//! Provides a unified error type for all rootplots crates.

use thiserror::Error;

/// Core error type for histogram and profile operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Bad construction parameters or an invalid set of axes
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// A bin or cell index outside its declared range
    #[error("Index {index} out of range [0, {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    /// A position that resolves to underflow or overflow where a cell is required
    #[error("Position {position} is outside the range of axis {axis}")]
    PositionOutOfRange { axis: usize, position: f64 },

    /// Malformed integration or iteration bounds
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Binary operation between histograms with different binnings
    #[error("Incompatible axes: {0}")]
    IncompatibleAxes(String),

    /// Division by a cell whose content is zero
    #[error("Division by zero content in cell {cell}")]
    DivideByZero { cell: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a coordinate or index tuple of the wrong length
    pub fn dimension_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidDomain(format!(
            "{context}: expected {expected} components, got {actual}"
        ))
    }

    /// Check that `index` lies in `[0, bound)`
    pub fn check_index(index: usize, bound: usize) -> Result<usize> {
        if index >= bound {
            return Err(Error::IndexOutOfRange { index, bound });
        }
        Ok(index)
    }

    /// Check that a component-wise range is well formed
    pub fn check_bounds<T: PartialOrd + std::fmt::Debug>(low: &[T], high: &[T]) -> Result<()> {
        for (k, (lo, hi)) in low.iter().zip(high).enumerate() {
            if lo > hi {
                return Err(Error::InvalidRange(format!(
                    "low bound {lo:?} exceeds high bound {hi:?} on axis {k}"
                )));
            }
        }
        Ok(())
    }
}
