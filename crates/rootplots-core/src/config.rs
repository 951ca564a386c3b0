//! Configuration types for histogram arithmetic and profile filling

use crate::error::{Error, Result};

/// Cell count above which allocating a histogram logs a warning.
///
/// Two `f64` buffers of this many cells take 2 GiB.
pub const LARGE_CELL_COUNT: usize = 1 << 27;

/// What division does with a divisor cell whose content is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDivisorPolicy {
    /// Fail the whole division with [`Error::DivideByZero`]
    #[default]
    Error,

    /// Write content 0 and error 0 into the result cell
    Zero,
}

/// Options for binary operations between histograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArithmeticConfig {
    /// Handling of zero divisor cells in `divide`
    pub zero_divisor: ZeroDivisorPolicy,
}

impl ArithmeticConfig {
    /// Configuration that substitutes zero for undefined quotients
    pub fn zero_on_divide_by_zero() -> Self {
        Self {
            zero_divisor: ZeroDivisorPolicy::Zero,
        }
    }
}

/// Closed interval of values a profile accepts; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    /// Accept every value
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Accept values in `[min, max]`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min > max || min.is_nan() || max.is_nan() {
            return Err(Error::InvalidDomain(format!(
                "value range [{min}, {max}] is empty"
            )));
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Whether `value` passes the filter
    pub fn accepts(&self, value: f64) -> bool {
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }
}
