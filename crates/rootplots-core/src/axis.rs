//! Linear binned axis

use crate::error::{Error, Result};
use num_traits::ToPrimitive;
use std::fmt;

/// Where a coordinate falls on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLocation {
    /// A regular bin index in `[0, nbins)`
    Bin(usize),
    /// Below the lower edge of the first bin
    Underflow,
    /// At or above the upper edge of the last bin (NaN lands here too)
    Overflow,
}

impl BinLocation {
    /// The bin index, if the coordinate is inside the axis
    pub fn bin(self) -> Option<usize> {
        match self {
            BinLocation::Bin(i) => Some(i),
            _ => None,
        }
    }
}

/// One dimension of a histogram: `nbins` equal-width bins over `[min_bin, max_bin)`
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    min_bin: f64,
    max_bin: f64,
    nbins: usize,
    label: String,
}

impl Axis {
    /// Create an axis, validating `nbins >= 1` and `min_bin < max_bin`
    pub fn new(nbins: usize, min_bin: f64, max_bin: f64) -> Result<Self> {
        if nbins == 0 {
            return Err(Error::InvalidDomain(
                "axis must have at least one bin".to_string(),
            ));
        }
        if !min_bin.is_finite() || !max_bin.is_finite() {
            return Err(Error::InvalidDomain(format!(
                "axis edges must be finite, got [{min_bin}, {max_bin})"
            )));
        }
        if min_bin >= max_bin {
            return Err(Error::InvalidDomain(format!(
                "axis lower edge {min_bin} must be below upper edge {max_bin}"
            )));
        }
        if !(max_bin - min_bin).is_finite() {
            return Err(Error::InvalidDomain(format!(
                "axis width of [{min_bin}, {max_bin}) overflows"
            )));
        }

        Ok(Self {
            min_bin,
            max_bin,
            nbins,
            label: String::new(),
        })
    }

    /// Attach a display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lower edge of the first bin
    pub fn min_bin(&self) -> f64 {
        self.min_bin
    }

    /// Upper edge of the last bin
    pub fn max_bin(&self) -> f64 {
        self.max_bin
    }

    pub fn nbins(&self) -> usize {
        self.nbins
    }

    /// Width shared by every bin
    pub fn bin_width(&self) -> f64 {
        (self.max_bin - self.min_bin) / self.nbins as f64
    }

    /// Bins per unit length
    pub fn density(&self) -> f64 {
        self.nbins as f64 / (self.max_bin - self.min_bin)
    }

    /// Locate the bin containing `x`, such that `lower_edge <= x < upper_edge`
    pub fn get_bin(&self, x: f64) -> BinLocation {
        if x < self.min_bin {
            return BinLocation::Underflow;
        }
        if x.is_nan() || x >= self.max_bin {
            return BinLocation::Overflow;
        }

        let scaled = (x - self.min_bin) * self.nbins as f64 / (self.max_bin - self.min_bin);
        match scaled.floor().to_usize() {
            // rounding just below max_bin can land on nbins
            Some(i) => BinLocation::Bin(i.min(self.nbins - 1)),
            None => BinLocation::Overflow,
        }
    }

    /// Center of bin `i`
    pub fn get_bin_center(&self, i: usize) -> Result<f64> {
        Error::check_index(i, self.nbins)?;
        Ok(self.center_unchecked(i))
    }

    pub fn get_bin_lower_edge(&self, i: usize) -> Result<f64> {
        Error::check_index(i, self.nbins)?;
        Ok(self.edge(i))
    }

    pub fn get_bin_upper_edge(&self, i: usize) -> Result<f64> {
        Error::check_index(i, self.nbins)?;
        Ok(self.edge(i + 1))
    }

    /// All `nbins + 1` bin edges in ascending order
    pub fn get_bins_edges(&self) -> Vec<f64> {
        (0..=self.nbins).map(|i| self.edge(i)).collect()
    }

    /// Centers of all bins in ascending order
    pub fn get_bins_centers(&self) -> Vec<f64> {
        (0..self.nbins).map(|i| self.center_unchecked(i)).collect()
    }

    /// Same number of bins over the same range
    pub fn same_binning(&self, other: &Axis) -> bool {
        self.nbins == other.nbins && self.min_bin == other.min_bin && self.max_bin == other.max_bin
    }

    pub(crate) fn center_unchecked(&self, i: usize) -> f64 {
        self.min_bin + (i as f64 + 0.5) * self.bin_width()
    }

    fn edge(&self, i: usize) -> f64 {
        if i == self.nbins {
            // exact upper edge, no accumulated rounding
            self.max_bin
        } else {
            self.min_bin + i as f64 * self.bin_width()
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Axis({} bins, [{:.3}, {:.3}))",
            self.nbins, self.min_bin, self.max_bin
        )
    }
}
