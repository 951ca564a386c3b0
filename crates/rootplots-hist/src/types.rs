//! The N-dimensional histogram

use crate::ops::{self, BinaryOp};
use crate::projection;
use rootplots_core::{
    ArithmeticConfig, Axis, BinnedContent, Binning, Error, HistStats, Location, Result,
};
use std::fmt;
use tracing::trace;

/// An N-dimensional histogram over linear axes
///
/// Cell contents and sums of squared weights live in two dense buffers
/// addressed by the linear cell index (first axis fastest).
#[derive(Debug, Clone, PartialEq)]
pub struct HistND {
    binning: Binning,
    contents: Vec<f64>,
    errors2: Vec<f64>,
    stats: HistStats,
    title: String,
}

impl HistND {
    /// Create an empty histogram from per-dimension ranges and bin counts
    pub fn new(dim: usize, mins: &[f64], maxs: &[f64], nbins: &[usize]) -> Result<Self> {
        Ok(Self::from_binning(Binning::from_ranges(dim, mins, maxs, nbins)?))
    }

    /// Create an empty histogram over the given axes
    pub fn from_axes(axes: Vec<Axis>) -> Result<Self> {
        Ok(Self::from_binning(Binning::new(axes)?))
    }

    /// Create an empty histogram over an existing binning
    pub fn from_binning(binning: Binning) -> Self {
        let cells = binning.cells();
        let stats = HistStats::new(binning.dimension());
        Self {
            binning,
            contents: vec![0.0; cells],
            errors2: vec![0.0; cells],
            stats,
            title: String::new(),
        }
    }

    /// Build a histogram directly from cell contents and squared errors
    ///
    /// Weight sums are derived from the cells; `entries` is taken as given.
    pub fn from_cells(
        binning: Binning,
        contents: Vec<f64>,
        errors2: Vec<f64>,
        entries: u64,
    ) -> Result<Self> {
        for len in [contents.len(), errors2.len()] {
            if len != binning.cells() {
                return Err(Error::dimension_mismatch(binning.cells(), len, "cell buffer"));
            }
        }
        let stats = HistStats::from_cells(&binning, &contents, &errors2, entries);
        Ok(Self {
            binning,
            contents,
            errors2,
            stats,
            title: String::new(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Label axis `k` for display
    pub fn set_axis_label(&mut self, k: usize, label: impl Into<String>) -> Result<()> {
        self.binning.axis_mut(k)?.set_label(label);
        Ok(())
    }

    /// Total sum of weights, including under/overflow
    pub fn sum_of_weights(&self) -> f64 {
        self.stats.sum_of_weights
    }

    /// Total sum of squared weights, including under/overflow
    pub fn sum_of_weights2(&self) -> f64 {
        self.stats.sum_of_weights2
    }

    /// Sum of `weight * x_k` for each axis
    pub fn sum_of_weights_x(&self) -> &[f64] {
        &self.stats.sum_of_weights_x
    }

    /// Sum of `weight * x_k^2` for each axis
    pub fn sum_of_weights_x2(&self) -> &[f64] {
        &self.stats.sum_of_weights_x2
    }

    pub(crate) fn stats_mut(&mut self) -> &mut HistStats {
        &mut self.stats
    }

    /// Fill the cell containing `position` with `weight`
    ///
    /// Returns the filled cell, or `None` when the position is outside the
    /// axes; such fills are still counted in the statistics.
    pub fn fill_pos(&mut self, position: &[f64], weight: f64) -> Result<Option<usize>> {
        match self.binning.locate(position)? {
            Location::Cell { cell, .. } => {
                self.stats.record(weight, position)?;
                self.add_to_cell(cell, weight);
                Ok(Some(cell))
            }
            Location::Underflow { axis } => {
                trace!(axis, weight, "underflow fill");
                self.stats.record_underflow(weight);
                Ok(None)
            }
            Location::Overflow { axis } => {
                trace!(axis, weight, "overflow fill");
                self.stats.record_overflow(weight);
                Ok(None)
            }
        }
    }

    /// Fill the cell containing `position` with unit weight
    pub fn fill(&mut self, position: &[f64]) -> Result<Option<usize>> {
        self.fill_pos(position, 1.0)
    }

    /// Fill the cell addressed by per-axis bin indices
    ///
    /// The per-axis sums use the bin centers as coordinates.
    pub fn fill_bins(&mut self, bins: &[usize], weight: f64) -> Result<usize> {
        let cell = self.binning.bins_to_cell(bins)?;
        let centers = self.binning.bin_centers(bins);
        self.stats.record(weight, &centers)?;
        self.add_to_cell(cell, weight);
        Ok(cell)
    }

    /// Fill a cell by its linear index
    pub fn fill_cell(&mut self, cell: usize, weight: f64) -> Result<usize> {
        let bins = self.binning.cell_to_bins(cell)?;
        let centers = self.binning.bin_centers(&bins);
        self.stats.record(weight, &centers)?;
        self.add_to_cell(cell, weight);
        Ok(cell)
    }

    fn add_to_cell(&mut self, cell: usize, weight: f64) {
        self.contents[cell] += weight;
        self.errors2[cell] += weight * weight;
    }

    /// Multiply every cell by `factor` in place
    ///
    /// Squared errors are multiplied by `factor²`, so errors scale by `|factor|`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for c in &mut self.contents {
            *c *= factor;
        }
        for e2 in &mut self.errors2 {
            *e2 *= factor * factor;
        }
        self.stats.scale(factor);
        self
    }

    /// Histogram over the kept axes, summing over all the others
    pub fn projection(&self, keep: &[usize]) -> Result<HistND> {
        projection::project(self, keep)
    }

    /// Cell-wise sum with a histogram of identical binning
    pub fn add<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        ops::combine(self, other, BinaryOp::Add, &ArithmeticConfig::default())
    }

    /// Cell-wise difference with a histogram of identical binning
    pub fn subtract<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        ops::combine(self, other, BinaryOp::Subtract, &ArithmeticConfig::default())
    }

    /// Cell-wise product with a histogram of identical binning
    pub fn multiply<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        ops::combine(self, other, BinaryOp::Multiply, &ArithmeticConfig::default())
    }

    /// Cell-wise quotient; a zero divisor cell fails with [`Error::DivideByZero`]
    pub fn divide<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        ops::combine(self, other, BinaryOp::Divide, &ArithmeticConfig::default())
    }

    /// Cell-wise quotient with an explicit zero divisor policy
    pub fn divide_with<B: BinnedContent + ?Sized>(
        &self,
        other: &B,
        config: &ArithmeticConfig,
    ) -> Result<HistND> {
        ops::combine(self, other, BinaryOp::Divide, config)
    }
}

impl BinnedContent for HistND {
    fn binning(&self) -> &Binning {
        &self.binning
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn content_at(&self, cell: usize) -> f64 {
        self.contents[cell]
    }

    fn error2_at(&self, cell: usize) -> f64 {
        self.errors2[cell]
    }

    fn stats(&self) -> HistStats {
        self.stats.clone()
    }

    fn entries(&self) -> u64 {
        self.stats.entries
    }

    fn cells_contents(&self) -> Vec<f64> {
        self.contents.clone()
    }
}

impl fmt::Display for HistND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HistND(\"{}\", dim={}, cells={}, entries={})",
            self.title,
            self.binning.dimension(),
            self.binning.cells(),
            self.stats.entries
        )
    }
}
