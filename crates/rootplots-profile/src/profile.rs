//! The N-dimensional profile histogram

use rootplots_core::{
    ArithmeticConfig, Axis, BinnedContent, Binning, Error, HistStats, Location, Result,
    ValueRange,
};
use rootplots_hist::{combine, project, BinaryOp, HistND};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Per-cell weighted mean of a value filled alongside each position
///
/// Each cell accumulates `Σw`, `Σw·v` and `Σw·v²`. The effective content of
/// a cell is the mean `Σw·v / Σw` and its error is the standard error of
/// that mean; both are 0 for cells that never received a fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileND {
    binning: Binning,
    sum_w: Vec<f64>,
    sum_wv: Vec<f64>,
    sum_wv2: Vec<f64>,
    stats: HistStats,
    sum_of_weighted_values: f64,
    sum_of_weighted_values2: f64,
    value_range: ValueRange,
    title: String,
}

impl ProfileND {
    /// Create an empty profile from per-dimension ranges and bin counts
    pub fn new(dim: usize, mins: &[f64], maxs: &[f64], nbins: &[usize]) -> Result<Self> {
        Ok(Self::from_binning(Binning::from_ranges(dim, mins, maxs, nbins)?))
    }

    pub fn from_axes(axes: Vec<Axis>) -> Result<Self> {
        Ok(Self::from_binning(Binning::new(axes)?))
    }

    pub fn from_binning(binning: Binning) -> Self {
        let cells = binning.cells();
        let stats = HistStats::new(binning.dimension());
        Self {
            binning,
            sum_w: vec![0.0; cells],
            sum_wv: vec![0.0; cells],
            sum_wv2: vec![0.0; cells],
            stats,
            sum_of_weighted_values: 0.0,
            sum_of_weighted_values2: 0.0,
            value_range: ValueRange::unbounded(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Only accept fill values inside `range`
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.value_range = range;
        self
    }

    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    /// Total of `weight * value` over all in-range fills
    pub fn sum_of_weighted_values(&self) -> f64 {
        self.sum_of_weighted_values
    }

    /// Total of `weight * value^2` over all in-range fills
    pub fn sum_of_weighted_values2(&self) -> f64 {
        self.sum_of_weighted_values2
    }

    /// Sum of fill weights in one cell
    pub fn cell_sum_of_weights(&self, cell: usize) -> Result<f64> {
        Error::check_index(cell, self.sum_w.len())?;
        Ok(self.sum_w[cell])
    }

    /// Sum of `weight * value` in one cell
    pub fn cell_sum_of_weighted_values(&self, cell: usize) -> Result<f64> {
        Error::check_index(cell, self.sum_wv.len())?;
        Ok(self.sum_wv[cell])
    }

    /// Fill `value` with `weight` at `position`
    ///
    /// Values rejected by the value range are ignored completely and return
    /// `None`, as do positions outside the axes (which are still counted).
    pub fn fill_pos(&mut self, position: &[f64], value: f64, weight: f64) -> Result<Option<usize>> {
        if !self.accepts(value) {
            // still reject malformed positions
            self.binning.locate(position)?;
            return Ok(None);
        }
        match self.binning.locate(position)? {
            Location::Cell { cell, .. } => {
                self.stats.record(weight, position)?;
                self.accumulate(cell, value, weight);
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

    /// Fill `value` with unit weight at `position`
    pub fn fill(&mut self, position: &[f64], value: f64) -> Result<Option<usize>> {
        self.fill_pos(position, value, 1.0)
    }

    /// Fill the cell addressed by per-axis bin indices
    pub fn fill_bins(&mut self, bins: &[usize], value: f64, weight: f64) -> Result<Option<usize>> {
        let cell = self.binning.bins_to_cell(bins)?;
        if !self.accepts(value) {
            return Ok(None);
        }
        let centers = self.binning.bin_centers(bins);
        self.stats.record(weight, &centers)?;
        self.accumulate(cell, value, weight);
        Ok(Some(cell))
    }

    /// Fill a cell by its linear index
    pub fn fill_cell(&mut self, cell: usize, value: f64, weight: f64) -> Result<Option<usize>> {
        let bins = self.binning.cell_to_bins(cell)?;
        if !self.accepts(value) {
            return Ok(None);
        }
        let centers = self.binning.bin_centers(&bins);
        self.stats.record(weight, &centers)?;
        self.accumulate(cell, value, weight);
        Ok(Some(cell))
    }

    fn accepts(&self, value: f64) -> bool {
        let accepted = self.value_range.accepts(value);
        if !accepted {
            trace!(value, "value outside the accepted range, fill ignored");
        }
        accepted
    }

    fn accumulate(&mut self, cell: usize, value: f64, weight: f64) {
        let wv = weight * value;
        self.sum_w[cell] += weight;
        self.sum_wv[cell] += wv;
        self.sum_wv2[cell] += wv * value;
        self.sum_of_weighted_values += wv;
        self.sum_of_weighted_values2 += wv * value;
    }

    /// Multiply every cell mean by `factor`
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for v in &mut self.sum_wv {
            *v *= factor;
        }
        for v2 in &mut self.sum_wv2 {
            *v2 *= factor * factor;
        }
        self.sum_of_weighted_values *= factor;
        self.sum_of_weighted_values2 *= factor * factor;
        self
    }

    /// Histogram of the cell means summed over the axes not in `keep`
    pub fn projection(&self, keep: &[usize]) -> Result<HistND> {
        project(self, keep)
    }

    /// Profile over the kept axes, merging the accumulators of every
    /// source cell that maps to the same kept bins
    #[instrument(level = "debug", skip_all, fields(keep = ?keep))]
    pub fn profile_projection(&self, keep: &[usize]) -> Result<ProfileND> {
        let keep = self.binning.normalize_keep(keep)?;
        let binning = self.binning.select(&keep)?;
        debug!(from = self.binning.dimension(), cells = binning.cells(), "projecting profile");

        let mut result = ProfileND::from_binning(binning)
            .with_title(format!("Projection of {}", self.title))
            .with_value_range(self.value_range);

        let mut bins = vec![0; self.binning.dimension()];
        let mut kept = vec![0; keep.len()];
        for cell in 0..self.binning.cells() {
            self.binning.indexer().cell_to_bins_into(cell, &mut bins)?;
            for (slot, &k) in kept.iter_mut().zip(&keep) {
                *slot = bins[k];
            }
            let target = result.binning.bins_to_cell(&kept)?;
            result.sum_w[target] += self.sum_w[cell];
            result.sum_wv[target] += self.sum_wv[cell];
            result.sum_wv2[target] += self.sum_wv2[cell];
        }

        // fill coordinates of the kept axes are still exact
        result.stats = HistStats {
            sum_of_weights_x: keep.iter().map(|&k| self.stats.sum_of_weights_x[k]).collect(),
            sum_of_weights_x2: keep.iter().map(|&k| self.stats.sum_of_weights_x2[k]).collect(),
            ..self.stats.clone()
        };
        result.sum_of_weighted_values = self.sum_of_weighted_values;
        result.sum_of_weighted_values2 = self.sum_of_weighted_values2;
        Ok(result)
    }

    /// Cell-wise sum of the means with any binned object of identical binning
    pub fn add<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        combine(self, other, BinaryOp::Add, &ArithmeticConfig::default())
    }

    pub fn subtract<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        combine(self, other, BinaryOp::Subtract, &ArithmeticConfig::default())
    }

    pub fn multiply<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        combine(self, other, BinaryOp::Multiply, &ArithmeticConfig::default())
    }

    pub fn divide<B: BinnedContent + ?Sized>(&self, other: &B) -> Result<HistND> {
        combine(self, other, BinaryOp::Divide, &ArithmeticConfig::default())
    }

    pub fn divide_with<B: BinnedContent + ?Sized>(
        &self,
        other: &B,
        config: &ArithmeticConfig,
    ) -> Result<HistND> {
        combine(self, other, BinaryOp::Divide, config)
    }

    fn mean(&self, cell: usize) -> f64 {
        let w = self.sum_w[cell];
        if w == 0.0 {
            0.0
        } else {
            self.sum_wv[cell] / w
        }
    }
}

impl BinnedContent for ProfileND {
    fn binning(&self) -> &Binning {
        &self.binning
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn content_at(&self, cell: usize) -> f64 {
        self.mean(cell)
    }

    /// Squared standard error of the mean
    fn error2_at(&self, cell: usize) -> f64 {
        let w = self.sum_w[cell];
        if w == 0.0 {
            return 0.0;
        }
        let mean = self.mean(cell);
        let variance = (self.sum_wv2[cell] / w - mean * mean).max(0.0);
        variance / w
    }

    fn stats(&self) -> HistStats {
        self.stats.clone()
    }

    fn entries(&self) -> u64 {
        self.stats.entries
    }

    /// A cell holding fills with a zero mean is not empty
    fn is_empty_at(&self, cell: usize) -> bool {
        self.sum_w[cell] == 0.0
    }
}

impl fmt::Display for ProfileND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProfileND(\"{}\", dim={}, cells={}, entries={})",
            self.title,
            self.binning.dimension(),
            self.binning.cells(),
            self.stats.entries
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile_1d(nbins: usize) -> ProfileND {
        ProfileND::new(1, &[0.0], &[10.0], &[nbins]).unwrap()
    }

    #[test]
    fn test_zero_mean_cell_is_not_empty() {
        let mut p = profile_1d(2);
        p.fill(&[2.0], -1.0).unwrap();
        p.fill(&[2.0], 1.0).unwrap();
        assert_eq!(p.cell_content(0).unwrap(), 0.0);

        let cells = p.cells_list(false);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].cell, 0);
        assert_relative_eq!(cells[0].error, 0.5_f64.sqrt());
        assert_eq!(p.cells_centers(false), vec![vec![2.5]]);
    }

    #[test]
    fn test_mean_of_two_values() {
        let mut p = profile_1d(1);
        assert_eq!(p.fill(&[5.0], 2.0).unwrap(), Some(0));
        assert_eq!(p.fill(&[5.0], 4.0).unwrap(), Some(0));

        assert_relative_eq!(p.cell_content(0).unwrap(), 3.0);
        // population variance 1 over 2 entries
        assert_relative_eq!(p.cell_content_error(0).unwrap(), 0.5f64.sqrt());
        assert_relative_eq!(p.cell_sum_of_weights(0).unwrap(), 2.0);
        assert_relative_eq!(p.sum_of_weighted_values(), 6.0);
        assert_relative_eq!(p.sum_of_weighted_values2(), 20.0);
        assert_eq!(p.entries(), 2);
    }

    #[test]
    fn test_weighted_mean() {
        let mut p = profile_1d(2);
        p.fill_pos(&[1.0], 10.0, 3.0).unwrap();
        p.fill_pos(&[2.0], 20.0, 1.0).unwrap();

        assert_relative_eq!(p.cell_content(0).unwrap(), 12.5);
        let variance: f64 = (3.0 * 100.0 + 400.0) / 4.0 - 12.5 * 12.5;
        assert_relative_eq!(p.cell_content_error(0).unwrap(), (variance / 4.0).sqrt());
        assert_eq!(p.cell_content(1).unwrap(), 0.0);
        assert_eq!(p.cell_content_error(1).unwrap(), 0.0);
    }

    #[test]
    fn test_value_range_filters_everything() {
        let mut p = profile_1d(2).with_value_range(ValueRange::new(0.0, 5.0).unwrap());
        assert_eq!(p.fill(&[1.0], 6.0).unwrap(), None);
        assert_eq!(p.fill_bins(&[0], -1.0, 1.0).unwrap(), None);
        assert_eq!(p.fill_cell(1, 5.5, 1.0).unwrap(), None);
        assert_eq!(p.entries(), 0);
        assert_eq!(p.sum_of_weighted_values(), 0.0);

        assert_eq!(p.fill(&[1.0], 5.0).unwrap(), Some(0));
        assert_eq!(p.entries(), 1);

        // malformed input is still an error
        assert!(matches!(p.fill(&[1.0, 2.0], 9.0), Err(Error::InvalidDomain(_))));
        assert!(matches!(p.fill_cell(2, 9.0, 1.0), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut p = profile_1d(2);
        assert_eq!(p.fill(&[-1.0], 1.0).unwrap(), None);
        assert_eq!(p.fill(&[11.0], 1.0).unwrap(), None);
        let stats = p.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.underflow_entries, 1);
        assert_eq!(stats.overflow_entries, 1);
        assert_eq!(p.sum_of_weighted_values(), 0.0);
        assert_eq!(p.cells_contents(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_scale_means() {
        let mut p = profile_1d(1);
        p.fill(&[5.0], 2.0).unwrap();
        p.fill(&[5.0], 4.0).unwrap();
        let error = p.cell_content_error(0).unwrap();

        p.scale(-2.0);
        assert_relative_eq!(p.cell_content(0).unwrap(), -6.0);
        assert_relative_eq!(p.cell_content_error(0).unwrap(), 2.0 * error);
        assert_relative_eq!(p.cell_sum_of_weights(0).unwrap(), 2.0);
        assert_relative_eq!(p.sum_of_weighted_values(), -12.0);
    }

    #[test]
    fn test_profile_projection_merges_accumulators() {
        let mut p = ProfileND::new(2, &[0.0, 0.0], &[2.0, 2.0], &[2, 2])
            .unwrap()
            .with_title("p");
        p.fill(&[0.5, 0.5], 1.0).unwrap();
        p.fill(&[0.5, 1.5], 3.0).unwrap();
        p.fill(&[0.5, 1.5], 5.0).unwrap();
        p.fill(&[1.5, 1.5], 10.0).unwrap();

        let px = p.profile_projection(&[0]).unwrap();
        assert_eq!(px.dimension(), 1);
        assert_relative_eq!(px.cell_content(0).unwrap(), 3.0);
        assert_relative_eq!(px.cell_content(1).unwrap(), 10.0);
        assert_eq!(px.entries(), 4);
        assert_relative_eq!(px.stats().mean(0), (3.0 * 0.5 + 1.5) / 4.0);
        assert_eq!(px.title(), "Projection of p");

        // plain projection sums the means instead
        let hx = p.projection(&[0]).unwrap();
        assert_relative_eq!(hx.cell_content(0).unwrap(), 1.0 + 4.0);
        assert_relative_eq!(hx.cell_content(1).unwrap(), 10.0);
    }

    #[test]
    fn test_arithmetic_uses_means() {
        let mut a = profile_1d(2).with_title("a");
        let mut b = profile_1d(2).with_title("b");
        a.fill(&[1.0], 4.0).unwrap();
        a.fill(&[6.0], 1.0).unwrap();
        b.fill(&[1.0], 2.0).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.cells_contents(), vec![6.0, 1.0]);
        assert_eq!(sum.title(), "a + b");
        assert_eq!(a.divide(&b), Err(Error::DivideByZero { cell: 1 }));
        let ratio = a
            .divide_with(&b, &ArithmeticConfig::zero_on_divide_by_zero())
            .unwrap();
        assert_eq!(ratio.cells_contents(), vec![2.0, 0.0]);
        assert_eq!(a.multiply(&b).unwrap().cells_contents(), vec![8.0, 0.0]);
        assert_eq!(a.subtract(&b).unwrap().cells_contents(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_display() {
        let p = profile_1d(4).with_title("pr");
        assert_eq!(p.to_string(), "ProfileND(\"pr\", dim=1, cells=4, entries=0)");
    }
}
