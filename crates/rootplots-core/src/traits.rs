//! Read-only query contract shared by histograms and profiles
//!
//! A type only has to expose its [`Binning`], title, and the effective
//! content and squared error of a cell; lookups, snapshots, integration and
//! the data the plotting adapter needs are provided on top of that.

use crate::axis::Axis;
use crate::binning::Binning;
use crate::error::{Error, Result};
use crate::stats::HistStats;

/// One cell as seen through [`BinnedContent::cells_iter`]
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub cell: usize,
    pub bins: Vec<usize>,
    pub content: f64,
    pub error: f64,
}

/// Binned data that can be queried cell by cell
pub trait BinnedContent {
    /// Axes and cell layout
    fn binning(&self) -> &Binning;

    /// Display title, no functional role
    fn title(&self) -> &str;

    /// Effective content of a cell known to be in range
    fn content_at(&self, cell: usize) -> f64;

    /// Squared error of a cell known to be in range
    fn error2_at(&self, cell: usize) -> f64;

    /// Fill bookkeeping
    fn stats(&self) -> HistStats;

    fn dimension(&self) -> usize {
        self.binning().dimension()
    }

    /// Number of cells, the product of all bin counts
    fn cells(&self) -> usize {
        self.binning().cells()
    }

    /// Number of fill calls, including under/overflow
    fn entries(&self) -> u64 {
        self.stats().entries
    }

    fn axes(&self) -> &[Axis] {
        self.binning().axes()
    }

    fn axis(&self, k: usize) -> Result<&Axis> {
        self.binning().axis(k)
    }

    fn cell_content(&self, cell: usize) -> Result<f64> {
        Error::check_index(cell, self.cells())?;
        Ok(self.content_at(cell))
    }

    fn cell_content_error(&self, cell: usize) -> Result<f64> {
        Error::check_index(cell, self.cells())?;
        Ok(self.error2_at(cell).sqrt())
    }

    /// Content of the cell containing `position`
    fn pos_content(&self, position: &[f64]) -> Result<f64> {
        let cell = self.binning().position_to_cell(position)?;
        Ok(self.content_at(cell))
    }

    /// Snapshot of every cell content, indexed by cell
    fn cells_contents(&self) -> Vec<f64> {
        (0..self.cells()).map(|c| self.content_at(c)).collect()
    }

    /// Snapshot of every cell error, indexed by cell
    fn cells_contents_errors(&self) -> Vec<f64> {
        (0..self.cells()).map(|c| self.error2_at(c).sqrt()).collect()
    }

    /// Whether a cell counts as empty when iterating; zero content by default
    fn is_empty_at(&self, cell: usize) -> bool {
        self.content_at(cell) == 0.0
    }

    /// Cells in ascending order, optionally skipping empty ones
    fn cells_iter(&self, include_empty: bool) -> Box<dyn Iterator<Item = CellView> + '_> {
        let binning = self.binning();
        Box::new((0..self.cells()).filter_map(move |cell| {
            if !include_empty && self.is_empty_at(cell) {
                return None;
            }
            let content = self.content_at(cell);
            let mut bins = vec![0; binning.dimension()];
            binning.indexer().decompose(cell, &mut bins);
            Some(CellView {
                cell,
                bins,
                content,
                error: self.error2_at(cell).sqrt(),
            })
        }))
    }

    /// Collected form of [`BinnedContent::cells_iter`]
    fn cells_list(&self, include_empty: bool) -> Vec<CellView> {
        self.cells_iter(include_empty).collect()
    }

    /// Bin edges of axis `k`
    fn bins_edges(&self, k: usize) -> Result<Vec<f64>> {
        Ok(self.axis(k)?.get_bins_edges())
    }

    /// Bin centers of axis `k`
    fn bins_centers(&self, k: usize) -> Result<Vec<f64>> {
        Ok(self.axis(k)?.get_bins_centers())
    }

    /// Per-axis lower edges of the selected cells, one list per axis
    fn cells_lower_edges(&self, include_empty: bool) -> Vec<Vec<f64>> {
        cells_coordinates(self, include_empty, |axis, i| {
            axis.min_bin() + i as f64 * axis.bin_width()
        })
    }

    /// Per-axis centers of the selected cells, one list per axis
    fn cells_centers(&self, include_empty: bool) -> Vec<Vec<f64>> {
        cells_coordinates(self, include_empty, |axis, i| {
            axis.min_bin() + (i as f64 + 0.5) * axis.bin_width()
        })
    }

    /// Sum of `content * cell_volume` over the inclusive box of bin tuples `[low, high]`
    fn integral_over_bins(&self, low: &[usize], high: &[usize]) -> Result<f64> {
        let volume = self.binning().cell_volume();
        let sum: f64 = self
            .binning()
            .indexer()
            .iter_box(low, high)?
            .map(|cell| self.content_at(cell))
            .sum();
        Ok(sum * volume)
    }

    /// Integral over the box spanned by two cells
    fn integral(&self, cell_low: usize, cell_high: usize) -> Result<f64> {
        let low = self.binning().cell_to_bins(cell_low)?;
        let high = self.binning().cell_to_bins(cell_high)?;
        self.integral_over_bins(&low, &high)
    }

    /// Integral over the cells containing `low` through the cells containing `high`
    fn integral_over_pos(&self, low: &[f64], high: &[f64]) -> Result<f64> {
        Error::check_bounds(low, high)?;
        let low = self.binning().position_to_bins(low)?;
        let high = self.binning().position_to_bins(high)?;
        self.integral_over_bins(&low, &high)
    }

    /// Integral over every cell
    fn integral_all(&self) -> f64 {
        let sum: f64 = (0..self.cells()).map(|c| self.content_at(c)).sum();
        sum * self.binning().cell_volume()
    }
}

fn cells_coordinates<B: BinnedContent + ?Sized>(
    source: &B,
    include_empty: bool,
    coord: fn(&Axis, usize) -> f64,
) -> Vec<Vec<f64>> {
    let axes = source.axes();
    let mut result = vec![Vec::new(); axes.len()];
    for view in source.cells_iter(include_empty) {
        for (k, &i) in view.bins.iter().enumerate() {
            result[k].push(coord(&axes[k], i));
        }
    }
    result
}

/// Implement [`BinnedContent`] for a newtype by delegating to its `.0` field
#[macro_export]
macro_rules! delegate_binned_content {
    ($wrapper:ty) => {
        impl $crate::BinnedContent for $wrapper {
            fn binning(&self) -> &$crate::Binning {
                $crate::BinnedContent::binning(&self.0)
            }
            fn title(&self) -> &str {
                $crate::BinnedContent::title(&self.0)
            }
            fn content_at(&self, cell: usize) -> f64 {
                $crate::BinnedContent::content_at(&self.0, cell)
            }
            fn error2_at(&self, cell: usize) -> f64 {
                $crate::BinnedContent::error2_at(&self.0, cell)
            }
            fn is_empty_at(&self, cell: usize) -> bool {
                $crate::BinnedContent::is_empty_at(&self.0, cell)
            }
            fn stats(&self) -> $crate::HistStats {
                $crate::BinnedContent::stats(&self.0)
            }
            fn entries(&self) -> u64 {
                $crate::BinnedContent::entries(&self.0)
            }
        }
    };
}
