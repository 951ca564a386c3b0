//! Mixed-radix mapping between per-axis bin tuples and linear cell indices
//!
//! The first axis varies fastest: `cell = i0 + n0 * (i1 + n1 * (i2 + ...))`.

use crate::error::{Error, Result};

/// Bijection between bin-index tuples and cell indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellIndexer {
    sizes: Vec<usize>,
    strides: Vec<usize>,
    cells: usize,
}

impl CellIndexer {
    /// Build an indexer over axes with the given bin counts
    pub fn new(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::InvalidDomain(
                "a cell layout needs at least one axis".to_string(),
            ));
        }

        let mut strides = Vec::with_capacity(sizes.len());
        let mut cells: usize = 1;
        for (k, &n) in sizes.iter().enumerate() {
            if n == 0 {
                return Err(Error::InvalidDomain(format!("axis {k} has no bins")));
            }
            strides.push(cells);
            cells = cells.checked_mul(n).ok_or_else(|| {
                Error::InvalidDomain(format!("cell count overflows at axis {k}"))
            })?;
        }

        Ok(Self {
            sizes: sizes.to_vec(),
            strides,
            cells,
        })
    }

    /// Number of axes
    pub fn dimension(&self) -> usize {
        self.sizes.len()
    }

    /// Total number of cells, the product of all bin counts
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Bin counts per axis
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Linear cell index of a bin tuple
    pub fn bins_to_cell(&self, bins: &[usize]) -> Result<usize> {
        if bins.len() != self.dimension() {
            return Err(Error::dimension_mismatch(
                self.dimension(),
                bins.len(),
                "bin index tuple",
            ));
        }
        for (&i, &n) in bins.iter().zip(&self.sizes) {
            Error::check_index(i, n)?;
        }
        Ok(self.bins_to_cell_unchecked(bins))
    }

    /// Bin tuple of a linear cell index
    pub fn cell_to_bins(&self, cell: usize) -> Result<Vec<usize>> {
        let mut bins = vec![0; self.dimension()];
        self.cell_to_bins_into(cell, &mut bins)?;
        Ok(bins)
    }

    /// Decompose `cell` into a caller-provided buffer of length `dimension()`
    pub fn cell_to_bins_into(&self, cell: usize, bins: &mut [usize]) -> Result<()> {
        Error::check_index(cell, self.cells)?;
        if bins.len() != self.dimension() {
            return Err(Error::dimension_mismatch(
                self.dimension(),
                bins.len(),
                "bin index buffer",
            ));
        }
        self.decompose(cell, bins);
        Ok(())
    }

    /// Iterate the cells of the inclusive box `[low, high]`, in ascending cell order
    pub fn iter_box(&self, low: &[usize], high: &[usize]) -> Result<BoxCells<'_>> {
        self.bins_to_cell(low)?;
        self.bins_to_cell(high)?;
        Error::check_bounds(low, high)?;

        Ok(BoxCells {
            indexer: self,
            low: low.to_vec(),
            high: high.to_vec(),
            current: Some(low.to_vec()),
        })
    }

    pub(crate) fn bins_to_cell_unchecked(&self, bins: &[usize]) -> usize {
        bins.iter().zip(&self.strides).map(|(i, s)| i * s).sum()
    }

    pub(crate) fn decompose(&self, cell: usize, bins: &mut [usize]) {
        let mut rest = cell;
        for (slot, &n) in bins.iter_mut().zip(&self.sizes) {
            *slot = rest % n;
            rest /= n;
        }
    }
}

/// Iterator over the cells of an inclusive N-D bin box
#[derive(Debug, Clone)]
pub struct BoxCells<'a> {
    indexer: &'a CellIndexer,
    low: Vec<usize>,
    high: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Iterator for BoxCells<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let bins = self.current.as_mut()?;
        let cell = self.indexer.bins_to_cell_unchecked(bins);

        // odometer step, first axis fastest
        let mut advanced = false;
        for k in 0..bins.len() {
            if bins[k] < self.high[k] {
                bins[k] += 1;
                advanced = true;
                break;
            }
            bins[k] = self.low[k];
        }
        if !advanced {
            self.current = None;
        }

        Some(cell)
    }
}
