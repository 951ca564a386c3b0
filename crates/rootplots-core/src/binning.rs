//! Axis set plus cell layout, shared by histograms and profiles

use crate::axis::{Axis, BinLocation};
use crate::config::LARGE_CELL_COUNT;
use crate::error::{Error, Result};
use crate::indexer::CellIndexer;
use tracing::warn;

/// Result of locating a point in the binned space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The point lies in a regular cell
    Cell { cell: usize, bins: Vec<usize> },
    /// The first out-of-range axis was below its lower edge
    Underflow { axis: usize },
    /// The first out-of-range axis was at or above its upper edge
    Overflow { axis: usize },
}

/// Ordered axes and the mixed-radix layout of their cells
#[derive(Debug, Clone, PartialEq)]
pub struct Binning {
    axes: Vec<Axis>,
    indexer: CellIndexer,
}

impl Binning {
    /// Combine axes into a binned space of `axes.len()` dimensions
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        let sizes: Vec<usize> = axes.iter().map(Axis::nbins).collect();
        let indexer = CellIndexer::new(&sizes)?;
        if indexer.cells() > LARGE_CELL_COUNT {
            warn!(
                cells = indexer.cells(),
                "allocating a very large histogram, memory grows with the product of bin counts"
            );
        }
        Ok(Self { axes, indexer })
    }

    /// Build axes from parallel `mins`, `maxs` and `nbins` arrays
    pub fn from_ranges(dim: usize, mins: &[f64], maxs: &[f64], nbins: &[usize]) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidDomain(
                "dimension must be at least 1".to_string(),
            ));
        }
        let lengths = [
            (mins.len(), "minimum edges"),
            (maxs.len(), "maximum edges"),
            (nbins.len(), "bin counts"),
        ];
        for (len, what) in lengths {
            if len != dim {
                return Err(Error::dimension_mismatch(dim, len, what));
            }
        }

        let axes = (0..dim)
            .map(|k| Axis::new(nbins[k], mins[k], maxs[k]))
            .collect::<Result<Vec<_>>>()?;
        Self::new(axes)
    }

    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// Total number of cells
    pub fn cells(&self) -> usize {
        self.indexer.cells()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, k: usize) -> Result<&Axis> {
        self.axes.get(k).ok_or(Error::IndexOutOfRange {
            index: k,
            bound: self.axes.len(),
        })
    }

    pub fn axis_mut(&mut self, k: usize) -> Result<&mut Axis> {
        let bound = self.axes.len();
        self.axes
            .get_mut(k)
            .ok_or(Error::IndexOutOfRange { index: k, bound })
    }

    pub fn indexer(&self) -> &CellIndexer {
        &self.indexer
    }

    pub fn bins_to_cell(&self, bins: &[usize]) -> Result<usize> {
        self.indexer.bins_to_cell(bins)
    }

    pub fn cell_to_bins(&self, cell: usize) -> Result<Vec<usize>> {
        self.indexer.cell_to_bins(cell)
    }

    /// Locate a position; under/overflow is a normal outcome, not an error
    pub fn locate(&self, position: &[f64]) -> Result<Location> {
        self.check_position(position)?;

        let mut bins = Vec::with_capacity(self.dimension());
        for (k, (axis, &x)) in self.axes.iter().zip(position).enumerate() {
            match axis.get_bin(x) {
                BinLocation::Bin(i) => bins.push(i),
                BinLocation::Underflow => return Ok(Location::Underflow { axis: k }),
                BinLocation::Overflow => return Ok(Location::Overflow { axis: k }),
            }
        }

        let cell = self.indexer.bins_to_cell_unchecked(&bins);
        Ok(Location::Cell { cell, bins })
    }

    /// Bin tuple of a position that must fall inside every axis
    pub fn position_to_bins(&self, position: &[f64]) -> Result<Vec<usize>> {
        match self.locate(position)? {
            Location::Cell { bins, .. } => Ok(bins),
            Location::Underflow { axis } | Location::Overflow { axis } => {
                Err(Error::PositionOutOfRange {
                    axis,
                    position: position[axis],
                })
            }
        }
    }

    /// Cell of a position that must fall inside every axis
    pub fn position_to_cell(&self, position: &[f64]) -> Result<usize> {
        let bins = self.position_to_bins(position)?;
        Ok(self.indexer.bins_to_cell_unchecked(&bins))
    }

    /// Center coordinates of each bin in the tuple
    pub fn bin_centers(&self, bins: &[usize]) -> Vec<f64> {
        self.axes
            .iter()
            .zip(bins)
            .map(|(axis, &i)| axis.center_unchecked(i))
            .collect()
    }

    /// Volume of one cell, the product of all bin widths
    pub fn cell_volume(&self) -> f64 {
        self.axes.iter().map(Axis::bin_width).product()
    }

    /// Same dimension and same bins on every axis, in order
    pub fn is_compatible(&self, other: &Binning) -> bool {
        self.dimension() == other.dimension()
            && self
                .axes
                .iter()
                .zip(&other.axes)
                .all(|(a, b)| a.same_binning(b))
    }

    /// Fail with [`Error::IncompatibleAxes`] unless `other` has the same binning
    pub fn ensure_compatible(&self, other: &Binning) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(Error::IncompatibleAxes(format!(
                "dimension {} vs {}",
                self.dimension(),
                other.dimension()
            )));
        }
        for (k, (a, b)) in self.axes.iter().zip(&other.axes).enumerate() {
            if !a.same_binning(b) {
                return Err(Error::IncompatibleAxes(format!("axis {k}: {a} vs {b}")));
            }
        }
        Ok(())
    }

    /// Validate a set of axes to keep and return it in ascending order
    pub fn normalize_keep(&self, keep: &[usize]) -> Result<Vec<usize>> {
        if keep.is_empty() {
            return Err(Error::InvalidDomain(
                "projection must keep at least one axis".to_string(),
            ));
        }

        let mut sorted = keep.to_vec();
        sorted.sort_unstable();
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::InvalidDomain(format!(
                "axis {} listed more than once",
                w[0]
            )));
        }
        if let Some(&last) = sorted.last() {
            if last >= self.dimension() {
                return Err(Error::InvalidDomain(format!(
                    "axis {last} does not exist in a {}-dimensional histogram",
                    self.dimension()
                )));
            }
        }
        Ok(sorted)
    }

    /// Binning made of the given axes; `keep` must come from [`Binning::normalize_keep`]
    pub fn select(&self, keep: &[usize]) -> Result<Binning> {
        let axes = keep
            .iter()
            .map(|&k| self.axis(k).cloned())
            .collect::<Result<Vec<_>>>()?;
        Binning::new(axes)
    }

    fn check_position(&self, position: &[f64]) -> Result<()> {
        if position.len() != self.dimension() {
            return Err(Error::dimension_mismatch(
                self.dimension(),
                position.len(),
                "position",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn binning_2d() -> Binning {
        Binning::from_ranges(2, &[0.0, -1.0], &[4.0, 1.0], &[4, 2]).unwrap()
    }

    #[test]
    fn test_from_ranges_validation() {
        assert!(matches!(
            Binning::from_ranges(0, &[], &[], &[]),
            Err(Error::InvalidDomain(_))
        ));
        assert!(matches!(
            Binning::from_ranges(2, &[0.0], &[1.0, 1.0], &[1, 1]),
            Err(Error::InvalidDomain(_))
        ));
        assert!(matches!(
            Binning::from_ranges(1, &[1.0], &[0.0], &[3]),
            Err(Error::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_locate() {
        let binning = binning_2d();
        assert_eq!(
            binning.locate(&[2.5, 0.5]).unwrap(),
            Location::Cell { cell: 2 + 4, bins: vec![2, 1] }
        );
        assert_eq!(
            binning.locate(&[-1.0, 5.0]).unwrap(),
            Location::Underflow { axis: 0 }
        );
        assert_eq!(
            binning.locate(&[1.0, 5.0]).unwrap(),
            Location::Overflow { axis: 1 }
        );
        assert!(matches!(
            binning.locate(&[1.0]),
            Err(Error::InvalidDomain(_))
        ));
        assert_eq!(
            binning.position_to_cell(&[1.0, 1.0]),
            Err(Error::PositionOutOfRange { axis: 1, position: 1.0 })
        );
    }

    #[test]
    fn test_geometry() {
        let binning = binning_2d();
        assert_eq!(binning.cells(), 8);
        assert_relative_eq!(binning.cell_volume(), 1.0);
        assert_eq!(binning.bin_centers(&[3, 0]), vec![3.5, -0.5]);
    }

    #[test]
    fn test_compatibility() {
        let a = binning_2d();
        let b = binning_2d();
        let c = Binning::from_ranges(2, &[0.0, -1.0], &[4.0, 2.0], &[4, 2]).unwrap();
        let d = Binning::from_ranges(1, &[0.0], &[4.0], &[4]).unwrap();
        assert!(a.is_compatible(&b));
        assert!(a.ensure_compatible(&b).is_ok());
        assert!(!a.is_compatible(&c));
        assert!(matches!(a.ensure_compatible(&c), Err(Error::IncompatibleAxes(_))));
        assert!(matches!(a.ensure_compatible(&d), Err(Error::IncompatibleAxes(_))));
    }

    #[test]
    fn test_normalize_keep() {
        let binning = Binning::from_ranges(3, &[0.0; 3], &[1.0; 3], &[2, 3, 4]).unwrap();
        assert_eq!(binning.normalize_keep(&[2, 0]).unwrap(), vec![0, 2]);
        assert!(matches!(binning.normalize_keep(&[]), Err(Error::InvalidDomain(_))));
        assert!(matches!(binning.normalize_keep(&[1, 1]), Err(Error::InvalidDomain(_))));
        assert!(matches!(binning.normalize_keep(&[3]), Err(Error::InvalidDomain(_))));

        let selected = binning.select(&[0, 2]).unwrap();
        assert_eq!(selected.dimension(), 2);
        assert_eq!(selected.indexer().sizes(), &[2, 4]);
        assert!(binning.select(&[0, 3]).is_err());
    }
}
