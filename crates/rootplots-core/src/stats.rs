//! Fill bookkeeping and the per-axis statistics derived from it

use crate::binning::Binning;
use crate::error::{Error, Result};
use std::fmt;

/// Aggregate statistics of all fills into a histogram or profile
///
/// Under/overflow fills count towards `entries`, `sum_of_weights` and
/// `sum_of_weights2` but not towards the per-axis sums, so `mean` and `rms`
/// describe the in-range content only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistStats {
    /// Number of fill calls, in range or not
    pub entries: u64,
    /// Fills that underflowed on their first out-of-range axis
    pub underflow_entries: u64,
    /// Fills that overflowed on their first out-of-range axis
    pub overflow_entries: u64,
    /// Weight carried by underflow fills
    pub underflow_weight: f64,
    /// Weight carried by overflow fills
    pub overflow_weight: f64,
    /// Total sum of weights
    pub sum_of_weights: f64,
    /// Total sum of squared weights
    pub sum_of_weights2: f64,
    /// Sum of `weight * x_k` per axis
    pub sum_of_weights_x: Vec<f64>,
    /// Sum of `weight * x_k^2` per axis
    pub sum_of_weights_x2: Vec<f64>,
}

impl HistStats {
    /// Empty statistics for a `dimension`-dimensional space
    pub fn new(dimension: usize) -> Self {
        Self {
            sum_of_weights_x: vec![0.0; dimension],
            sum_of_weights_x2: vec![0.0; dimension],
            ..Default::default()
        }
    }

    /// Statistics of a histogram built directly from cell contents
    ///
    /// Per-axis sums use bin centers; `entries` is supplied by the caller.
    pub fn from_cells(binning: &Binning, contents: &[f64], errors2: &[f64], entries: u64) -> Self {
        let mut stats = Self::new(binning.dimension());
        stats.entries = entries;

        let mut bins = vec![0; binning.dimension()];
        for (cell, (&w, &e2)) in contents.iter().zip(errors2).enumerate() {
            stats.sum_of_weights += w;
            stats.sum_of_weights2 += e2;
            if w == 0.0 {
                continue;
            }
            binning.indexer().decompose(cell, &mut bins);
            for (k, x) in binning.bin_centers(&bins).into_iter().enumerate() {
                stats.sum_of_weights_x[k] += w * x;
                stats.sum_of_weights_x2[k] += w * x * x;
            }
        }
        stats
    }

    /// Record an in-range fill at `coords`, one coordinate per axis
    pub fn record(&mut self, weight: f64, coords: &[f64]) -> Result<()> {
        if coords.len() != self.sum_of_weights_x.len() {
            return Err(Error::dimension_mismatch(
                self.sum_of_weights_x.len(),
                coords.len(),
                "fill coordinates",
            ));
        }
        self.entries += 1;
        self.sum_of_weights += weight;
        self.sum_of_weights2 += weight * weight;
        for (k, &x) in coords.iter().enumerate() {
            self.sum_of_weights_x[k] += weight * x;
            self.sum_of_weights_x2[k] += weight * x * x;
        }
        Ok(())
    }

    pub fn record_underflow(&mut self, weight: f64) {
        self.record_out_of_range(weight);
        self.underflow_entries += 1;
        self.underflow_weight += weight;
    }

    pub fn record_overflow(&mut self, weight: f64) {
        self.record_out_of_range(weight);
        self.overflow_entries += 1;
        self.overflow_weight += weight;
    }

    /// Scale every weight sum as if each fill weight had been multiplied by `factor`
    pub fn scale(&mut self, factor: f64) {
        self.underflow_weight *= factor;
        self.overflow_weight *= factor;
        self.sum_of_weights *= factor;
        self.sum_of_weights2 *= factor * factor;
        for v in self
            .sum_of_weights_x
            .iter_mut()
            .chain(self.sum_of_weights_x2.iter_mut())
        {
            *v *= factor;
        }
    }

    /// Weight that landed in regular cells
    pub fn in_range_weight(&self) -> f64 {
        self.sum_of_weights - self.underflow_weight - self.overflow_weight
    }

    /// Weighted mean coordinate on axis `k`, 0 when nothing is in range
    pub fn mean(&self, k: usize) -> f64 {
        let w = self.in_range_weight();
        match self.sum_of_weights_x.get(k) {
            Some(&sx) if w != 0.0 => sx / w,
            _ => 0.0,
        }
    }

    /// Weighted RMS (standard deviation) of the coordinate on axis `k`
    pub fn rms(&self, k: usize) -> f64 {
        let w = self.in_range_weight();
        match self.sum_of_weights_x2.get(k) {
            Some(&sx2) if w != 0.0 => {
                let mean = self.mean(k);
                (sx2 / w - mean * mean).max(0.0).sqrt()
            }
            _ => 0.0,
        }
    }

    /// Means of all axes
    pub fn means(&self) -> Vec<f64> {
        (0..self.sum_of_weights_x.len()).map(|k| self.mean(k)).collect()
    }

    /// RMS values of all axes
    pub fn rms_values(&self) -> Vec<f64> {
        (0..self.sum_of_weights_x.len()).map(|k| self.rms(k)).collect()
    }

    fn record_out_of_range(&mut self, weight: f64) {
        self.entries += 1;
        self.sum_of_weights += weight;
        self.sum_of_weights2 += weight * weight;
    }
}

impl fmt::Display for HistStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries={} underflow={} overflow={} sumw={:.3}",
            self.entries, self.underflow_entries, self.overflow_entries, self.sum_of_weights
        )?;
        for k in 0..self.sum_of_weights_x.len() {
            write!(f, " mean[{k}]={:.3} rms[{k}]={:.3}", self.mean(k), self.rms(k))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_and_moments() {
        let mut stats = HistStats::new(1);
        stats.record(1.0, &[2.0]).unwrap();
        stats.record(1.0, &[4.0]).unwrap();
        stats.record_overflow(3.0);

        assert_eq!(stats.entries, 3);
        assert_eq!(stats.overflow_entries, 1);
        assert_relative_eq!(stats.sum_of_weights, 5.0);
        assert_relative_eq!(stats.sum_of_weights2, 11.0);
        assert_relative_eq!(stats.in_range_weight(), 2.0);
        assert_relative_eq!(stats.mean(0), 3.0);
        assert_relative_eq!(stats.rms(0), 1.0);
        assert_eq!(stats.mean(5), 0.0);
    }

    #[test]
    fn test_record_rejects_wrong_coordinate_count() {
        let mut stats = HistStats::new(2);
        assert!(matches!(stats.record(1.0, &[1.0]), Err(Error::InvalidDomain(_))));
        assert!(matches!(
            stats.record(1.0, &[1.0, 2.0, 3.0]),
            Err(Error::InvalidDomain(_))
        ));
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.sum_of_weights, 0.0);
    }

    #[test]
    fn test_scale_keeps_moments() {
        let mut stats = HistStats::new(2);
        stats.record(2.0, &[1.0, -1.0]).unwrap();
        stats.record(1.0, &[3.0, 2.0]).unwrap();
        stats.record_underflow(0.5);
        let means = stats.means();
        let rms = stats.rms_values();

        stats.scale(4.0);
        assert_relative_eq!(stats.sum_of_weights, 14.0);
        assert_relative_eq!(stats.underflow_weight, 2.0);
        for k in 0..2 {
            assert_relative_eq!(stats.mean(k), means[k], epsilon = 1e-12);
            assert_relative_eq!(stats.rms(k), rms[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = HistStats::new(3);
        assert_eq!(stats.means(), vec![0.0; 3]);
        assert_eq!(stats.rms_values(), vec![0.0; 3]);
        assert!(stats.to_string().starts_with("entries=0"));
    }
}
