//! Marginalisation onto a subset of axes

use crate::types::HistND;
use rootplots_core::{BinnedContent, Result};
use tracing::{debug, instrument};

/// Sum `source` over every axis not listed in `keep`
///
/// `keep` is sorted before use, so the result's axes follow the source
/// order. Contents and squared errors add; under/overflow bookkeeping is
/// carried over so the result reports the same total weight as the source.
#[instrument(level = "debug", skip_all, fields(keep = ?keep))]
pub fn project<B: BinnedContent + ?Sized>(source: &B, keep: &[usize]) -> Result<HistND> {
    let keep = source.binning().normalize_keep(keep)?;
    let binning = source.binning().select(&keep)?;
    debug!(from = source.dimension(), cells = binning.cells(), "projecting");

    let mut contents = vec![0.0; binning.cells()];
    let mut errors2 = vec![0.0; binning.cells()];
    let mut bins = vec![0; source.dimension()];
    let mut kept = vec![0; keep.len()];

    for cell in 0..source.cells() {
        source.binning().indexer().cell_to_bins_into(cell, &mut bins)?;
        for (slot, &k) in kept.iter_mut().zip(&keep) {
            *slot = bins[k];
        }
        let target = binning.bins_to_cell(&kept)?;
        contents[target] += source.content_at(cell);
        errors2[target] += source.error2_at(cell);
    }

    let source_stats = source.stats();
    let mut result = HistND::from_cells(binning, contents, errors2, source_stats.entries)?
        .with_title(format!("Projection of {}", source.title()));

    let stats = result.stats_mut();
    stats.underflow_entries = source_stats.underflow_entries;
    stats.overflow_entries = source_stats.overflow_entries;
    stats.underflow_weight = source_stats.underflow_weight;
    stats.overflow_weight = source_stats.overflow_weight;
    stats.sum_of_weights += source_stats.underflow_weight + source_stats.overflow_weight;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rootplots_core::Error;

    fn filled_3d() -> HistND {
        let mut h = HistND::new(3, &[0.0; 3], &[2.0, 3.0, 4.0], &[2, 3, 4])
            .unwrap()
            .with_title("cube");
        for cell in 0..h.cells() {
            h.fill_cell(cell, cell as f64 + 1.0).unwrap();
        }
        h
    }

    #[test]
    fn test_projection_preserves_totals() {
        let h = filled_3d();
        let total: f64 = h.cells_contents().iter().sum();

        for keep in [vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2], vec![1, 2]] {
            let p = project(&h, &keep).unwrap();
            assert_eq!(p.dimension(), keep.len());
            assert_relative_eq!(p.cells_contents().iter().sum::<f64>(), total, epsilon = 1e-9);
            assert_eq!(p.entries(), h.entries());
            assert_eq!(p.title(), "Projection of cube");
        }
    }

    #[test]
    fn test_projection_cell_values() {
        let h = filled_3d();
        let px = project(&h, &[0]).unwrap();
        // bin 0 of axis 0 holds the even cells: sum of (cell + 1) for even cell
        let even: f64 = (0..24).filter(|c| c % 2 == 0).map(|c| c as f64 + 1.0).sum();
        assert_relative_eq!(px.cell_content(0).unwrap(), even);

        let error2: f64 = (0..24)
            .filter(|c| c % 2 == 1)
            .map(|c| (c as f64 + 1.0).powi(2))
            .sum();
        assert_relative_eq!(px.cell_content_error(1).unwrap(), error2.sqrt());
    }

    #[test]
    fn test_keep_order_is_normalized() {
        let h = filled_3d();
        let a = project(&h, &[2, 0]).unwrap();
        let b = project(&h, &[0, 2]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.axis(0).unwrap().nbins(), 2);
        assert_eq!(a.axis(1).unwrap().nbins(), 4);
    }

    #[test]
    fn test_invalid_keep_sets() {
        let h = filled_3d();
        assert!(matches!(project(&h, &[]), Err(Error::InvalidDomain(_))));
        assert!(matches!(project(&h, &[1, 1]), Err(Error::InvalidDomain(_))));
        assert!(matches!(project(&h, &[3]), Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_out_of_range_weight_carried() {
        let mut h = HistND::new(2, &[0.0, 0.0], &[1.0, 1.0], &[2, 2]).unwrap();
        h.fill_pos(&[0.2, 0.7], 1.0).unwrap();
        h.fill_pos(&[0.2, 5.0], 2.0).unwrap();

        let p = project(&h, &[0]).unwrap();
        let stats = p.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.overflow_entries, 1);
        assert_relative_eq!(stats.sum_of_weights, 3.0);
        assert_relative_eq!(stats.in_range_weight(), 1.0);
        assert_relative_eq!(stats.mean(0), 0.25);
    }
}
