//! Plot-ready shapes computed from the read-only query contract
//!
//! Nothing here touches a drawing backend, so the shapes can be checked
//! directly or handed to a different plotting library.

use crate::error::{Result, VizError};
use rootplots_core::BinnedContent;

/// One histogram bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub right: f64,
    pub height: f64,
    pub error: f64,
}

/// A marker with symmetric error bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    /// Half the bin width
    pub x_error: f64,
    pub y_error: f64,
}

/// One colored rectangle of a 2-D plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub content: f64,
}

fn require_dimension<B: BinnedContent + ?Sized>(source: &B, dim: usize) -> Result<()> {
    if source.dimension() != dim {
        return Err(VizError::Unsupported {
            dimension: source.dimension(),
        });
    }
    Ok(())
}

/// One bar per bin of a 1-D object, empty bins included
pub fn bars<B: BinnedContent + ?Sized>(source: &B) -> Result<Vec<Bar>> {
    require_dimension(source, 1)?;
    let edges = source.bins_edges(0)?;
    let contents = source.cells_contents();
    let errors = source.cells_contents_errors();

    Ok(edges
        .windows(2)
        .zip(contents.into_iter().zip(errors))
        .map(|(w, (height, error))| Bar {
            left: w[0],
            right: w[1],
            height,
            error,
        })
        .collect())
}

/// One point per non-empty bin of a 1-D object, at the bin center
pub fn error_points<B: BinnedContent + ?Sized>(source: &B) -> Result<Vec<ErrorPoint>> {
    require_dimension(source, 1)?;
    let axis = source.axis(0)?;
    let half_width = axis.bin_width() / 2.0;

    source
        .cells_iter(false)
        .map(|view| -> Result<ErrorPoint> {
            Ok(ErrorPoint {
                x: axis.get_bin_center(view.bins[0])?,
                y: view.content,
                x_error: half_width,
                y_error: view.error,
            })
        })
        .collect()
}

/// One rectangle per non-empty cell of a 2-D object
pub fn heat_cells<B: BinnedContent + ?Sized>(source: &B) -> Result<Vec<HeatCell>> {
    require_dimension(source, 2)?;
    let (ax, ay) = (source.axis(0)?, source.axis(1)?);

    source
        .cells_iter(false)
        .map(|view| -> Result<HeatCell> {
            let (i, j) = (view.bins[0], view.bins[1]);
            Ok(HeatCell {
                x: (ax.get_bin_lower_edge(i)?, ax.get_bin_upper_edge(i)?),
                y: (ay.get_bin_lower_edge(j)?, ay.get_bin_upper_edge(j)?),
                content: view.content,
            })
        })
        .collect()
}

/// Smallest and largest value, padded so a flat series still spans a range
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    if hi - lo < 1e-12 {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (if lo < 0.0 { lo - pad } else { lo }, hi + pad)
}
