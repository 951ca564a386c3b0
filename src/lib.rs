//! ROOT-style N-dimensional histograms and profile histograms
//!
//! This crate re-exports the rootplots workspace:
//!
//! - [`core`]: axes, cell indexing, statistics and the [`BinnedContent`]
//!   query trait
//! - [`hist`]: [`HistND`] and its 1/2/3-D front ends
//! - [`profile`]: [`ProfileND`] and its 1/2/3-D front ends
//! - `viz` (feature `viz`): SVG rendering with `plotters`
//!
//! # Example
//!
//! ```rust
//! use rootplots::{BinnedContent, Hist2D, Profile1D};
//!
//! let mut h = Hist2D::new(2, 0.0, 2.0, 2, 0.0, 2.0).unwrap();
//! h.fill(0.5, 0.5).unwrap();
//! h.fill(1.5, 1.5).unwrap();
//! assert_eq!(h.projection_x().unwrap().cells_contents(), vec![1.0, 1.0]);
//!
//! let mut p = Profile1D::new(1, 0.0, 10.0).unwrap();
//! p.fill(5.0, 2.0).unwrap();
//! p.fill(5.0, 4.0).unwrap();
//! assert_eq!(p.cell_content(0).unwrap(), 3.0);
//! ```

pub use rootplots_core as core;
pub use rootplots_hist as hist;
pub use rootplots_profile as profile;

#[cfg(feature = "viz")]
pub use rootplots_viz as viz;

pub use rootplots_core::{
    ArithmeticConfig, Axis, BinLocation, BinnedContent, Binning, CellView, Error, HistStats,
    Result, ValueRange, ZeroDivisorPolicy,
};
pub use rootplots_hist::{BinaryOp, Hist1D, Hist2D, Hist3D, HistND};
pub use rootplots_profile::{Profile1D, Profile2D, Profile3D, ProfileND};
