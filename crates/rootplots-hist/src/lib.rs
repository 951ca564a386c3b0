//! N-dimensional weighted histograms
//!
//! [`HistND`] stores one content and one sum of squared weights per cell of a
//! [`Binning`]. Fills outside the axes are not stored but still counted in
//! the histogram's [`HistStats`]. [`Hist1D`], [`Hist2D`] and [`Hist3D`] are
//! thin front ends with positional fills and named projections.
//!
//! # Examples
//!
//! ## Filling and querying
//!
//! ```rust
//! use rootplots_hist::{BinnedContent, Hist1D};
//!
//! let mut h = Hist1D::new(10, 0.0, 10.0).unwrap();
//! h.fill(5.0).unwrap();
//! h.fill_weighted(5.5, 2.0).unwrap();
//! h.fill(12.0).unwrap(); // overflow, counted but not stored
//!
//! assert_eq!(h.cell_content(5).unwrap(), 3.0);
//! assert_eq!(h.entries(), 3);
//! assert_eq!(h.integral_all(), 3.0);
//! ```
//!
//! ## Arithmetic
//!
//! ```rust
//! use rootplots_hist::{ArithmeticConfig, BinnedContent, HistND};
//!
//! let mut num = HistND::new(1, &[0.0], &[2.0], &[2]).unwrap();
//! let mut den = HistND::new(1, &[0.0], &[2.0], &[2]).unwrap();
//! num.fill_pos(&[0.5], 6.0).unwrap();
//! den.fill_pos(&[0.5], 2.0).unwrap();
//!
//! // the second divisor cell is empty
//! assert!(num.divide(&den).is_err());
//!
//! let ratio = num
//!     .divide_with(&den, &ArithmeticConfig::zero_on_divide_by_zero())
//!     .unwrap();
//! assert_eq!(ratio.cells_contents(), vec![3.0, 0.0]);
//! ```
//!
//! ## Projection
//!
//! ```rust
//! use rootplots_hist::{BinnedContent, Hist2D};
//!
//! let mut h = Hist2D::new(4, 0.0, 4.0, 2, 0.0, 2.0).unwrap();
//! h.fill(1.5, 0.5).unwrap();
//! h.fill(1.5, 1.5).unwrap();
//!
//! let px = h.projection_x().unwrap();
//! assert_eq!(px.cells_contents(), vec![0.0, 2.0, 0.0, 0.0]);
//! ```

pub mod dims;
pub mod ops;
pub mod projection;
pub mod types;

pub use dims::{Hist1D, Hist2D, Hist3D};
pub use ops::{combine, BinaryOp};
pub use projection::project;
pub use types::HistND;

// Re-export the shared building blocks
pub use rootplots_core::{
    ArithmeticConfig, Axis, BinLocation, BinnedContent, Binning, CellView, Error, HistStats,
    Result, ZeroDivisorPolicy,
};
