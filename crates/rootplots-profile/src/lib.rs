//! Profile histograms
//!
//! A profile records, for every cell of a [`Binning`], the weighted mean of
//! a value filled together with each position. [`ProfileND`] implements
//! [`BinnedContent`] with the cell means as contents and the standard error
//! of each mean as errors, so integration, projection and arithmetic from
//! `rootplots-hist` apply unchanged.
//!
//! # Example
//!
//! ```rust
//! use rootplots_profile::{BinnedContent, Profile1D, ValueRange};
//!
//! let mut p = Profile1D::new(1, 0.0, 10.0)
//!     .unwrap()
//!     .with_value_range(ValueRange::new(0.0, 100.0).unwrap());
//! p.fill(5.0, 2.0).unwrap();
//! p.fill(5.0, 4.0).unwrap();
//! p.fill(5.0, 500.0).unwrap(); // outside the value range, ignored
//!
//! assert_eq!(p.cell_content(0).unwrap(), 3.0);
//! assert_eq!(p.entries(), 2);
//! ```
//!
//! Collapsing axes either merges the raw accumulators, keeping the result a
//! profile, or yields a plain histogram of summed means:
//!
//! ```rust
//! use rootplots_profile::{BinnedContent, Profile2D};
//!
//! let mut p = Profile2D::new(2, 0.0, 2.0, 2, 0.0, 2.0).unwrap();
//! p.fill(0.5, 0.5, 1.0).unwrap();
//! p.fill(0.5, 1.5, 3.0).unwrap();
//!
//! assert_eq!(p.profile_x().unwrap().cell_content(0).unwrap(), 2.0);
//! assert_eq!(p.projection(&[0]).unwrap().cell_content(0).unwrap(), 4.0);
//! ```

pub mod dims;
pub mod profile;

pub use dims::{Profile1D, Profile2D, Profile3D};
pub use profile::ProfileND;

pub use rootplots_core::{BinnedContent, Binning, Error, HistStats, Result, ValueRange};
