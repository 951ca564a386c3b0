//! Plotting adapter for rootplots histograms and profiles
//!
//! Everything here reads through [`BinnedContent`] only; plotting never
//! changes the plotted object. [`geometry`] turns an object into plain
//! shapes, [`render`] draws those shapes to SVG with `plotters`.
//!
//! ```rust
//! use rootplots_viz::bars;
//! # use rootplots_core::{BinnedContent, Binning, HistStats};
//! # struct Flat(Binning);
//! # impl BinnedContent for Flat {
//! #     fn binning(&self) -> &Binning { &self.0 }
//! #     fn title(&self) -> &str { "flat" }
//! #     fn content_at(&self, _cell: usize) -> f64 { 2.0 }
//! #     fn error2_at(&self, _cell: usize) -> f64 { 4.0 }
//! #     fn stats(&self) -> HistStats { HistStats::new(1) }
//! # }
//! # let flat = Flat(Binning::from_ranges(1, &[0.0], &[2.0], &[2]).unwrap());
//! let shapes = bars(&flat).unwrap();
//! assert_eq!(shapes.len(), 2);
//! assert_eq!((shapes[1].left, shapes[1].right), (1.0, 2.0));
//! assert_eq!(shapes[0].error, 2.0);
//! ```
//!
//! [`BinnedContent`]: rootplots_core::BinnedContent

pub mod config;
pub mod error;
pub mod geometry;
pub mod render;

pub use config::PlotConfig;
pub use error::{Result, VizError};
pub use geometry::{bars, error_points, heat_cells, Bar, ErrorPoint, HeatCell};
pub use render::{plot_hist, plot_profile};
