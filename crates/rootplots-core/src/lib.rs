//! Core types for N-dimensional ROOT-style histograms
//!
//! This crate holds everything histograms and profiles have in common:
//!
//! - [`Axis`]: a linear, equal-width binned dimension
//! - [`CellIndexer`]: mixed-radix mapping between bin tuples and linear cells
//! - [`Binning`]: an ordered set of axes with its cell layout
//! - [`HistStats`]: fill bookkeeping (entries, weight sums, per-axis moments)
//! - [`BinnedContent`]: the read-only query contract, including integration
//!   and everything a plotting adapter reads
//!
//! # Cell layout
//!
//! Cells are addressed by a single linear index with the first axis varying
//! fastest:
//!
//! ```rust
//! use rootplots_core::CellIndexer;
//!
//! let indexer = CellIndexer::new(&[5, 6, 8]).unwrap();
//! let cell = indexer.bins_to_cell(&[4, 2, 6]).unwrap();
//! assert_eq!(cell, 4 + 5 * (2 + 6 * 6));
//! assert_eq!(indexer.cell_to_bins(cell).unwrap(), vec![4, 2, 6]);
//! ```
//!
//! # Locating positions
//!
//! ```rust
//! use rootplots_core::{Axis, BinLocation};
//!
//! let axis = Axis::new(10, 0.0, 10.0).unwrap();
//! assert_eq!(axis.get_bin(5.0), BinLocation::Bin(5));
//! assert_eq!(axis.get_bin(10.0), BinLocation::Overflow);
//! assert_eq!(axis.get_bin(-1.0), BinLocation::Underflow);
//! ```

pub mod axis;
pub mod binning;
pub mod config;
pub mod error;
pub mod indexer;
pub mod stats;
pub mod traits;

// Re-export core types
pub use axis::{Axis, BinLocation};
pub use binning::{Binning, Location};
pub use config::{ArithmeticConfig, ValueRange, ZeroDivisorPolicy, LARGE_CELL_COUNT};
pub use error::{Error, Result};
pub use indexer::{BoxCells, CellIndexer};
pub use stats::HistStats;
pub use traits::{BinnedContent, CellView};
