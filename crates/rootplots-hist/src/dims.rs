//! Fixed-dimension front ends over [`HistND`]
//!
//! Each wrapper derefs to the underlying [`HistND`], so the whole N-D API is
//! available; the wrappers add positional fill methods and named projections.

use crate::projection::project;
use crate::types::HistND;
use rootplots_core::{delegate_binned_content, BinnedContent, Binning, Error, Result};
use std::ops::{Deref, DerefMut};

macro_rules! impl_wrapper {
    ($name:ident, $dim:expr) => {
        impl $name {
            pub fn with_title(self, title: impl Into<String>) -> Self {
                Self(self.0.with_title(title))
            }

            /// Unwrap into the N-D histogram
            pub fn into_inner(self) -> HistND {
                self.0
            }
        }

        impl Deref for $name {
            type Target = HistND;

            fn deref(&self) -> &HistND {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut HistND {
                &mut self.0
            }
        }

        impl TryFrom<HistND> for $name {
            type Error = Error;

            fn try_from(hist: HistND) -> Result<Self> {
                let dim = hist.binning().dimension();
                if dim != $dim {
                    return Err(Error::dimension_mismatch($dim, dim, stringify!($name)));
                }
                Ok(Self(hist))
            }
        }

        impl From<$name> for HistND {
            fn from(hist: $name) -> HistND {
                hist.0
            }
        }

        delegate_binned_content!($name);
    };
}

/// One-dimensional histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Hist1D(HistND);

/// Two-dimensional histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Hist2D(HistND);

/// Three-dimensional histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Hist3D(HistND);

impl_wrapper!(Hist1D, 1);
impl_wrapper!(Hist2D, 2);
impl_wrapper!(Hist3D, 3);

impl Hist1D {
    pub fn new(nbins: usize, min: f64, max: f64) -> Result<Self> {
        Ok(Self(HistND::new(1, &[min], &[max], &[nbins])?))
    }

    pub fn fill(&mut self, x: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x], 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, weight: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x], weight)
    }
}

impl Hist2D {
    pub fn new(
        nbins_x: usize,
        min_x: f64,
        max_x: f64,
        nbins_y: usize,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self> {
        let binning = Binning::from_ranges(
            2,
            &[min_x, min_y],
            &[max_x, max_y],
            &[nbins_x, nbins_y],
        )?;
        Ok(Self(HistND::from_binning(binning)))
    }

    pub fn fill(&mut self, x: f64, y: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y], 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, y: f64, weight: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y], weight)
    }

    pub fn projection_x(&self) -> Result<Hist1D> {
        Hist1D::try_from(project(&self.0, &[0])?)
    }

    pub fn projection_y(&self) -> Result<Hist1D> {
        Hist1D::try_from(project(&self.0, &[1])?)
    }
}

impl Hist3D {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nbins_x: usize,
        min_x: f64,
        max_x: f64,
        nbins_y: usize,
        min_y: f64,
        max_y: f64,
        nbins_z: usize,
        min_z: f64,
        max_z: f64,
    ) -> Result<Self> {
        let binning = Binning::from_ranges(
            3,
            &[min_x, min_y, min_z],
            &[max_x, max_y, max_z],
            &[nbins_x, nbins_y, nbins_z],
        )?;
        Ok(Self(HistND::from_binning(binning)))
    }

    pub fn fill(&mut self, x: f64, y: f64, z: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y, z], 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, y: f64, z: f64, weight: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y, z], weight)
    }

    pub fn projection_x(&self) -> Result<Hist1D> {
        Hist1D::try_from(project(&self.0, &[0])?)
    }

    pub fn projection_y(&self) -> Result<Hist1D> {
        Hist1D::try_from(project(&self.0, &[1])?)
    }

    pub fn projection_z(&self) -> Result<Hist1D> {
        Hist1D::try_from(project(&self.0, &[2])?)
    }

    pub fn projection_xy(&self) -> Result<Hist2D> {
        Hist2D::try_from(project(&self.0, &[0, 1])?)
    }

    pub fn projection_xz(&self) -> Result<Hist2D> {
        Hist2D::try_from(project(&self.0, &[0, 2])?)
    }

    pub fn projection_yz(&self) -> Result<Hist2D> {
        Hist2D::try_from(project(&self.0, &[1, 2])?)
    }
}
