//! Fixed-dimension front ends over [`ProfileND`]

use crate::profile::ProfileND;
use rootplots_core::{delegate_binned_content, BinnedContent, Binning, Error, Result, ValueRange};
use std::ops::{Deref, DerefMut};

macro_rules! impl_wrapper {
    ($name:ident, $dim:expr) => {
        impl $name {
            pub fn with_title(self, title: impl Into<String>) -> Self {
                Self(self.0.with_title(title))
            }

            /// Only accept fill values inside `range`
            pub fn with_value_range(self, range: ValueRange) -> Self {
                Self(self.0.with_value_range(range))
            }

            pub fn into_inner(self) -> ProfileND {
                self.0
            }
        }

        impl Deref for $name {
            type Target = ProfileND;

            fn deref(&self) -> &ProfileND {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut ProfileND {
                &mut self.0
            }
        }

        impl TryFrom<ProfileND> for $name {
            type Error = Error;

            fn try_from(profile: ProfileND) -> Result<Self> {
                let dim = profile.binning().dimension();
                if dim != $dim {
                    return Err(Error::dimension_mismatch($dim, dim, stringify!($name)));
                }
                Ok(Self(profile))
            }
        }

        impl From<$name> for ProfileND {
            fn from(profile: $name) -> ProfileND {
                profile.0
            }
        }

        delegate_binned_content!($name);
    };
}

/// One-dimensional profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile1D(ProfileND);

/// Two-dimensional profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile2D(ProfileND);

/// Three-dimensional profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile3D(ProfileND);

impl_wrapper!(Profile1D, 1);
impl_wrapper!(Profile2D, 2);
impl_wrapper!(Profile3D, 3);

impl Profile1D {
    pub fn new(nbins: usize, min: f64, max: f64) -> Result<Self> {
        Ok(Self(ProfileND::new(1, &[min], &[max], &[nbins])?))
    }

    pub fn fill(&mut self, x: f64, value: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x], value, 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, value: f64, weight: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x], value, weight)
    }
}

impl Profile2D {
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
        Ok(Self(ProfileND::from_binning(binning)))
    }

    pub fn fill(&mut self, x: f64, y: f64, value: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y], value, 1.0)
    }

    pub fn fill_weighted(
        &mut self,
        x: f64,
        y: f64,
        value: f64,
        weight: f64,
    ) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y], value, weight)
    }

    /// Mean value per x bin, merging all y bins
    pub fn profile_x(&self) -> Result<Profile1D> {
        Profile1D::try_from(self.0.profile_projection(&[0])?)
    }

    /// Mean value per y bin, merging all x bins
    pub fn profile_y(&self) -> Result<Profile1D> {
        Profile1D::try_from(self.0.profile_projection(&[1])?)
    }
}

impl Profile3D {
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
        Ok(Self(ProfileND::from_binning(binning)))
    }

    pub fn fill(&mut self, x: f64, y: f64, z: f64, value: f64) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y, z], value, 1.0)
    }

    pub fn fill_weighted(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        value: f64,
        weight: f64,
    ) -> Result<Option<usize>> {
        self.0.fill_pos(&[x, y, z], value, weight)
    }

    pub fn profile_x(&self) -> Result<Profile1D> {
        Profile1D::try_from(self.0.profile_projection(&[0])?)
    }

    pub fn profile_y(&self) -> Result<Profile1D> {
        Profile1D::try_from(self.0.profile_projection(&[1])?)
    }

    pub fn profile_z(&self) -> Result<Profile1D> {
        Profile1D::try_from(self.0.profile_projection(&[2])?)
    }

    pub fn profile_xy(&self) -> Result<Profile2D> {
        Profile2D::try_from(self.0.profile_projection(&[0, 1])?)
    }

    pub fn profile_xz(&self) -> Result<Profile2D> {
        Profile2D::try_from(self.0.profile_projection(&[0, 2])?)
    }

    pub fn profile_yz(&self) -> Result<Profile2D> {
        Profile2D::try_from(self.0.profile_projection(&[1, 2])?)
    }
}
