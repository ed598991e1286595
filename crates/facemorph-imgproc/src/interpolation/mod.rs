//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation kernels used when resampling
//! images during geometric warps, together with the border extension
//! policies applied to samples that fall outside the source image.

mod bilinear;
mod border;
pub(crate) mod interpolate;
mod nearest;

pub use border::BorderMode;
pub use interpolate::{interpolate_pixel, InterpolationMode};
