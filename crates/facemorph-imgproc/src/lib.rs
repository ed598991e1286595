#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image cropping module.
pub mod crop;

/// utilities to draw on images.
pub mod draw;

/// utilities for interpolation.
pub mod interpolation;

/// image geometric transformations module.
pub mod warp;
