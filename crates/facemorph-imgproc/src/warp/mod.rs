//! Geometric image transformations.

mod affine;

pub use affine::{get_affine_transform, invert_affine_transform, warp_affine};
