#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use facemorph_image as image;

#[doc(inline)]
pub use facemorph_imgproc as imgproc;

#[doc(inline)]
pub use facemorph_io as io;

#[doc(inline)]
pub use facemorph_mesh as mesh;

/// per-triangle warping and cross-dissolve.
pub mod blend;

/// the triangle schema linking both landmark sets.
pub mod correspondence;

/// morph pipeline error types.
pub mod error;

/// the frame renderer driving the whole morph.
pub mod morph;

pub use crate::error::MorphError;
pub use crate::morph::{frame_alpha, interpolate_points, Morpher};
