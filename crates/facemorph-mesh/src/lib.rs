#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Delaunay triangulation of 2D point sets.
pub mod delaunay;

/// mesh error types.
pub mod error;

/// 2D points and rectangles.
pub mod point;

pub use crate::delaunay::Triangle;
pub use crate::error::MeshError;
pub use crate::point::{Point2, Rect};
