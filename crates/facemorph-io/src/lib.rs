#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// io error types.
pub mod error;

/// high-level image read and write functions.
pub mod functional;

/// landmark point file parsing.
pub mod landmarks;

pub use crate::error::IoError;
