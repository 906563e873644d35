#![deny(missing_docs)]
//! Dense 4D image container and axis types

/// image representation addressed by `(x, y, z, c)`.
pub mod image;

/// axis names and permutations.
pub mod axis;

/// Error types for the image module.
pub mod error;

pub use crate::axis::{Axis, AxisPermutation};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageShape};
