#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// boundary handling for out-of-domain samples.
pub mod boundary;

/// cropping of uniform borders.
pub mod crop;

/// Error types for the transform operations.
pub mod error;

/// in-place axis mirroring.
pub mod flip;

/// utilities for interpolation.
pub mod interpolation;

/// axis permutation module.
pub mod permute;

/// geometry resizing in all its modes.
pub mod resize;

/// whole-image rotation module.
pub mod rotate;

/// in-place content shifting.
pub mod shift;

/// dense-field warping module.
pub mod warp;
