#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// per-operation parameter bundles and their defaults.
pub mod args;

/// conversions between host arrays and images.
pub mod convert;

/// the exported transform operations.
pub mod ops;

/// the engine seam behind the operations.
pub mod provider;
