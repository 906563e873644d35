#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use voxim_image as image;

#[doc(inline)]
pub use voxim_imgproc as imgproc;

#[doc(inline)]
pub use voxim_nd as nd;
