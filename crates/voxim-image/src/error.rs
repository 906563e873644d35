/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image shape volume ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when an image axis has zero length.
    #[error("Axis '{0}' has zero length, every image axis must be at least 1")]
    ZeroAxis(char),

    /// Error when an axis character is not one of `x`, `y`, `z`, `c`.
    #[error("Invalid axis character '{0}', expected one of 'x', 'y', 'z' or 'c'")]
    InvalidAxis(char),

    /// Error when a permutation string does not cover all four axes.
    #[error("'{0}' is not a permutation of the axes \"xyzc\"")]
    InvalidPermutation(String),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast the pixel data to the requested type")]
    CastError,
}
