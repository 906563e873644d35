use voxim_image::{ImageError, ImageShape};

/// An error type for the transform operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformError {
    /// Error coming from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when autocrop removes the entire image.
    #[error("Autocrop removed the entire image")]
    EmptyCrop,

    /// Error when the border color entries do not match the channel count.
    #[error("Border color has {0} entries but the image has {1} channels")]
    BorderColorChannels(usize, usize),

    /// Error when a resize target resolves to an empty axis.
    #[error("Resize target along axis '{0}' is empty")]
    EmptyResizeTarget(char),

    /// Error when a warp mode requires matching spatial extents and the
    /// field has different ones.
    #[error("Warp field is {actual} but the image is {expected}")]
    WarpFieldSize {
        /// Shape of the warped image.
        expected: ImageShape,
        /// Shape of the warp field.
        actual: ImageShape,
    },

    /// Error when the warp field carries more channels than coordinates.
    #[error("Warp field must have 1 to 3 channels, got {0}")]
    WarpFieldChannels(usize),

    /// Error when a numeric parameter code has no matching mode.
    #[error("Unsupported {what} code: {code}")]
    UnsupportedCode {
        /// The parameter the code was given for.
        what: &'static str,
        /// The rejected code.
        code: i64,
    },
}
