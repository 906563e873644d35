use ndarray::{Array4, ShapeBuilder};
use voxim_image::{Image, ImageError, ImageShape};

/// 4D host array indexed as `(x, y, z, c)`.
pub type NdImage = Array4<f64>;

/// Trait to build an [`Image`] from an [`NdImage`].
pub trait FromArray: Sized {
    /// Convert a host array into an image, copying the values into the
    /// x-fastest buffer layout.
    ///
    /// The array axes are read as `(x, y, z, c)`. Any memory layout is
    /// accepted; column-major arrays convert with a straight memcpy.
    ///
    /// # Errors
    ///
    /// Returns an error if an array axis has length zero.
    ///
    /// # Example
    ///
    /// ```
    /// use ndarray::Array4;
    /// use voxim_image::Image;
    /// use voxim_nd::convert::FromArray;
    ///
    /// let array = Array4::from_shape_fn((2, 2, 1, 1), |(x, y, _, _)| (x + 2 * y) as f64);
    /// let image = Image::from_array(array).unwrap();
    /// assert_eq!(image.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    fn from_array(array: NdImage) -> Result<Self, ImageError>;
}

/// Trait to turn an [`Image`] back into an [`NdImage`].
pub trait IntoArray {
    /// Consume the image and expose its buffer as a column-major host
    /// array with axes `(x, y, z, c)`, without copying the values.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer does not match the recorded shape,
    /// which a well-formed image never hits.
    fn into_array(self) -> Result<NdImage, ImageError>;
}

impl FromArray for Image<f64> {
    fn from_array(array: NdImage) -> Result<Self, ImageError> {
        let (width, height, depth, channels) = array.dim();
        let shape = ImageShape {
            width,
            height,
            depth,
            channels,
        };
        // x varies fastest in image storage, so the reversed-axes view
        // walks the array in exactly the buffer order.
        let transposed = array.reversed_axes();
        let data = match transposed.as_slice() {
            Some(slice) => slice.to_vec(),
            None => transposed.iter().copied().collect(),
        };
        Image::from_shape_vec(shape, data)
    }
}

impl IntoArray for Image<f64> {
    fn into_array(self) -> Result<NdImage, ImageError> {
        let shape = self.shape();
        let data = self.into_vec();
        let len = data.len();
        Array4::from_shape_vec(
            (shape.width, shape.height, shape.depth, shape.channels).f(),
            data,
        )
        .map_err(|_| ImageError::InvalidDataLength(len, shape.numel()))
    }
}
