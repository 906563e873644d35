use crate::axis::Axis;
use crate::error::ImageError;

/// Image shape along the four axes `(x, y, z, c)`.
///
/// `width`, `height` and `depth` are spatial extents, `channels` is the
/// number of values stored per voxel. Every axis of a valid image has
/// length at least 1, so a 2D grayscale image is `(w, h, 1, 1)`.
///
/// # Examples
///
/// ```
/// use voxim_image::ImageShape;
///
/// let shape = ImageShape {
///     width: 10,
///     height: 20,
///     depth: 1,
///     channels: 3,
/// };
///
/// assert_eq!(shape.numel(), 10 * 20 * 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageShape {
    /// Length of the horizontal axis in pixels.
    pub width: usize,
    /// Length of the vertical axis in pixels.
    pub height: usize,
    /// Length of the depth axis in slices.
    pub depth: usize,
    /// Number of channels.
    pub channels: usize,
}

impl ImageShape {
    /// Total number of values an image of this shape holds.
    pub fn numel(&self) -> usize {
        self.width * self.height * self.depth * self.channels
    }

    /// The length of the given axis.
    pub fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
            Axis::C => self.channels,
        }
    }

    /// Per-axis strides in `(x, y, z, c)` order for the x-fastest layout.
    pub fn strides(&self) -> [usize; 4] {
        [
            1,
            self.width,
            self.width * self.height,
            self.width * self.height * self.depth,
        ]
    }
}

impl std::fmt::Display for ImageShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.width, self.height, self.depth, self.channels
        )
    }
}

impl From<[usize; 4]> for ImageShape {
    fn from(shape: [usize; 4]) -> Self {
        ImageShape {
            width: shape[0],
            height: shape[1],
            depth: shape[2],
            channels: shape[3],
        }
    }
}

/// A dense 4D image addressed by `(x, y, z, c)`.
///
/// Values live in one contiguous buffer with `x` varying fastest: the value
/// at `(x, y, z, c)` sits at offset `x + w * (y + h * (z + d * c))`. Rows,
/// slices and channel planes are therefore contiguous sub-slices, which the
/// processing crates rely on for chunked parallel loops.
#[derive(Clone, Debug)]
pub struct Image<T> {
    shape: ImageShape,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from its shape and a value buffer in x-fastest order.
    ///
    /// # Arguments
    ///
    /// * `shape` - The image shape, all axes at least 1.
    /// * `data` - The value buffer, of length `shape.numel()`.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is zero or the buffer length does not
    /// match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_image::{Image, ImageShape};
    ///
    /// let image = Image::from_shape_vec(
    ///     ImageShape {
    ///         width: 2,
    ///         height: 3,
    ///         depth: 1,
    ///         channels: 1,
    ///     },
    ///     vec![0.0f64; 6],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 3);
    /// ```
    pub fn from_shape_vec(shape: ImageShape, data: Vec<T>) -> Result<Self, ImageError> {
        let axes = [
            ('x', shape.width),
            ('y', shape.height),
            ('z', shape.depth),
            ('c', shape.channels),
        ];
        if let Some((name, _)) = axes.iter().find(|(_, len)| *len == 0) {
            return Err(ImageError::ZeroAxis(*name));
        }
        if data.len() != shape.numel() {
            return Err(ImageError::InvalidDataLength(data.len(), shape.numel()));
        }
        Ok(Self { shape, data })
    }

    /// Create a new image with every value set to `val`.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis of the shape is zero.
    pub fn from_shape_val(shape: ImageShape, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; shape.numel()];
        Self::from_shape_vec(shape, data)
    }

    /// The shape of the image.
    pub fn shape(&self) -> ImageShape {
        self.shape
    }

    /// The length of the horizontal axis.
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// The length of the vertical axis.
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// The length of the depth axis.
    pub fn depth(&self) -> usize {
        self.shape.depth
    }

    /// The number of channels.
    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    /// Total number of values in the image.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Buffer offset of the value at `(x, y, z, c)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, z: usize, c: usize) -> usize {
        x + self.shape.width * (y + self.shape.height * (z + self.shape.depth * c))
    }

    /// The value at `(x, y, z, c)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize, c: usize) -> Option<&T> {
        if x >= self.shape.width
            || y >= self.shape.height
            || z >= self.shape.depth
            || c >= self.shape.channels
        {
            return None;
        }
        self.data.get(self.offset(x, y, z, c))
    }

    /// The mutable value at `(x, y, z, c)`, or `None` when out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize, c: usize) -> Option<&mut T> {
        if x >= self.shape.width
            || y >= self.shape.height
            || z >= self.shape.depth
            || c >= self.shape.channels
        {
            return None;
        }
        let offset = self.offset(x, y, z, c);
        self.data.get_mut(offset)
    }

    /// The underlying buffer in x-fastest order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The underlying mutable buffer in x-fastest order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply a function to every value, producing a new image of the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_image::{Image, ImageShape};
    ///
    /// let image = Image::from_shape_vec(
    ///     ImageShape { width: 2, height: 1, depth: 1, channels: 1 },
    ///     vec![1.0f64, 2.0],
    /// ).unwrap();
    ///
    /// let doubled = image.map(|v| v * 2.0).unwrap();
    /// assert_eq!(doubled.as_slice(), &[2.0, 4.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Result<Image<U>, ImageError>
    where
        F: Fn(&T) -> U,
    {
        let data: Vec<U> = self.data.iter().map(f).collect();
        Image::from_shape_vec(self.shape, data)
    }

    /// Cast the values of the image to a different type.
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not fit the target type.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_image::{Image, ImageShape};
    ///
    /// let image = Image::from_shape_val(
    ///     ImageShape { width: 2, height: 2, depth: 1, channels: 1 },
    ///     7u8,
    /// ).unwrap();
    ///
    /// let casted = image.cast::<f64>().unwrap();
    /// assert_eq!(casted.as_slice(), &[7.0, 7.0, 7.0, 7.0]);
    /// ```
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        T: Copy + num_traits::NumCast,
        U: num_traits::NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::from_shape_vec(self.shape, data)
    }
}
