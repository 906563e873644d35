use voxim_image::{Axis, Image, ImageError, ImageShape};

use crate::error::TransformError;

/// Crop away borders of a uniform color.
///
/// For every axis in `axes`, in the given order, leading and trailing
/// hyperplanes whose values all equal the border color are removed before
/// the next axis is examined. `color` holds one value per channel; `None`
/// detects the border color from the corner value at `(0, 0, 0)` of each
/// channel.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `color` - The border color, or `None` to detect it.
/// * `axes` - The spatial axes to crop, processed in order.
///
/// # Errors
///
/// Fails when an axis is the channel axis, when the color length does not
/// match the channel count, or when cropping would remove the whole image.
///
/// # Example
///
/// ```
/// use voxim_image::{Axis, Image, ImageShape};
/// use voxim_imgproc::crop::autocrop;
///
/// // one bright pixel surrounded by zeros
/// let mut data = vec![0.0; 5 * 4];
/// data[2 + 5 * 1] = 9.0;
/// let image = Image::from_shape_vec(
///     ImageShape { width: 5, height: 4, depth: 1, channels: 1 },
///     data,
/// )
/// .unwrap();
///
/// let cropped = autocrop(&image, None, &[Axis::Y, Axis::X]).unwrap();
///
/// assert_eq!(cropped.width(), 1);
/// assert_eq!(cropped.height(), 1);
/// assert_eq!(cropped.as_slice(), &[9.0]);
/// ```
pub fn autocrop<T>(
    src: &Image<T>,
    color: Option<&[T]>,
    axes: &[Axis],
) -> Result<Image<T>, TransformError>
where
    T: Copy + PartialEq,
{
    let channels = src.channels();
    let color: Vec<T> = match color {
        Some(color) if color.len() == channels => color.to_vec(),
        Some(color) => {
            return Err(TransformError::BorderColorChannels(color.len(), channels));
        }
        None => (0..channels)
            .map(|c| src.as_slice()[src.offset(0, 0, 0, c)])
            .collect(),
    };

    let mut image = src.clone();
    for &axis in axes {
        if axis == Axis::C {
            return Err(TransformError::Image(ImageError::InvalidAxis('c')));
        }
        let len = image.shape().axis_len(axis);
        let lo = (0..len).find(|&i| !hyperplane_matches(&image, axis, i, &color));
        let Some(lo) = lo else {
            return Err(TransformError::EmptyCrop);
        };
        let hi = (lo..len)
            .rev()
            .find(|&i| !hyperplane_matches(&image, axis, i, &color))
            .unwrap_or(lo);
        if lo > 0 || hi < len - 1 {
            image = crop_axis(&image, axis, lo, hi)?;
        }
    }
    Ok(image)
}

/// Whether the hyperplane at coordinate `at` along `axis` is entirely the
/// border color.
fn hyperplane_matches<T>(image: &Image<T>, axis: Axis, at: usize, color: &[T]) -> bool
where
    T: Copy + PartialEq,
{
    let shape = image.shape();
    let data = image.as_slice();
    for c in 0..shape.channels {
        let want = color[c];
        match axis {
            Axis::X => {
                for z in 0..shape.depth {
                    for y in 0..shape.height {
                        if data[image.offset(at, y, z, c)] != want {
                            return false;
                        }
                    }
                }
            }
            Axis::Y => {
                for z in 0..shape.depth {
                    for x in 0..shape.width {
                        if data[image.offset(x, at, z, c)] != want {
                            return false;
                        }
                    }
                }
            }
            Axis::Z => {
                for y in 0..shape.height {
                    for x in 0..shape.width {
                        if data[image.offset(x, y, at, c)] != want {
                            return false;
                        }
                    }
                }
            }
            Axis::C => return false,
        }
    }
    true
}

/// Extract the inclusive range `lo..=hi` along one spatial axis.
fn crop_axis<T>(
    src: &Image<T>,
    axis: Axis,
    lo: usize,
    hi: usize,
) -> Result<Image<T>, TransformError>
where
    T: Copy,
{
    let shape = src.shape();
    let mut dims = [shape.width, shape.height, shape.depth, shape.channels];
    dims[axis.index()] = hi - lo + 1;
    let dst_shape = ImageShape::from(dims);

    let (ox, oy, oz) = match axis {
        Axis::X => (lo, 0, 0),
        Axis::Y => (0, lo, 0),
        Axis::Z => (0, 0, lo),
        Axis::C => (0, 0, 0),
    };

    let src_data = src.as_slice();
    let mut data = Vec::with_capacity(dst_shape.numel());
    for c in 0..dst_shape.channels {
        for z in 0..dst_shape.depth {
            for y in 0..dst_shape.height {
                let start = src.offset(ox, y + oy, z + oz, c);
                data.extend_from_slice(&src_data[start..start + dst_shape.width]);
            }
        }
    }

    Ok(Image::from_shape_vec(dst_shape, data)?)
}
