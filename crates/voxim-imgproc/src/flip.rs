use rayon::prelude::*;
use voxim_image::{Axis, Image};

/// Mirror the image in place along one axis.
///
/// Works on any of the four axes: mirroring along `x` reverses each row,
/// along `c` it reverses the channel order, and so on. Applying the same
/// mirror twice restores the original image.
///
/// # Arguments
///
/// * `image` - The image to mirror.
/// * `axis` - The axis to reverse.
///
/// # Example
///
/// ```
/// use voxim_image::{Axis, Image, ImageShape};
/// use voxim_imgproc::flip::mirror;
///
/// let mut image = Image::from_shape_vec(
///     ImageShape { width: 3, height: 1, depth: 1, channels: 1 },
///     vec![1.0, 2.0, 3.0],
/// )
/// .unwrap();
///
/// mirror(&mut image, Axis::X);
///
/// assert_eq!(image.as_slice(), &[3.0, 2.0, 1.0]);
/// ```
pub fn mirror<T>(image: &mut Image<T>, axis: Axis)
where
    T: Copy + Send + Sync,
{
    let len = image.shape().axis_len(axis);
    if len < 2 {
        return;
    }
    let stride = image.shape().strides()[axis.index()];
    let block = stride * len;

    image
        .as_slice_mut()
        .par_chunks_exact_mut(block)
        .for_each(|chunk| {
            let mut a = 0;
            let mut b = len - 1;
            while a < b {
                for inner in 0..stride {
                    chunk.swap(a * stride + inner, b * stride + inner);
                }
                a += 1;
                b -= 1;
            }
        });
}
