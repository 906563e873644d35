use rayon::prelude::*;
use voxim_image::{AxisPermutation, Image, ImageError, ImageShape};

/// Reorder the image axes.
///
/// Axis `k` of the result takes its length and values from the source axis
/// at position `k` of the permutation: permuting a `(10, 30, 40, 3)` image
/// by `"zxyc"` yields a `(40, 10, 30, 3)` image. The identity permutation
/// returns a plain copy.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `perm` - The axis permutation.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::permute::permute_axes;
///
/// let image = Image::from_shape_vec(
///     ImageShape { width: 2, height: 3, depth: 1, channels: 1 },
///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
/// )
/// .unwrap();
///
/// let transposed = permute_axes(&image, &"yxzc".parse().unwrap()).unwrap();
///
/// assert_eq!(transposed.width(), 3);
/// assert_eq!(transposed.height(), 2);
/// assert_eq!(transposed.as_slice(), &[0.0, 2.0, 4.0, 1.0, 3.0, 5.0]);
/// ```
pub fn permute_axes<T>(src: &Image<T>, perm: &AxisPermutation) -> Result<Image<T>, ImageError>
where
    T: Copy + Send + Sync,
{
    if perm.is_identity() {
        return Ok(src.clone());
    }

    let src_shape = src.shape();
    let src_strides = src_shape.strides();

    // result dims and the source stride feeding each result axis
    let mut dims = [0usize; 4];
    let mut strides = [0usize; 4];
    for (k, axis) in perm.axes().iter().enumerate() {
        dims[k] = src_shape.axis_len(*axis);
        strides[k] = src_strides[axis.index()];
    }

    let dst_shape = ImageShape::from(dims);
    let src_data = src.as_slice();
    let mut data = vec![src_data[0]; dst_shape.numel()];

    let (width, height, depth) = (dims[0], dims[1], dims[2]);
    data.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % height;
            let z = (r / height) % depth;
            let c = r / (height * depth);
            let base = y * strides[1] + z * strides[2] + c * strides[3];
            for (x, value) in row.iter_mut().enumerate() {
                *value = src_data[base + x * strides[0]];
            }
        });

    Image::from_shape_vec(dst_shape, data)
}

#[cfg(test)]
mod tests {
    use voxim_image::{AxisPermutation, Image, ImageError, ImageShape};

    use super::permute_axes;

    #[test]
    fn permutes_shape_in_result_order() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 10,
            height: 30,
            depth: 40,
            channels: 3,
        };
        let image = Image::from_shape_val(shape, 0u8)?;
        let permuted = permute_axes(&image, &"zxyc".parse()?)?;
        assert_eq!(
            permuted.shape(),
            ImageShape {
                width: 40,
                height: 10,
                depth: 30,
                channels: 3,
            }
        );
        Ok(())
    }

    #[test]
    fn swaps_values_with_the_axes() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 2,
            height: 2,
            depth: 2,
            channels: 1,
        };
        let image = Image::from_shape_vec(shape, (0..8).collect::<Vec<i32>>())?;
        // move the depth axis first: result (z, x, y)
        let permuted = permute_axes(&image, &"zxyc".parse()?)?;
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    assert_eq!(
                        permuted.get(z, x, y, 0),
                        image.get(x, y, z, 0),
                        "mismatch at ({x}, {y}, {z})"
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn inverse_permutation_restores_the_image() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 3,
            height: 2,
            depth: 4,
            channels: 2,
        };
        let image = Image::from_shape_vec(shape, (0..48).collect::<Vec<i32>>())?;
        let perm: AxisPermutation = "czyx".parse()?;
        let there = permute_axes(&image, &perm)?;
        let back = permute_axes(&there, &perm.inverse())?;
        assert_eq!(back.shape(), image.shape());
        assert_eq!(back.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn identity_is_a_copy() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 2,
            height: 2,
            depth: 1,
            channels: 1,
        };
        let image = Image::from_shape_vec(shape, vec![1, 2, 3, 4])?;
        let permuted = permute_axes(&image, &"xyzc".parse()?)?;
        assert_eq!(permuted.as_slice(), image.as_slice());
        Ok(())
    }
}
