use rayon::prelude::*;
use voxim_image::{Image, ImageShape};

use crate::boundary::BorderMode;

/// Copy `src` into a buffer of shape `dst_shape`, reading each output
/// position at `p - offsets` through the border mode. Unreachable samples
/// stay at the default value.
///
/// Shared by [`shift`] and the fill mode of the resize module.
pub(crate) fn translate<T>(
    src: &Image<T>,
    dst_shape: ImageShape,
    offsets: [isize; 4],
    border: BorderMode,
) -> Vec<T>
where
    T: Copy + Default + Send + Sync,
{
    let src_shape = src.shape();
    let src_data = src.as_slice();

    let x_map: Vec<Option<usize>> = (0..dst_shape.width)
        .map(|x| border.map_index(x as isize - offsets[0], src_shape.width))
        .collect();

    let mut out = vec![T::default(); dst_shape.numel()];
    out.par_chunks_exact_mut(dst_shape.width)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % dst_shape.height;
            let z = (r / dst_shape.height) % dst_shape.depth;
            let c = r / (dst_shape.height * dst_shape.depth);

            let sy = border.map_index(y as isize - offsets[1], src_shape.height);
            let sz = border.map_index(z as isize - offsets[2], src_shape.depth);
            let sc = border.map_index(c as isize - offsets[3], src_shape.channels);
            let (Some(sy), Some(sz), Some(sc)) = (sy, sz, sc) else {
                return;
            };

            let base = src.offset(0, sy, sz, sc);
            for (x, value) in row.iter_mut().enumerate() {
                if let Some(sx) = x_map[x] {
                    *value = src_data[base + sx];
                }
            }
        });
    out
}

/// Shift the image content in place by an integer number of pixels per axis.
///
/// Each output position reads `src(x - dx, y - dy, z - dz, c - dc)`, so
/// positive deltas move content towards increasing coordinates. Samples
/// falling outside the image follow the border mode, with
/// [`BorderMode::Dirichlet`] zeroing the vacated region.
///
/// # Arguments
///
/// * `image` - The image to shift.
/// * `deltas` - Pixel displacement along `(x, y, z, c)`.
/// * `border` - Handling of samples shifted in from outside.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::boundary::BorderMode;
/// use voxim_imgproc::shift::shift;
///
/// let mut image = Image::from_shape_vec(
///     ImageShape { width: 4, height: 1, depth: 1, channels: 1 },
///     vec![1.0, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
///
/// shift(&mut image, [1, 0, 0, 0], BorderMode::Dirichlet);
///
/// assert_eq!(image.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn shift<T>(image: &mut Image<T>, deltas: [i64; 4], border: BorderMode)
where
    T: Copy + Default + Send + Sync,
{
    if deltas == [0; 4] {
        return;
    }
    let offsets = deltas.map(|d| d as isize);
    let out = translate(image, image.shape(), offsets, border);
    image.as_slice_mut().copy_from_slice(&out);
}

#[cfg(test)]
mod tests {
    use voxim_image::{Image, ImageError, ImageShape};

    use super::{shift, BorderMode};

    fn row_image() -> Result<Image<i32>, ImageError> {
        let shape = ImageShape {
            width: 4,
            height: 2,
            depth: 1,
            channels: 1,
        };
        Image::from_shape_vec(shape, (1..=8).collect())
    }

    #[test]
    fn dirichlet_zeroes_the_vacated_region() -> Result<(), ImageError> {
        let mut image = row_image()?;
        shift(&mut image, [2, 0, 0, 0], BorderMode::Dirichlet);
        assert_eq!(image.as_slice(), &[0, 0, 1, 2, 0, 0, 5, 6]);
        Ok(())
    }

    #[test]
    fn neumann_replicates_the_entering_edge() -> Result<(), ImageError> {
        let mut image = row_image()?;
        shift(&mut image, [-1, 0, 0, 0], BorderMode::Neumann);
        assert_eq!(image.as_slice(), &[2, 3, 4, 4, 6, 7, 8, 8]);
        Ok(())
    }

    #[test]
    fn periodic_wraps_content_around() -> Result<(), ImageError> {
        let mut image = row_image()?;
        shift(&mut image, [1, 0, 0, 0], BorderMode::Periodic);
        assert_eq!(image.as_slice(), &[4, 1, 2, 3, 8, 5, 6, 7]);
        Ok(())
    }

    #[test]
    fn full_periodic_turn_is_the_identity() -> Result<(), ImageError> {
        let mut image = row_image()?;
        let original = image.clone();
        shift(&mut image, [4, 0, 0, 0], BorderMode::Periodic);
        assert_eq!(image.as_slice(), original.as_slice());
        shift(&mut image, [-8, 2, 0, 0], BorderMode::Periodic);
        assert_eq!(image.as_slice(), original.as_slice());
        Ok(())
    }

    #[test]
    fn shifts_along_y_and_channels() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 2,
            height: 2,
            depth: 1,
            channels: 2,
        };
        let mut image = Image::from_shape_vec(shape, (1..=8).collect::<Vec<i32>>())?;
        shift(&mut image, [0, 1, 0, 1], BorderMode::Dirichlet);
        // channel 0 vacated, channel 1 holds the shifted-down channel 0
        assert_eq!(image.as_slice(), &[0, 0, 0, 0, 0, 0, 1, 2]);
        Ok(())
    }
}
