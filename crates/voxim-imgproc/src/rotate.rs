use rayon::prelude::*;
use voxim_image::{Image, ImageError, ImageShape};

use crate::boundary::BorderMode;
use crate::interpolation::{sample_xy, InterpolationMode};

/// Rotate the image about its center, refitting the output size.
///
/// Positive angles rotate the content clockwise (with y pointing down).
/// Multiples of 90° reduce to exact index shuffles; any other angle
/// resamples each slice and channel with the given interpolation, reading
/// out-of-domain samples through the border mode. The output is
/// `round(|w cos a| + |h sin a|)` by `round(|w sin a| + |h cos a|)` pixels,
/// so the rotated content always fits.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle_deg` - The rotation angle in degrees.
/// * `interpolation` - Sampling used off the pixel grid.
/// * `border` - Handling of samples outside the source.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::boundary::BorderMode;
/// use voxim_imgproc::interpolation::InterpolationMode;
/// use voxim_imgproc::rotate::rotate;
///
/// let image = Image::from_shape_vec(
///     ImageShape { width: 2, height: 1, depth: 1, channels: 1 },
///     vec![1.0, 2.0],
/// )
/// .unwrap();
///
/// let turned = rotate(&image, 90.0, InterpolationMode::Linear, BorderMode::Dirichlet).unwrap();
///
/// assert_eq!(turned.width(), 1);
/// assert_eq!(turned.height(), 2);
/// assert_eq!(turned.as_slice(), &[1.0, 2.0]);
/// ```
pub fn rotate(
    src: &Image<f64>,
    angle_deg: f64,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<Image<f64>, ImageError> {
    let turn = angle_deg.rem_euclid(360.0);
    if turn % 90.0 == 0.0 {
        return rotate_right_angle(src, (turn / 90.0) as u32);
    }

    let rad = turn.to_radians();
    let (sa, ca) = rad.sin_cos();
    let (w, h) = (src.width() as f64, src.height() as f64);
    let fit_w = w * ca.abs() + h * sa.abs();
    let fit_h = w * sa.abs() + h * ca.abs();
    let nw = fit_w.round() as usize;
    let nh = fit_h.round() as usize;

    let dst_shape = ImageShape {
        width: nw,
        height: nh,
        ..src.shape()
    };
    let (cx_dst, cy_dst) = (0.5 * fit_w, 0.5 * fit_h);
    let (cx_src, cy_src) = (0.5 * w, 0.5 * h);

    let mut dst = Image::from_shape_val(dst_shape, 0.0)?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(nw)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % nh;
            let z = (r / nh) % dst_shape.depth;
            let c = r / (nh * dst_shape.depth);
            let yc = y as f64 - cy_dst;
            for (x, value) in row.iter_mut().enumerate() {
                let xc = x as f64 - cx_dst;
                let sx = cx_src + ca * xc + sa * yc;
                let sy = cy_src - sa * xc + ca * yc;
                *value = sample_xy(src, sx, sy, z, c, interpolation, border);
            }
        });
    Ok(dst)
}

/// Rotate about an arbitrary center with a zoom factor, keeping the size.
///
/// The output has the source geometry; content rotates clockwise about
/// `center` and magnifies by `zoom` (which must be positive). There is no
/// right-angle shortcut here since the center is arbitrary.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle_deg` - The rotation angle in degrees.
/// * `center` - The fixed point `(cx, cy)` in pixel coordinates.
/// * `zoom` - The magnification about the center.
/// * `interpolation` - Sampling used off the pixel grid.
/// * `border` - Handling of samples outside the source.
pub fn rotate_about(
    src: &Image<f64>,
    angle_deg: f64,
    center: (f64, f64),
    zoom: f64,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<Image<f64>, ImageError> {
    let rad = angle_deg.to_radians();
    // folding the zoom into the rotation coefficients inverts both at once
    let ca = rad.cos() / zoom;
    let sa = rad.sin() / zoom;
    let (cx, cy) = center;

    let shape = src.shape();
    let mut dst = Image::from_shape_val(shape, 0.0)?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(shape.width)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % shape.height;
            let z = (r / shape.height) % shape.depth;
            let c = r / (shape.height * shape.depth);
            let yc = y as f64 - cy;
            for (x, value) in row.iter_mut().enumerate() {
                let xc = x as f64 - cx;
                let sx = cx + ca * xc + sa * yc;
                let sy = cy - sa * xc + ca * yc;
                *value = sample_xy(src, sx, sy, z, c, interpolation, border);
            }
        });
    Ok(dst)
}

/// Exact shuffles for multiples of a quarter turn.
fn rotate_right_angle(src: &Image<f64>, quarter: u32) -> Result<Image<f64>, ImageError> {
    let (w, h) = (src.width(), src.height());
    match quarter % 4 {
        1 => shuffle(src, h, w, |x, y| (y, h - 1 - x)),
        2 => shuffle(src, w, h, |x, y| (w - 1 - x, h - 1 - y)),
        3 => shuffle(src, h, w, |x, y| (w - 1 - y, x)),
        _ => Ok(src.clone()),
    }
}

/// Gather `dst(x, y) = src(map(x, y))` per slice and channel.
fn shuffle<F>(src: &Image<f64>, nw: usize, nh: usize, map: F) -> Result<Image<f64>, ImageError>
where
    F: Fn(usize, usize) -> (usize, usize) + Sync,
{
    let dst_shape = ImageShape {
        width: nw,
        height: nh,
        ..src.shape()
    };
    let src_data = src.as_slice();
    let mut dst = Image::from_shape_val(dst_shape, 0.0)?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(nw)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % nh;
            let z = (r / nh) % dst_shape.depth;
            let c = r / (nh * dst_shape.depth);
            for (x, value) in row.iter_mut().enumerate() {
                let (sx, sy) = map(x, y);
                *value = src_data[src.offset(sx, sy, z, c)];
            }
        });
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use voxim_image::{Image, ImageError, ImageShape};

    use super::{rotate, rotate_about, BorderMode, InterpolationMode};

    fn image_2x3() -> Result<Image<f64>, ImageError> {
        Image::from_shape_vec(
            ImageShape {
                width: 2,
                height: 3,
                depth: 1,
                channels: 1,
            },
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
    }

    #[test]
    fn quarter_turn_swaps_the_axes() -> Result<(), ImageError> {
        let image = image_2x3()?;
        let turned = rotate(
            &image,
            90.0,
            InterpolationMode::Nearest,
            BorderMode::Dirichlet,
        )?;
        assert_eq!(turned.width(), 3);
        assert_eq!(turned.height(), 2);
        // dst(x, y) = src(y, h - 1 - x)
        assert_eq!(turned.as_slice(), &[5.0, 3.0, 1.0, 6.0, 4.0, 2.0]);
        Ok(())
    }

    #[test]
    fn half_turn_reverses_rows_and_columns() -> Result<(), ImageError> {
        let image = image_2x3()?;
        let turned = rotate(
            &image,
            180.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        assert_eq!(turned.shape(), image.shape());
        assert_eq!(turned.as_slice(), &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        Ok(())
    }

    #[test]
    fn negative_quarter_equals_three_quarters() -> Result<(), ImageError> {
        let image = image_2x3()?;
        let negative = rotate(
            &image,
            -90.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        let positive = rotate(
            &image,
            270.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        assert_eq!(negative.as_slice(), positive.as_slice());
        Ok(())
    }

    #[test]
    fn four_quarter_turns_restore_the_image() -> Result<(), ImageError> {
        let image = image_2x3()?;
        let mut turned = image.clone();
        for _ in 0..4 {
            turned = rotate(
                &turned,
                90.0,
                InterpolationMode::Nearest,
                BorderMode::Dirichlet,
            )?;
        }
        assert_eq!(turned.shape(), image.shape());
        assert_eq!(turned.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn general_angles_refit_the_canvas() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 10,
            height: 6,
            depth: 1,
            channels: 1,
        };
        let image = Image::from_shape_val(shape, 1.0)?;
        let turned = rotate(
            &image,
            45.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        let expected = ((10.0 + 6.0) * std::f64::consts::FRAC_1_SQRT_2).round() as usize;
        assert_eq!(turned.width(), expected);
        assert_eq!(turned.height(), expected);
        Ok(())
    }

    #[test]
    fn rotation_preserves_a_constant_interior() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 9,
            height: 9,
            depth: 1,
            channels: 1,
        };
        let image = Image::from_shape_val(shape, 3.5)?;
        let turned = rotate(
            &image,
            30.0,
            InterpolationMode::Linear,
            BorderMode::Neumann,
        )?;
        // the output center maps back to the source center
        let center =
            turned.as_slice()[turned.offset(turned.width() / 2, turned.height() / 2, 0, 0)];
        assert!((center - 3.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn rotate_about_keeps_the_geometry_and_the_center_value() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 7,
            height: 5,
            depth: 1,
            channels: 2,
        };
        let mut image = Image::from_shape_val(shape, 0.0)?;
        let center_off = image.offset(3, 2, 0, 0);
        image.as_slice_mut()[center_off] = 8.0;

        let turned = rotate_about(
            &image,
            60.0,
            (3.0, 2.0),
            1.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        assert_eq!(turned.shape(), shape);
        // the fixed point keeps its value
        assert!((turned.as_slice()[center_off] - 8.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn zooming_about_the_center_magnifies_content() -> Result<(), ImageError> {
        let shape = ImageShape {
            width: 5,
            height: 5,
            depth: 1,
            channels: 1,
        };
        // center pixel bright, zoom 2 spreads it over its neighbors
        let mut image = Image::from_shape_val(shape, 0.0)?;
        let center = image.offset(2, 2, 0, 0);
        image.as_slice_mut()[center] = 4.0;

        let zoomed = rotate_about(
            &image,
            0.0,
            (2.0, 2.0),
            2.0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        )?;
        assert!((zoomed.as_slice()[center] - 4.0).abs() < 1e-9);
        let neighbor = zoomed.as_slice()[image.offset(3, 2, 0, 0)];
        assert!((neighbor - 2.0).abs() < 1e-9);
        Ok(())
    }
}
