use rayon::prelude::*;
use voxim_image::{Image, ImageShape};

use crate::boundary::BorderMode;
use crate::error::TransformError;
use crate::interpolation::{sample_xy, sample_xyz, InterpolationMode};

/// How the warp field drives the resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarpMode {
    /// The field holds absolute source coordinates to sample from.
    #[default]
    BackwardAbsolute,
    /// The field holds displacements subtracted from each output position.
    BackwardRelative,
    /// Source values scatter to the absolute coordinates in the field.
    ForwardAbsolute,
    /// Source values scatter to their own position plus the displacement.
    ForwardRelative,
}

impl TryFrom<i64> for WarpMode {
    type Error = TransformError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::BackwardAbsolute),
            1 => Ok(Self::BackwardRelative),
            2 => Ok(Self::ForwardAbsolute),
            3 => Ok(Self::ForwardRelative),
            code => Err(TransformError::UnsupportedCode {
                what: "warp mode",
                code,
            }),
        }
    }
}

/// Warp the image by a dense coordinate field.
///
/// The field's 1 to 3 channels give the x, y and z components of the warp;
/// coordinates without a component pass through unchanged. Backward modes
/// sample the source at the field-driven position with the given
/// interpolation and border handling; forward modes scatter source values
/// onto a zero canvas at rounded target positions (dropping targets outside
/// the canvas) and ignore the interpolation, with later writes winning
/// collisions. The output spans the field's spatial extents with the
/// source's channels; every mode except the absolute-backward one requires
/// the field to match the source spatially.
///
/// # Arguments
///
/// * `src` - The image to warp.
/// * `field` - The coordinate or displacement field.
/// * `mode` - How the field is interpreted.
/// * `interpolation` - Sampling for the backward modes.
/// * `border` - Handling of out-of-domain samples.
///
/// # Errors
///
/// Fails when the field has more than 3 channels, or for the relative and
/// forward modes when its spatial extents differ from the source.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::boundary::BorderMode;
/// use voxim_imgproc::interpolation::InterpolationMode;
/// use voxim_imgproc::warp::{warp, WarpMode};
///
/// let shape = ImageShape { width: 3, height: 1, depth: 1, channels: 1 };
/// let image = Image::from_shape_vec(shape, vec![1.0, 2.0, 3.0]).unwrap();
/// // displace every pixel one step to the right
/// let field = Image::from_shape_val(shape, 1.0).unwrap();
///
/// let warped = warp(
///     &image,
///     &field,
///     WarpMode::BackwardRelative,
///     InterpolationMode::Linear,
///     BorderMode::Dirichlet,
/// )
/// .unwrap();
///
/// assert_eq!(warped.as_slice(), &[0.0, 1.0, 2.0]);
/// ```
pub fn warp(
    src: &Image<f64>,
    field: &Image<f64>,
    mode: WarpMode,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<Image<f64>, TransformError> {
    if field.channels() > 3 {
        return Err(TransformError::WarpFieldChannels(field.channels()));
    }
    let same_extent = field.width() == src.width()
        && field.height() == src.height()
        && field.depth() == src.depth();
    if mode != WarpMode::BackwardAbsolute && !same_extent {
        return Err(TransformError::WarpFieldSize {
            expected: src.shape(),
            actual: field.shape(),
        });
    }

    match mode {
        WarpMode::BackwardAbsolute => backward(src, field, interpolation, border, false),
        WarpMode::BackwardRelative => backward(src, field, interpolation, border, true),
        WarpMode::ForwardAbsolute => forward(src, field, false),
        WarpMode::ForwardRelative => forward(src, field, true),
    }
}

/// Sample the source at the field-driven position of every output pixel.
fn backward(
    src: &Image<f64>,
    field: &Image<f64>,
    interpolation: InterpolationMode,
    border: BorderMode,
    relative: bool,
) -> Result<Image<f64>, TransformError> {
    let shape = ImageShape {
        width: field.width(),
        height: field.height(),
        depth: field.depth(),
        channels: src.channels(),
    };
    let components = field.channels();
    let field_data = field.as_slice();

    let mut dst = Image::from_shape_val(shape, 0.0)?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(shape.width)
        .enumerate()
        .for_each(|(r, row)| {
            let y = r % shape.height;
            let z = (r / shape.height) % shape.depth;
            let c = r / (shape.height * shape.depth);
            for (x, value) in row.iter_mut().enumerate() {
                let mut target = [x as f64, y as f64, z as f64];
                for (k, coord) in target.iter_mut().enumerate().take(components) {
                    let component = field_data[field.offset(x, y, z, k)];
                    *coord = if relative { *coord - component } else { component };
                }
                *value = if components > 2 {
                    sample_xyz(
                        src, target[0], target[1], target[2], c, interpolation, border,
                    )
                } else {
                    // a field without a z component leaves z an index; it
                    // can leave the source when the extents differ
                    match border.map_index(z as isize, src.depth()) {
                        Some(sz) => {
                            sample_xy(src, target[0], target[1], sz, c, interpolation, border)
                        }
                        None => 0.0,
                    }
                };
            }
        });
    Ok(dst)
}

/// Scatter every source pixel to its rounded field-driven target.
fn forward(
    src: &Image<f64>,
    field: &Image<f64>,
    relative: bool,
) -> Result<Image<f64>, TransformError> {
    let shape = src.shape();
    let components = field.channels();
    let src_data = src.as_slice();
    let field_data = field.as_slice();

    let mut dst = Image::from_shape_val(shape, 0.0)?;
    let dst_data = dst.as_slice_mut();
    for z in 0..shape.depth {
        for y in 0..shape.height {
            for x in 0..shape.width {
                let mut target = [x as f64, y as f64, z as f64];
                for (k, coord) in target.iter_mut().enumerate().take(components) {
                    let component = field_data[field.offset(x, y, z, k)];
                    *coord = if relative { *coord + component } else { component };
                }
                let tx = target[0].round() as isize;
                let ty = target[1].round() as isize;
                let tz = target[2].round() as isize;
                if tx < 0
                    || ty < 0
                    || tz < 0
                    || tx as usize >= shape.width
                    || ty as usize >= shape.height
                    || tz as usize >= shape.depth
                {
                    continue;
                }
                let (tx, ty, tz) = (tx as usize, ty as usize, tz as usize);
                for c in 0..shape.channels {
                    dst_data[src.offset(tx, ty, tz, c)] = src_data[src.offset(x, y, z, c)];
                }
            }
        }
    }
    Ok(dst)
}
