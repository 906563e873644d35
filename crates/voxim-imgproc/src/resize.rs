use rayon::prelude::*;
use voxim_image::{Axis, Image, ImageError, ImageShape};

use crate::boundary::BorderMode;
use crate::error::TransformError;
use crate::interpolation::{cubic_weights, lanczos2_weight};
use crate::shift::translate;

/// How the general [`resize`] fills the target geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    /// Reinterpret the raw buffer, truncating or zero-padding at the end.
    Raw,
    /// Place the source on the target canvas at the centering offset and
    /// border-fill the rest.
    Fill,
    /// Nearest-neighbor resampling.
    #[default]
    Nearest,
    /// Box resampling with fractional pixel coverage.
    MovingAverage,
    /// Linear resampling with corner-aligned sample positions.
    Linear,
    /// Scatter source values onto a zero canvas at stretched positions.
    Grid,
    /// Catmull-Rom cubic resampling.
    Cubic,
    /// Lanczos resampling with support 2.
    Lanczos,
}

impl TryFrom<i64> for ResizeMode {
    type Error = TransformError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Raw),
            0 => Ok(Self::Fill),
            1 => Ok(Self::Nearest),
            2 => Ok(Self::MovingAverage),
            3 => Ok(Self::Linear),
            4 => Ok(Self::Grid),
            5 => Ok(Self::Cubic),
            6 => Ok(Self::Lanczos),
            code => Err(TransformError::UnsupportedCode {
                what: "resize interpolation",
                code,
            }),
        }
    }
}

/// A per-axis resize target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeTarget {
    /// Absolute axis length in pixels.
    Pixels(usize),
    /// Axis length as a percentage of the current one, rounded to nearest.
    Percent(f64),
}

impl ResizeTarget {
    /// A target that keeps the current axis length.
    pub fn same() -> Self {
        ResizeTarget::Percent(100.0)
    }

    /// Resolve the target against the current axis length.
    ///
    /// Returns `None` when the resolved length is empty.
    pub fn resolve(&self, current: usize) -> Option<usize> {
        match *self {
            ResizeTarget::Pixels(len) if len > 0 => Some(len),
            ResizeTarget::Pixels(_) => None,
            ResizeTarget::Percent(pct) => {
                let len = (current as f64 * pct / 100.0).round();
                if len >= 1.0 {
                    Some(len as usize)
                } else {
                    None
                }
            }
        }
    }
}

/// per-axis kernel of the resampling modes
#[derive(Clone, Copy)]
enum AxisKernel {
    Nearest,
    Box,
    Linear,
    Cubic,
    Lanczos,
}

/// Resize the image to a new geometry along any subset of its four axes.
///
/// Each target resolves against the current axis length, with percentage
/// targets rounding to the nearest pixel count. The mode selects how the
/// new geometry is filled; `centering` only matters for [`ResizeMode::Fill`]
/// and places the source inside the grown (or shrunk) canvas, with `0.0`
/// anchoring at the origin and `1.0` at the far end of each axis. The
/// resampling modes run as separable passes along the axes that change.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `targets` - Target lengths for `(x, y, z, c)`.
/// * `mode` - How the target geometry is filled.
/// * `border` - Handling of out-of-domain taps.
/// * `centering` - Per-axis placement for the fill mode, each in `[0, 1]`.
///
/// # Errors
///
/// Fails when a target resolves to an empty axis.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::boundary::BorderMode;
/// use voxim_imgproc::resize::{resize, ResizeMode, ResizeTarget};
///
/// let image = Image::from_shape_vec(
///     ImageShape { width: 2, height: 1, depth: 1, channels: 1 },
///     vec![0.0, 3.0],
/// )
/// .unwrap();
///
/// let wide = resize(
///     &image,
///     [
///         ResizeTarget::Pixels(4),
///         ResizeTarget::same(),
///         ResizeTarget::same(),
///         ResizeTarget::same(),
///     ],
///     ResizeMode::Linear,
///     BorderMode::Dirichlet,
///     [0.0; 4],
/// )
/// .unwrap();
///
/// assert_eq!(wide.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn resize(
    src: &Image<f64>,
    targets: [ResizeTarget; 4],
    mode: ResizeMode,
    border: BorderMode,
    centering: [f64; 4],
) -> Result<Image<f64>, TransformError> {
    let src_dims = [src.width(), src.height(), src.depth(), src.channels()];
    let mut dims = [0usize; 4];
    for k in 0..4 {
        dims[k] = targets[k]
            .resolve(src_dims[k])
            .ok_or(TransformError::EmptyResizeTarget(Axis::ALL[k].to_char()))?;
    }
    if dims == src_dims {
        return Ok(src.clone());
    }
    let dst_shape = ImageShape::from(dims);

    match mode {
        ResizeMode::Raw => {
            let mut data = vec![0.0; dst_shape.numel()];
            let kept = data.len().min(src.numel());
            data[..kept].copy_from_slice(&src.as_slice()[..kept]);
            Ok(Image::from_shape_vec(dst_shape, data)?)
        }
        ResizeMode::Fill => {
            let mut offsets = [0isize; 4];
            for k in 0..4 {
                // C-style truncation, negative when the canvas shrinks
                offsets[k] = (centering[k] * (dims[k] as f64 - src_dims[k] as f64)) as isize;
            }
            let data = translate(src, dst_shape, offsets, border);
            Ok(Image::from_shape_vec(dst_shape, data)?)
        }
        ResizeMode::Grid => grid_scatter(src, dst_shape),
        ResizeMode::Nearest => resample_axes(src, dims, AxisKernel::Nearest, border),
        ResizeMode::MovingAverage => resample_axes(src, dims, AxisKernel::Box, border),
        ResizeMode::Linear => resample_axes(src, dims, AxisKernel::Linear, border),
        ResizeMode::Cubic => resample_axes(src, dims, AxisKernel::Cubic, border),
        ResizeMode::Lanczos => resample_axes(src, dims, AxisKernel::Lanczos, border),
    }
}

/// Scatter every source value to its stretched target position.
fn grid_scatter(src: &Image<f64>, dst_shape: ImageShape) -> Result<Image<f64>, TransformError> {
    let shape = src.shape();
    let src_data = src.as_slice();
    let mut data = vec![0.0; dst_shape.numel()];

    let mut i = 0;
    for c in 0..shape.channels {
        let tc = c * dst_shape.channels / shape.channels;
        for z in 0..shape.depth {
            let tz = z * dst_shape.depth / shape.depth;
            for y in 0..shape.height {
                let ty = y * dst_shape.height / shape.height;
                let row_base =
                    dst_shape.width * (ty + dst_shape.height * (tz + dst_shape.depth * tc));
                for x in 0..shape.width {
                    let tx = x * dst_shape.width / shape.width;
                    data[row_base + tx] = src_data[i];
                    i += 1;
                }
            }
        }
    }
    Ok(Image::from_shape_vec(dst_shape, data)?)
}

/// Apply separable 1D passes along every axis whose length changes.
fn resample_axes(
    src: &Image<f64>,
    dims: [usize; 4],
    kernel: AxisKernel,
    border: BorderMode,
) -> Result<Image<f64>, TransformError> {
    let mut data = src.as_slice().to_vec();
    let mut shape = [src.width(), src.height(), src.depth(), src.channels()];
    for axis in 0..4 {
        if shape[axis] != dims[axis] {
            data = resample_axis(&data, shape, axis, dims[axis], kernel, border);
            shape[axis] = dims[axis];
        }
    }
    Ok(Image::from_shape_vec(ImageShape::from(shape), data)?)
}

/// One separable pass: resample `axis` from `shape[axis]` to `new_len`.
fn resample_axis(
    data: &[f64],
    shape: [usize; 4],
    axis: usize,
    new_len: usize,
    kernel: AxisKernel,
    border: BorderMode,
) -> Vec<f64> {
    let old_len = shape[axis];
    let stride: usize = shape[..axis].iter().product();
    let block_in = stride * old_len;
    let block_out = stride * new_len;

    let taps: Vec<Vec<(usize, f64)>> = (0..new_len)
        .map(|i| axis_taps(kernel, border, old_len, new_len, i))
        .collect();

    let mut out = vec![0.0f64; data.len() / old_len * new_len];
    out.par_chunks_exact_mut(block_out)
        .enumerate()
        .for_each(|(b, chunk)| {
            let src_block = &data[b * block_in..(b + 1) * block_in];
            for (i, taps) in taps.iter().enumerate() {
                let dst_line = &mut chunk[i * stride..(i + 1) * stride];
                for &(j, weight) in taps {
                    let src_line = &src_block[j * stride..(j + 1) * stride];
                    for (o, s) in dst_line.iter_mut().zip(src_line) {
                        *o += weight * s;
                    }
                }
            }
        });
    out
}

/// Source taps and weights feeding output index `i` along one axis.
fn axis_taps(
    kernel: AxisKernel,
    border: BorderMode,
    old_len: usize,
    new_len: usize,
    i: usize,
) -> Vec<(usize, f64)> {
    match kernel {
        AxisKernel::Nearest => vec![(i * old_len / new_len, 1.0)],
        AxisKernel::Box => box_taps(old_len, new_len, i),
        AxisKernel::Linear => {
            let pos = corner_aligned(old_len, new_len, i);
            let base = pos.floor();
            let t = pos - base;
            window_taps(&[1.0 - t, t], base as isize, border, old_len, false)
        }
        AxisKernel::Cubic => {
            let pos = corner_aligned(old_len, new_len, i);
            let base = pos.floor();
            let weights = cubic_weights(pos - base);
            window_taps(&weights, base as isize - 1, border, old_len, false)
        }
        AxisKernel::Lanczos => {
            let pos = corner_aligned(old_len, new_len, i);
            let base = pos.floor();
            let t = pos - base;
            let weights = [
                lanczos2_weight(t + 1.0),
                lanczos2_weight(t),
                lanczos2_weight(t - 1.0),
                lanczos2_weight(t - 2.0),
            ];
            window_taps(&weights, base as isize - 1, border, old_len, true)
        }
    }
}

/// Sample position aligning the first and last outputs with the source ends.
#[inline]
fn corner_aligned(old_len: usize, new_len: usize, i: usize) -> f64 {
    if new_len > 1 {
        i as f64 * (old_len as f64 - 1.0) / (new_len as f64 - 1.0)
    } else {
        0.0
    }
}

/// Resolve a weight window against the border mode, dropping zero taps.
fn window_taps(
    weights: &[f64],
    first: isize,
    border: BorderMode,
    old_len: usize,
    normalize: bool,
) -> Vec<(usize, f64)> {
    let mut taps = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for (k, &weight) in weights.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        total += weight;
        if let Some(j) = border.map_index(first + k as isize, old_len) {
            taps.push((j, weight));
        }
    }
    if normalize && total != 0.0 {
        for tap in &mut taps {
            tap.1 /= total;
        }
    }
    taps
}

/// Box coverage of output pixel `i` over the source axis.
fn box_taps(old_len: usize, new_len: usize, i: usize) -> Vec<(usize, f64)> {
    let scale = old_len as f64 / new_len as f64;
    let lo = i as f64 * scale;
    let hi = lo + scale;
    let j0 = lo.floor() as usize;
    let j1 = (hi.ceil() as usize).min(old_len);

    let mut taps = Vec::with_capacity(j1 - j0);
    for j in j0..j1 {
        let cover = (hi.min((j + 1) as f64) - lo.max(j as f64)).max(0.0);
        if cover > 0.0 {
            taps.push((j, cover / scale));
        }
    }
    taps
}

/// Double the width and height with the Scale2x pixel-art rule.
///
/// Every source pixel expands into a 2x2 block chosen from its 4-neighbors,
/// so flat regions stay flat and single-pixel diagonals turn into clean
/// staircases. Works per slice and channel on any comparable value type.
///
/// # Example
///
/// ```
/// use voxim_image::{Image, ImageShape};
/// use voxim_imgproc::resize::resize_double_xy;
///
/// let image = Image::from_shape_vec(
///     ImageShape { width: 2, height: 2, depth: 1, channels: 1 },
///     vec![1u8, 1, 1, 2],
/// )
/// .unwrap();
///
/// let doubled = resize_double_xy(&image).unwrap();
///
/// assert_eq!(doubled.width(), 4);
/// assert_eq!(doubled.height(), 4);
/// ```
pub fn resize_double_xy<T>(src: &Image<T>) -> Result<Image<T>, ImageError>
where
    T: Copy + PartialEq + Send + Sync,
{
    let shape = src.shape();
    let (w, h) = (shape.width, shape.height);
    let dst_shape = ImageShape {
        width: 2 * w,
        height: 2 * h,
        ..shape
    };

    let src_data = src.as_slice();
    let mut dst = Image::from_shape_val(dst_shape, src_data[0])?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(4 * w)
        .enumerate()
        .for_each(|(r, rows)| {
            let y = r % h;
            let z = (r / h) % shape.depth;
            let c = r / (h * shape.depth);
            let ym = y.saturating_sub(1);
            let yp = (y + 1).min(h - 1);
            let (top, bottom) = rows.split_at_mut(2 * w);
            for x in 0..w {
                let xm = x.saturating_sub(1);
                let xp = (x + 1).min(w - 1);

                let e = src_data[src.offset(x, y, z, c)];
                let b = src_data[src.offset(x, ym, z, c)];
                let d = src_data[src.offset(xm, y, z, c)];
                let f = src_data[src.offset(xp, y, z, c)];
                let hh = src_data[src.offset(x, yp, z, c)];

                let (e0, e1, e2, e3) = if b != hh && d != f {
                    (
                        if d == b { d } else { e },
                        if b == f { f } else { e },
                        if d == hh { d } else { e },
                        if hh == f { f } else { e },
                    )
                } else {
                    (e, e, e, e)
                };
                top[2 * x] = e0;
                top[2 * x + 1] = e1;
                bottom[2 * x] = e2;
                bottom[2 * x + 1] = e3;
            }
        });
    Ok(dst)
}

/// Triple the width and height with the Scale3x pixel-art rule.
///
/// The 3x3 expansion of every source pixel follows its 8-neighborhood; see
/// [`resize_double_xy`] for the 2x variant.
pub fn resize_triple_xy<T>(src: &Image<T>) -> Result<Image<T>, ImageError>
where
    T: Copy + PartialEq + Send + Sync,
{
    let shape = src.shape();
    let (w, h) = (shape.width, shape.height);
    let dst_shape = ImageShape {
        width: 3 * w,
        height: 3 * h,
        ..shape
    };

    let src_data = src.as_slice();
    let mut dst = Image::from_shape_val(dst_shape, src_data[0])?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(9 * w)
        .enumerate()
        .for_each(|(r, rows)| {
            let y = r % h;
            let z = (r / h) % shape.depth;
            let c = r / (h * shape.depth);
            let ym = y.saturating_sub(1);
            let yp = (y + 1).min(h - 1);
            let (top, rest) = rows.split_at_mut(3 * w);
            let (mid, bottom) = rest.split_at_mut(3 * w);
            for x in 0..w {
                let xm = x.saturating_sub(1);
                let xp = (x + 1).min(w - 1);

                let a = src_data[src.offset(xm, ym, z, c)];
                let b = src_data[src.offset(x, ym, z, c)];
                let cc = src_data[src.offset(xp, ym, z, c)];
                let d = src_data[src.offset(xm, y, z, c)];
                let e = src_data[src.offset(x, y, z, c)];
                let f = src_data[src.offset(xp, y, z, c)];
                let g = src_data[src.offset(xm, yp, z, c)];
                let hh = src_data[src.offset(x, yp, z, c)];
                let i = src_data[src.offset(xp, yp, z, c)];

                let cell = if b != hh && d != f {
                    [
                        if d == b { d } else { e },
                        if (d == b && e != cc) || (b == f && e != a) {
                            b
                        } else {
                            e
                        },
                        if b == f { f } else { e },
                        if (d == b && e != g) || (d == hh && e != a) {
                            d
                        } else {
                            e
                        },
                        e,
                        if (b == f && e != i) || (hh == f && e != cc) {
                            f
                        } else {
                            e
                        },
                        if d == hh { d } else { e },
                        if (d == hh && e != i) || (hh == f && e != g) {
                            hh
                        } else {
                            e
                        },
                        if hh == f { f } else { e },
                    ]
                } else {
                    [e; 9]
                };
                top[3 * x..3 * x + 3].copy_from_slice(&cell[0..3]);
                mid[3 * x..3 * x + 3].copy_from_slice(&cell[3..6]);
                bottom[3 * x..3 * x + 3].copy_from_slice(&cell[6..9]);
            }
        });
    Ok(dst)
}

/// 3x3 low-pass kernel applied before decimation in [`resize_half_xy`].
const HALF_KERNEL: [f64; 9] = [
    0.07842776544,
    0.1231940459,
    0.07842776544,
    0.1231940459,
    0.1935127547,
    0.1231940459,
    0.07842776544,
    0.1231940459,
    0.07842776544,
];

/// Halve the width and height with a 3x3 antialias filter.
///
/// The output is `(w / 2, h / 2)` (integer division); each output pixel is
/// the filtered source value at the odd coordinates `(2x + 1, 2y + 1)` with
/// edge-clamped taps.
///
/// # Errors
///
/// Fails when the width or height is 1, since the halved axis would be empty.
pub fn resize_half_xy(src: &Image<f64>) -> Result<Image<f64>, TransformError> {
    let shape = src.shape();
    let (w, h) = (shape.width, shape.height);
    let (nw, nh) = (w / 2, h / 2);
    if nw == 0 {
        return Err(TransformError::EmptyResizeTarget('x'));
    }
    if nh == 0 {
        return Err(TransformError::EmptyResizeTarget('y'));
    }
    let dst_shape = ImageShape {
        width: nw,
        height: nh,
        ..shape
    };

    let src_data = src.as_slice();
    let mut dst = Image::from_shape_val(dst_shape, 0.0)?;
    dst.as_slice_mut()
        .par_chunks_exact_mut(nw)
        .enumerate()
        .for_each(|(r, row)| {
            let oy = r % nh;
            let z = (r / nh) % shape.depth;
            let c = r / (nh * shape.depth);
            let cy = 2 * oy + 1;
            for (ox, value) in row.iter_mut().enumerate() {
                let cx = 2 * ox + 1;
                let mut acc = 0.0;
                for dy in 0..3 {
                    let sy = (cy + dy).saturating_sub(1).min(h - 1);
                    for dx in 0..3 {
                        let sx = (cx + dx).saturating_sub(1).min(w - 1);
                        acc += HALF_KERNEL[dx + 3 * dy] * src_data[src.offset(sx, sy, z, c)];
                    }
                }
                *value = acc;
            }
        });
    Ok(dst)
}
