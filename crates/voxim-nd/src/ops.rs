use voxim_image::{Axis, AxisPermutation, Image};
use voxim_imgproc::error::TransformError;
use voxim_imgproc::resize::ResizeTarget;

use crate::args::{AutocropArgs, ResizeArgs, RotateArgs, RotateXyArgs, ShiftArgs, WarpArgs};
use crate::convert::{FromArray, IntoArray, NdImage};
use crate::provider::{NativeProvider, TransformProvider};

/// Remove the uniform-colored border of an image.
///
/// The border color is `args.color`, one value per channel; an empty or
/// all-zero vector means the color is read off the image corner instead.
/// `args.axes` names the axes to crop as a string over `xyz`, processed
/// in the given order.
///
/// # Errors
///
/// Returns an error if an axis character is unknown, if the color length
/// does not match the channel count, or if an axis would crop away
/// entirely.
pub fn autocrop(array: NdImage, args: &AutocropArgs) -> Result<NdImage, TransformError> {
    autocrop_with(&NativeProvider, array, args)
}

/// [`autocrop`] through a caller-chosen provider.
pub fn autocrop_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    args: &AutocropArgs,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    let color = if args.color.is_empty() || args.color.iter().all(|&v| v == 0.0) {
        None
    } else {
        Some(args.color.as_slice())
    };
    let axes = args
        .axes
        .chars()
        .map(Axis::from_char)
        .collect::<Result<Vec<_>, _>>()?;
    let cropped = provider.autocrop(&image, color, &axes)?;
    Ok(cropped.into_array()?)
}

/// Rotate an image by an angle in degrees, growing the canvas to fit the
/// rotated content. Multiples of 90 degrees are exact pixel shuffles.
///
/// # Errors
///
/// Returns an error if the image cannot be rebuilt, which only a
/// malformed input array triggers.
pub fn imrotate(array: NdImage, angle: f64, args: &RotateArgs) -> Result<NdImage, TransformError> {
    imrotate_with(&NativeProvider, array, angle, args)
}

/// [`imrotate`] through a caller-chosen provider.
pub fn imrotate_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    angle: f64,
    args: &RotateArgs,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    let rotated = provider.rotate(&image, angle, args.interpolation, args.boundary)?;
    Ok(rotated.into_array()?)
}

/// Rotate an image about the point `(cx, cy)` with a zoom factor, keeping
/// the canvas size.
///
/// # Errors
///
/// Returns an error if the image cannot be rebuilt from the array.
pub fn rotate_xy(
    array: NdImage,
    angle: f64,
    cx: f64,
    cy: f64,
    args: &RotateXyArgs,
) -> Result<NdImage, TransformError> {
    rotate_xy_with(&NativeProvider, array, angle, cx, cy, args)
}

/// [`rotate_xy`] through a caller-chosen provider.
pub fn rotate_xy_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    angle: f64,
    cx: f64,
    cy: f64,
    args: &RotateXyArgs,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    let rotated = provider.rotate_about(
        &image,
        angle,
        (cx, cy),
        args.zoom,
        args.interpolation,
        args.boundary,
    )?;
    Ok(rotated.into_array()?)
}

/// Reverse pixel order along one axis, named by its character.
///
/// # Errors
///
/// Returns an error if `axis` is not one of `x`, `y`, `z`, `c`.
///
/// # Example
///
/// ```
/// use ndarray::Array4;
///
/// let array = Array4::from_shape_fn((3, 1, 1, 1), |(x, _, _, _)| x as f64);
/// let mirrored = voxim_nd::ops::mirror(array, 'x').unwrap();
///
/// assert_eq!(mirrored[[0, 0, 0, 0]], 2.0);
/// assert_eq!(mirrored[[2, 0, 0, 0]], 0.0);
/// ```
pub fn mirror(array: NdImage, axis: char) -> Result<NdImage, TransformError> {
    mirror_with(&NativeProvider, array, axis)
}

/// [`mirror`] through a caller-chosen provider.
pub fn mirror_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    axis: char,
) -> Result<NdImage, TransformError> {
    let axis = Axis::from_char(axis)?;
    let mut image = Image::from_array(array)?;
    provider.mirror(&mut image, axis)?;
    Ok(image.into_array()?)
}

/// Reorder the four axes according to a permutation string over `xyzc`.
///
/// Position `k` of the string names the source axis that becomes result
/// axis `k`, so `"zxyc"` moves the z extent to the front: a
/// `(10, 30, 40, 3)` array comes back as `(40, 10, 30, 3)`.
///
/// # Errors
///
/// Returns an error if the string is not a permutation of `xyzc`.
pub fn permute_axes(array: NdImage, permutation: &str) -> Result<NdImage, TransformError> {
    permute_axes_with(&NativeProvider, array, permutation)
}

/// [`permute_axes`] through a caller-chosen provider.
pub fn permute_axes_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    permutation: &str,
) -> Result<NdImage, TransformError> {
    let perm = permutation.parse::<AxisPermutation>()?;
    let image = Image::from_array(array)?;
    let permuted = provider.permute_axes(&image, &perm)?;
    Ok(permuted.into_array()?)
}

/// Double width and height with the pixel-art doubling kernel.
///
/// # Errors
///
/// Returns an error if the image cannot be rebuilt from the array.
pub fn resize_double_xy(array: NdImage) -> Result<NdImage, TransformError> {
    resize_double_xy_with(&NativeProvider, array)
}

/// [`resize_double_xy`] through a caller-chosen provider.
pub fn resize_double_xy_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    Ok(provider.resize_double_xy(&image)?.into_array()?)
}

/// Halve width and height, rounding both down, with the smoothing kernel.
///
/// # Errors
///
/// Returns an error if either spatial extent is a single pixel, since the
/// halved axis would be empty.
pub fn resize_half_xy(array: NdImage) -> Result<NdImage, TransformError> {
    resize_half_xy_with(&NativeProvider, array)
}

/// [`resize_half_xy`] through a caller-chosen provider.
pub fn resize_half_xy_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    Ok(provider.resize_half_xy(&image)?.into_array()?)
}

/// Triple width and height with the pixel-art tripling kernel.
///
/// # Errors
///
/// Returns an error if the image cannot be rebuilt from the array.
pub fn resize_triple_xy(array: NdImage) -> Result<NdImage, TransformError> {
    resize_triple_xy_with(&NativeProvider, array)
}

/// [`resize_triple_xy`] through a caller-chosen provider.
pub fn resize_triple_xy_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    Ok(provider.resize_triple_xy(&image)?.into_array()?)
}

/// Translate the content by integer offsets per axis. Vacated regions are
/// filled according to `args.boundary`.
///
/// # Errors
///
/// Returns an error if the image cannot be rebuilt from the array.
///
/// # Example
///
/// ```
/// use ndarray::Array4;
/// use voxim_nd::args::ShiftArgs;
///
/// let array = Array4::from_shape_fn((4, 1, 1, 1), |(x, _, _, _)| (x + 1) as f64);
/// let args = ShiftArgs {
///     delta_x: 1,
///     ..Default::default()
/// };
/// let shifted = voxim_nd::ops::imshift(array, &args).unwrap();
///
/// assert_eq!(shifted[[0, 0, 0, 0]], 0.0);
/// assert_eq!(shifted[[3, 0, 0, 0]], 3.0);
/// ```
pub fn imshift(array: NdImage, args: &ShiftArgs) -> Result<NdImage, TransformError> {
    imshift_with(&NativeProvider, array, args)
}

/// [`imshift`] through a caller-chosen provider.
pub fn imshift_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    args: &ShiftArgs,
) -> Result<NdImage, TransformError> {
    let mut image = Image::from_array(array)?;
    provider.shift(
        &mut image,
        [args.delta_x, args.delta_y, args.delta_z, args.delta_c],
        args.boundary,
    )?;
    Ok(image.into_array()?)
}

/// Resize every axis to an explicit pixel count or a percentage of its
/// current length, with a selectable resampling algorithm.
///
/// # Errors
///
/// Returns an error if a target axis resolves to zero length.
///
/// # Example
///
/// ```
/// use ndarray::Array4;
/// use voxim_nd::args::ResizeArgs;
///
/// let array = Array4::from_shape_fn((4, 4, 1, 1), |(x, _, _, _)| x as f64);
/// let args = ResizeArgs {
///     size_x: -50,
///     size_y: -50,
///     ..Default::default()
/// };
/// let half = voxim_nd::ops::resize(array, &args).unwrap();
///
/// assert_eq!(half.dim(), (2, 2, 1, 1));
/// assert_eq!(half[[1, 0, 0, 0]], 2.0);
/// ```
pub fn resize(array: NdImage, args: &ResizeArgs) -> Result<NdImage, TransformError> {
    resize_with(&NativeProvider, array, args)
}

/// [`resize`] through a caller-chosen provider.
pub fn resize_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    args: &ResizeArgs,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    let targets = [
        resize_target(args.size_x),
        resize_target(args.size_y),
        resize_target(args.size_z),
        resize_target(args.size_c),
    ];
    let centering = [
        args.centering_x,
        args.centering_y,
        args.centering_z,
        args.centering_c,
    ];
    let resized = provider.resize(
        &image,
        targets,
        args.interpolation_type,
        args.boundary,
        centering,
    )?;
    Ok(resized.into_array()?)
}

fn resize_target(size: i64) -> ResizeTarget {
    if size < 0 {
        ResizeTarget::Percent((-size) as f64)
    } else {
        ResizeTarget::Pixels(size as usize)
    }
}

/// Displace pixels according to a vector field stacked along the channel
/// axis of `field` (channel 0 moves x, channel 1 moves y, channel 2
/// moves z). `args.mode` selects backward or forward application and
/// absolute or relative coordinates; every mode except the
/// absolute-backward default requires the field to match the image
/// spatially.
///
/// # Errors
///
/// Returns an error if the field carries more than three channels, or
/// does not match the image spatially in a mode that requires it.
pub fn warp(array: NdImage, field: NdImage, args: &WarpArgs) -> Result<NdImage, TransformError> {
    warp_with(&NativeProvider, array, field, args)
}

/// [`warp`] through a caller-chosen provider.
pub fn warp_with<P: TransformProvider>(
    provider: &P,
    array: NdImage,
    field: NdImage,
    args: &WarpArgs,
) -> Result<NdImage, TransformError> {
    let image = Image::from_array(array)?;
    let field = Image::from_array(field)?;
    let warped = provider.warp(&image, &field, args.mode, args.interpolation, args.boundary)?;
    Ok(warped.into_array()?)
}
