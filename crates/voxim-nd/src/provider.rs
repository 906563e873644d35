use voxim_image::{Axis, AxisPermutation, Image};
use voxim_imgproc::boundary::BorderMode;
use voxim_imgproc::error::TransformError;
use voxim_imgproc::interpolation::InterpolationMode;
use voxim_imgproc::resize::{ResizeMode, ResizeTarget};
use voxim_imgproc::warp::WarpMode;

/// The transform capability the array entry points are written against.
///
/// [`NativeProvider`] is the in-process implementation; a wrapper that
/// instruments calls, or an engine living elsewhere, can stand in without
/// touching the dispatch code in [`ops`](crate::ops).
pub trait TransformProvider {
    /// Remove the uniform-colored border along the given axes.
    fn autocrop(
        &self,
        src: &Image<f64>,
        color: Option<&[f64]>,
        axes: &[Axis],
    ) -> Result<Image<f64>, TransformError>;

    /// Rotate the whole image, growing the canvas to fit.
    fn rotate(
        &self,
        src: &Image<f64>,
        angle_deg: f64,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError>;

    /// Rotate and zoom about an explicit center, keeping the canvas.
    fn rotate_about(
        &self,
        src: &Image<f64>,
        angle_deg: f64,
        center: (f64, f64),
        zoom: f64,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError>;

    /// Reverse the image along one axis in place.
    fn mirror(&self, image: &mut Image<f64>, axis: Axis) -> Result<(), TransformError>;

    /// Reorder the four axes.
    fn permute_axes(
        &self,
        src: &Image<f64>,
        perm: &AxisPermutation,
    ) -> Result<Image<f64>, TransformError>;

    /// Double width and height with the fixed-ratio kernel.
    fn resize_double_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError>;

    /// Halve width and height with the fixed-ratio kernel.
    fn resize_half_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError>;

    /// Triple width and height with the fixed-ratio kernel.
    fn resize_triple_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError>;

    /// Translate the content by per-axis offsets in place.
    fn shift(
        &self,
        image: &mut Image<f64>,
        deltas: [i64; 4],
        border: BorderMode,
    ) -> Result<(), TransformError>;

    /// Resize to per-axis targets with a selectable algorithm.
    fn resize(
        &self,
        src: &Image<f64>,
        targets: [ResizeTarget; 4],
        mode: ResizeMode,
        border: BorderMode,
        centering: [f64; 4],
    ) -> Result<Image<f64>, TransformError>;

    /// Displace pixels according to a vector field.
    fn warp(
        &self,
        src: &Image<f64>,
        field: &Image<f64>,
        mode: WarpMode,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError>;
}

/// Provider backed by the CPU kernels in [`voxim_imgproc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeProvider;

impl TransformProvider for NativeProvider {
    fn autocrop(
        &self,
        src: &Image<f64>,
        color: Option<&[f64]>,
        axes: &[Axis],
    ) -> Result<Image<f64>, TransformError> {
        voxim_imgproc::crop::autocrop(src, color, axes)
    }

    fn rotate(
        &self,
        src: &Image<f64>,
        angle_deg: f64,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError> {
        Ok(voxim_imgproc::rotate::rotate(
            src,
            angle_deg,
            interpolation,
            border,
        )?)
    }

    fn rotate_about(
        &self,
        src: &Image<f64>,
        angle_deg: f64,
        center: (f64, f64),
        zoom: f64,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError> {
        Ok(voxim_imgproc::rotate::rotate_about(
            src,
            angle_deg,
            center,
            zoom,
            interpolation,
            border,
        )?)
    }

    fn mirror(&self, image: &mut Image<f64>, axis: Axis) -> Result<(), TransformError> {
        voxim_imgproc::flip::mirror(image, axis);
        Ok(())
    }

    fn permute_axes(
        &self,
        src: &Image<f64>,
        perm: &AxisPermutation,
    ) -> Result<Image<f64>, TransformError> {
        Ok(voxim_imgproc::permute::permute_axes(src, perm)?)
    }

    fn resize_double_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError> {
        Ok(voxim_imgproc::resize::resize_double_xy(src)?)
    }

    fn resize_half_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError> {
        voxim_imgproc::resize::resize_half_xy(src)
    }

    fn resize_triple_xy(&self, src: &Image<f64>) -> Result<Image<f64>, TransformError> {
        Ok(voxim_imgproc::resize::resize_triple_xy(src)?)
    }

    fn shift(
        &self,
        image: &mut Image<f64>,
        deltas: [i64; 4],
        border: BorderMode,
    ) -> Result<(), TransformError> {
        voxim_imgproc::shift::shift(image, deltas, border);
        Ok(())
    }

    fn resize(
        &self,
        src: &Image<f64>,
        targets: [ResizeTarget; 4],
        mode: ResizeMode,
        border: BorderMode,
        centering: [f64; 4],
    ) -> Result<Image<f64>, TransformError> {
        voxim_imgproc::resize::resize(src, targets, mode, border, centering)
    }

    fn warp(
        &self,
        src: &Image<f64>,
        field: &Image<f64>,
        mode: WarpMode,
        interpolation: InterpolationMode,
        border: BorderMode,
    ) -> Result<Image<f64>, TransformError> {
        voxim_imgproc::warp::warp(src, field, mode, interpolation, border)
    }
}
