use voxim_imgproc::boundary::BorderMode;
use voxim_imgproc::interpolation::InterpolationMode;
use voxim_imgproc::resize::ResizeMode;
use voxim_imgproc::warp::WarpMode;

/// Options for [`autocrop`](crate::ops::autocrop).
#[derive(Clone, Debug, PartialEq)]
pub struct AutocropArgs {
    /// Border color to strip, one value per channel. An empty or all-zero
    /// vector selects the color found at the image corner instead.
    pub color: Vec<f64>,
    /// Axes to crop, processed in the given order.
    pub axes: String,
}

impl Default for AutocropArgs {
    fn default() -> Self {
        Self {
            color: Vec::new(),
            axes: String::from("zyx"),
        }
    }
}

/// Options for [`imrotate`](crate::ops::imrotate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotateArgs {
    /// Sampling used off the pixel grid.
    pub interpolation: InterpolationMode,
    /// Handling of samples outside the source.
    pub boundary: BorderMode,
}

/// Options for [`rotate_xy`](crate::ops::rotate_xy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateXyArgs {
    /// Magnification about the rotation center.
    pub zoom: f64,
    /// Sampling used off the pixel grid.
    pub interpolation: InterpolationMode,
    /// Handling of samples outside the source.
    pub boundary: BorderMode,
}

impl Default for RotateXyArgs {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            interpolation: InterpolationMode::default(),
            boundary: BorderMode::default(),
        }
    }
}

/// Options for [`imshift`](crate::ops::imshift).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftArgs {
    /// Offset along the x axis in pixels.
    pub delta_x: i64,
    /// Offset along the y axis in pixels.
    pub delta_y: i64,
    /// Offset along the z axis in slices.
    pub delta_z: i64,
    /// Offset along the channel axis.
    pub delta_c: i64,
    /// Fill policy for the vacated region.
    pub boundary: BorderMode,
}

/// Options for [`resize`](crate::ops::resize).
///
/// A negative size requests a percentage of the current axis length, so
/// the all-defaults call leaves the image unchanged at 100% everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeArgs {
    /// Target width in pixels, or a percentage of the current width when
    /// negative.
    pub size_x: i64,
    /// Target height in pixels, or a percentage when negative.
    pub size_y: i64,
    /// Target depth in slices, or a percentage when negative.
    pub size_z: i64,
    /// Target channel count, or a percentage when negative.
    pub size_c: i64,
    /// Resampling algorithm.
    pub interpolation_type: ResizeMode,
    /// Handling of samples outside the source.
    pub boundary: BorderMode,
    /// Placement of the old content inside the new canvas along x, as a
    /// fraction in `[0, 1]`. Only read by [`ResizeMode::Fill`].
    pub centering_x: f64,
    /// Placement of the old content along y.
    pub centering_y: f64,
    /// Placement of the old content along z.
    pub centering_z: f64,
    /// Placement of the old content along c.
    pub centering_c: f64,
}

impl Default for ResizeArgs {
    fn default() -> Self {
        Self {
            size_x: -100,
            size_y: -100,
            size_z: -100,
            size_c: -100,
            interpolation_type: ResizeMode::default(),
            boundary: BorderMode::default(),
            centering_x: 0.0,
            centering_y: 0.0,
            centering_z: 0.0,
            centering_c: 0.0,
        }
    }
}

/// Options for [`warp`](crate::ops::warp).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarpArgs {
    /// How the displacement field is interpreted.
    pub mode: WarpMode,
    /// Sampling used off the pixel grid.
    pub interpolation: InterpolationMode,
    /// Handling of samples outside the source.
    pub boundary: BorderMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_documented_values() {
        let autocrop = AutocropArgs::default();
        assert!(autocrop.color.is_empty());
        assert_eq!(autocrop.axes, "zyx");

        let rotate = RotateArgs::default();
        assert_eq!(rotate.interpolation, InterpolationMode::Linear);
        assert_eq!(rotate.boundary, BorderMode::Dirichlet);

        let rotate_xy = RotateXyArgs::default();
        assert_eq!(rotate_xy.zoom, 1.0);
        assert_eq!(rotate_xy.interpolation, InterpolationMode::Linear);

        let shift = ShiftArgs::default();
        assert_eq!(
            (shift.delta_x, shift.delta_y, shift.delta_z, shift.delta_c),
            (0, 0, 0, 0)
        );
        assert_eq!(shift.boundary, BorderMode::Dirichlet);

        let resize = ResizeArgs::default();
        assert_eq!(resize.size_x, -100);
        assert_eq!(resize.size_c, -100);
        assert_eq!(resize.interpolation_type, ResizeMode::Nearest);
        assert_eq!(resize.centering_y, 0.0);

        let warp = WarpArgs::default();
        assert_eq!(warp.mode, WarpMode::BackwardAbsolute);
        assert_eq!(warp.interpolation, InterpolationMode::Linear);
        assert_eq!(warp.boundary, BorderMode::Dirichlet);
    }
}
