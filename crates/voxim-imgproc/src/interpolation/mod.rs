//! Value interpolation for samples at fractional coordinates.
//!
//! Rotation and backward warping resample the source image off the pixel
//! grid; the samplers here evaluate the source at fractional positions with
//! the requested kernel, deferring out-of-domain taps to a
//! [`BorderMode`](crate::boundary::BorderMode).

mod cubic;
mod lanczos;
mod linear;
mod nearest;

pub(crate) use cubic::cubic_weights;
pub(crate) use lanczos::lanczos2_weight;

use voxim_image::Image;

use crate::boundary::BorderMode;
use crate::error::TransformError;

/// Interpolation used when sampling at fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Value of the nearest pixel.
    Nearest,
    /// Linear blend of the two neighbors per axis.
    #[default]
    Linear,
    /// Catmull-Rom cubic over four neighbors per axis.
    Cubic,
}

impl TryFrom<i64> for InterpolationMode {
    type Error = TransformError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Cubic),
            code => Err(TransformError::UnsupportedCode {
                what: "interpolation",
                code,
            }),
        }
    }
}

/// Sample `src` at fractional `(x, y)` within slice `z` and channel `c`.
#[inline]
pub fn sample_xy(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: usize,
    c: usize,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> f64 {
    match interpolation {
        InterpolationMode::Nearest => nearest::nearest_xy(src, x, y, z, c, border),
        InterpolationMode::Linear => linear::linear_xy(src, x, y, z, c, border),
        InterpolationMode::Cubic => cubic::cubic_xy(src, x, y, z, c, border),
    }
}

/// Sample `src` at fractional `(x, y, z)` for channel `c`.
#[inline]
pub fn sample_xyz(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: f64,
    c: usize,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> f64 {
    match interpolation {
        InterpolationMode::Nearest => nearest::nearest_xyz(src, x, y, z, c, border),
        InterpolationMode::Linear => linear::linear_xyz(src, x, y, z, c, border),
        InterpolationMode::Cubic => cubic::cubic_xyz(src, x, y, z, c, border),
    }
}

#[cfg(test)]
mod tests {
    use voxim_image::{Image, ImageError, ImageShape};

    use super::{BorderMode, InterpolationMode, TransformError};

    fn ramp_2x2() -> Result<Image<f64>, ImageError> {
        // values: (0,0)=0, (1,0)=1, (0,1)=2, (1,1)=3
        Image::from_shape_vec(
            ImageShape {
                width: 2,
                height: 2,
                depth: 1,
                channels: 1,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )
    }

    #[test]
    fn codes_map_to_modes() {
        assert_eq!(
            InterpolationMode::try_from(0),
            Ok(InterpolationMode::Nearest)
        );
        assert_eq!(InterpolationMode::try_from(1), Ok(InterpolationMode::Linear));
        assert_eq!(InterpolationMode::try_from(2), Ok(InterpolationMode::Cubic));
        assert_eq!(
            InterpolationMode::try_from(5),
            Err(TransformError::UnsupportedCode {
                what: "interpolation",
                code: 5
            })
        );
    }

    #[test]
    fn integer_positions_reproduce_values() -> Result<(), ImageError> {
        let image = ramp_2x2()?;
        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Linear,
            InterpolationMode::Cubic,
        ] {
            for (x, y, expected) in [(0, 0, 0.0), (1, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0)] {
                let got = super::sample_xy(
                    &image,
                    x as f64,
                    y as f64,
                    0,
                    0,
                    mode,
                    BorderMode::Dirichlet,
                );
                assert!((got - expected).abs() < 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn linear_blends_midpoints() -> Result<(), ImageError> {
        let image = ramp_2x2()?;
        let center = super::sample_xy(
            &image,
            0.5,
            0.5,
            0,
            0,
            InterpolationMode::Linear,
            BorderMode::Neumann,
        );
        assert!((center - 1.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn dirichlet_fades_outside_the_domain() -> Result<(), ImageError> {
        let image = ramp_2x2()?;
        let outside = super::sample_xy(
            &image,
            -0.5,
            0.0,
            0,
            0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        );
        // halfway between the zero border and the corner value 0.0
        assert!(outside.abs() < 1e-12);
        let outside = super::sample_xy(
            &image,
            1.5,
            0.0,
            0,
            0,
            InterpolationMode::Linear,
            BorderMode::Dirichlet,
        );
        // halfway between 1.0 and the zero border
        assert!((outside - 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn sample_xyz_blends_across_slices() -> Result<(), ImageError> {
        let image = Image::from_shape_vec(
            ImageShape {
                width: 1,
                height: 1,
                depth: 2,
                channels: 1,
            },
            vec![10.0, 30.0],
        )?;
        let mid = super::sample_xyz(
            &image,
            0.0,
            0.0,
            0.5,
            0,
            InterpolationMode::Linear,
            BorderMode::Neumann,
        );
        assert!((mid - 20.0).abs() < 1e-12);
        Ok(())
    }
}
