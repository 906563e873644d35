use voxim_image::Image;

use crate::boundary::BorderMode;

/// Nearest neighbor value at fractional `(x, y)`.
#[inline]
pub(crate) fn nearest_xy(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: usize,
    c: usize,
    border: BorderMode,
) -> f64 {
    let ix = border.map_index(x.round() as isize, src.width());
    let iy = border.map_index(y.round() as isize, src.height());
    match (ix, iy) {
        (Some(ix), Some(iy)) => src.as_slice()[src.offset(ix, iy, z, c)],
        _ => 0.0,
    }
}

/// Nearest neighbor value at fractional `(x, y, z)`.
#[inline]
pub(crate) fn nearest_xyz(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: f64,
    c: usize,
    border: BorderMode,
) -> f64 {
    let ix = border.map_index(x.round() as isize, src.width());
    let iy = border.map_index(y.round() as isize, src.height());
    let iz = border.map_index(z.round() as isize, src.depth());
    match (ix, iy, iz) {
        (Some(ix), Some(iy), Some(iz)) => src.as_slice()[src.offset(ix, iy, iz, c)],
        _ => 0.0,
    }
}
