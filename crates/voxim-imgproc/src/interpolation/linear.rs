use voxim_image::Image;

use crate::boundary::BorderMode;

/// Bilinear value at fractional `(x, y)`.
///
/// Out-of-domain corners follow the border mode; under
/// [`BorderMode::Dirichlet`] they contribute zero.
#[inline]
pub(crate) fn linear_xy(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: usize,
    c: usize,
    border: BorderMode,
) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let x0 = x0 as isize;
    let y0 = y0 as isize;

    let data = src.as_slice();
    let mut acc = 0.0;
    for (dy, wy) in [(0, 1.0 - fy), (1, fy)] {
        if wy == 0.0 {
            continue;
        }
        let Some(iy) = border.map_index(y0 + dy, src.height()) else {
            continue;
        };
        for (dx, wx) in [(0, 1.0 - fx), (1, fx)] {
            if wx == 0.0 {
                continue;
            }
            let Some(ix) = border.map_index(x0 + dx, src.width()) else {
                continue;
            };
            acc += wy * wx * data[src.offset(ix, iy, z, c)];
        }
    }
    acc
}

/// Trilinear value at fractional `(x, y, z)`.
#[inline]
pub(crate) fn linear_xyz(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: f64,
    c: usize,
    border: BorderMode,
) -> f64 {
    let z0 = z.floor();
    let fz = z - z0;
    let z0 = z0 as isize;

    let mut acc = 0.0;
    for (dz, wz) in [(0, 1.0 - fz), (1, fz)] {
        if wz == 0.0 {
            continue;
        }
        let Some(iz) = border.map_index(z0 + dz, src.depth()) else {
            continue;
        };
        acc += wz * linear_xy(src, x, y, iz, c, border);
    }
    acc
}
