use voxim_image::Image;

use crate::boundary::BorderMode;

/// Catmull-Rom weights for the four taps around fractional offset `t` in `[0, 1)`.
///
/// The weights sum to one and reduce to `[0, 1, 0, 0]` at `t = 0`, so integer
/// positions reproduce the source values exactly.
#[inline]
pub(crate) fn cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -0.5 * t3 + t2 - 0.5 * t,
        1.5 * t3 - 2.5 * t2 + 1.0,
        -1.5 * t3 + 2.0 * t2 + 0.5 * t,
        0.5 * t3 - 0.5 * t2,
    ]
}

/// Bicubic value at fractional `(x, y)`.
#[inline]
pub(crate) fn cubic_xy(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: usize,
    c: usize,
    border: BorderMode,
) -> f64 {
    let x1 = x.floor();
    let y1 = y.floor();
    let wx = cubic_weights(x - x1);
    let wy = cubic_weights(y - y1);
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let data = src.as_slice();
    let mut acc = 0.0;
    for (dy, &wyk) in wy.iter().enumerate() {
        if wyk == 0.0 {
            continue;
        }
        let Some(iy) = border.map_index(y1 + dy as isize - 1, src.height()) else {
            continue;
        };
        for (dx, &wxk) in wx.iter().enumerate() {
            if wxk == 0.0 {
                continue;
            }
            let Some(ix) = border.map_index(x1 + dx as isize - 1, src.width()) else {
                continue;
            };
            acc += wyk * wxk * data[src.offset(ix, iy, z, c)];
        }
    }
    acc
}

/// Tricubic value at fractional `(x, y, z)`.
#[inline]
pub(crate) fn cubic_xyz(
    src: &Image<f64>,
    x: f64,
    y: f64,
    z: f64,
    c: usize,
    border: BorderMode,
) -> f64 {
    let z1 = z.floor();
    let wz = cubic_weights(z - z1);
    let z1 = z1 as isize;

    let mut acc = 0.0;
    for (dz, &wzk) in wz.iter().enumerate() {
        if wzk == 0.0 {
            continue;
        }
        let Some(iz) = border.map_index(z1 + dz as isize - 1, src.depth()) else {
            continue;
        };
        acc += wzk * cubic_xy(src, x, y, iz, c, border);
    }
    acc
}
