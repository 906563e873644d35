use std::f64::consts::PI;

/// Lanczos window with support 2, used by the resampling kernels.
///
/// Evaluates `sinc(x) * sinc(x / 2)` for `|x| < 2` and zero outside.
#[inline]
pub(crate) fn lanczos2_weight(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 1e-8 {
        return 1.0;
    }
    if ax >= 2.0 {
        return 0.0;
    }
    let px = PI * x;
    let hx = 0.5 * px;
    (px.sin() / px) * (hx.sin() / hx)
}

#[cfg(test)]
mod tests {
    use super::lanczos2_weight;

    #[test]
    fn window_shape() {
        assert_eq!(lanczos2_weight(0.0), 1.0);
        assert_eq!(lanczos2_weight(2.0), 0.0);
        assert_eq!(lanczos2_weight(-2.5), 0.0);
        // zero crossing at every non-zero integer inside the support
        assert!(lanczos2_weight(1.0).abs() < 1e-12);
        assert!(lanczos2_weight(-1.0).abs() < 1e-12);
    }

    #[test]
    fn window_is_symmetric() {
        for x in [0.3, 0.7, 1.2, 1.9] {
            let diff = lanczos2_weight(x) - lanczos2_weight(-x);
            assert!(diff.abs() < 1e-12);
        }
    }
}
