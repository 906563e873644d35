use crate::error::TransformError;

/// How samples outside the image domain are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Out-of-domain samples read as zero.
    ///
    /// Example: ...0 0 0 0 | a b c d | 0 0 0 0...
    #[default]
    Dirichlet,

    /// Out-of-domain samples clamp to the nearest edge value.
    ///
    /// Example: ...a a a a | a b c d | d d d d...
    Neumann,

    /// The image content tiles periodically.
    ///
    /// Example: ...a b c d | a b c d | a b c d...
    Periodic,
}

impl BorderMode {
    /// Maps index `i` to a valid index within `[0, len)`, or `None` when the
    /// sample reads as zero.
    ///
    /// # Arguments
    ///
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_imgproc::boundary::BorderMode;
    ///
    /// assert_eq!(BorderMode::Dirichlet.map_index(-1, 4), None);
    /// assert_eq!(BorderMode::Neumann.map_index(-1, 4), Some(0));
    /// assert_eq!(BorderMode::Periodic.map_index(-1, 4), Some(3));
    /// assert_eq!(BorderMode::Periodic.map_index(6, 4), Some(2));
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Dirichlet => None,
            BorderMode::Neumann => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Periodic => {
                let len = len as isize;
                Some(((i % len + len) % len) as usize)
            }
        }
    }
}

impl TryFrom<i64> for BorderMode {
    type Error = TransformError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Dirichlet),
            1 => Ok(Self::Neumann),
            2 => Ok(Self::Periodic),
            code => Err(TransformError::UnsupportedCode {
                what: "boundary condition",
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, TransformError};

    #[test]
    fn dirichlet_rejects_out_of_domain() {
        assert_eq!(BorderMode::Dirichlet.map_index(0, 3), Some(0));
        assert_eq!(BorderMode::Dirichlet.map_index(2, 3), Some(2));
        assert_eq!(BorderMode::Dirichlet.map_index(3, 3), None);
        assert_eq!(BorderMode::Dirichlet.map_index(-1, 3), None);
    }

    #[test]
    fn neumann_clamps_to_edges() {
        assert_eq!(BorderMode::Neumann.map_index(-5, 3), Some(0));
        assert_eq!(BorderMode::Neumann.map_index(7, 3), Some(2));
    }

    #[test]
    fn periodic_wraps_both_directions() {
        assert_eq!(BorderMode::Periodic.map_index(3, 3), Some(0));
        assert_eq!(BorderMode::Periodic.map_index(-4, 3), Some(2));
        assert_eq!(BorderMode::Periodic.map_index(-3, 3), Some(0));
    }

    #[test]
    fn codes_map_to_modes() {
        assert_eq!(BorderMode::try_from(0), Ok(BorderMode::Dirichlet));
        assert_eq!(BorderMode::try_from(1), Ok(BorderMode::Neumann));
        assert_eq!(BorderMode::try_from(2), Ok(BorderMode::Periodic));
        assert_eq!(
            BorderMode::try_from(3),
            Err(TransformError::UnsupportedCode {
                what: "boundary condition",
                code: 3
            })
        );
    }
}
