use std::str::FromStr;

use crate::error::ImageError;

/// One of the four image axes.
///
/// Axes are named by the lowercase characters `x`, `y`, `z` and `c`, in the
/// same order they appear in an [`ImageShape`](crate::image::ImageShape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis, fastest varying in memory.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis.
    Z,
    /// Channel axis, slowest varying in memory.
    C,
}

impl Axis {
    /// All four axes in `(x, y, z, c)` order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::C];

    /// Parse an axis from its lowercase character name.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_image::Axis;
    ///
    /// assert_eq!(Axis::from_char('z').unwrap(), Axis::Z);
    /// assert!(Axis::from_char('w').is_err());
    /// ```
    pub fn from_char(ch: char) -> Result<Self, ImageError> {
        match ch {
            'x' => Ok(Self::X),
            'y' => Ok(Self::Y),
            'z' => Ok(Self::Z),
            'c' => Ok(Self::C),
            _ => Err(ImageError::InvalidAxis(ch)),
        }
    }

    /// The position of the axis in `(x, y, z, c)` shape order.
    pub const fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::C => 3,
        }
    }

    /// The lowercase character name of the axis.
    pub const fn to_char(&self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::C => 'c',
        }
    }
}

/// A reordering of the four image axes.
///
/// A permutation is written as a four character string such as `"zxyc"`:
/// position `k` of the string names the source axis that becomes axis `k`
/// of the result. Permuting a `(10, 30, 40, 3)` image by `"zxyc"` yields a
/// `(40, 10, 30, 3)` image.
///
/// # Examples
///
/// ```
/// use voxim_image::{Axis, AxisPermutation};
///
/// let perm: AxisPermutation = "zxyc".parse().unwrap();
/// assert_eq!(perm.axes(), &[Axis::Z, Axis::X, Axis::Y, Axis::C]);
/// assert!(!perm.is_identity());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPermutation([Axis; 4]);

impl AxisPermutation {
    /// Create a permutation from four axes, each of which must appear once.
    pub fn new(axes: [Axis; 4]) -> Result<Self, ImageError> {
        let mut seen = [false; 4];
        for axis in &axes {
            if seen[axis.index()] {
                let chars = axes.iter().map(Axis::to_char).collect();
                return Err(ImageError::InvalidPermutation(chars));
            }
            seen[axis.index()] = true;
        }
        Ok(Self(axes))
    }

    /// The identity permutation `"xyzc"`.
    pub fn identity() -> Self {
        Self(Axis::ALL)
    }

    /// The source axes in result order.
    pub fn axes(&self) -> &[Axis; 4] {
        &self.0
    }

    /// Whether the permutation leaves every axis in place.
    pub fn is_identity(&self) -> bool {
        self.0 == Axis::ALL
    }

    /// The permutation that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxim_image::AxisPermutation;
    ///
    /// let perm: AxisPermutation = "zxyc".parse().unwrap();
    /// let inv: AxisPermutation = "yzxc".parse().unwrap();
    /// assert_eq!(perm.inverse(), inv);
    /// ```
    pub fn inverse(&self) -> Self {
        let mut axes = Axis::ALL;
        for (k, axis) in self.0.iter().enumerate() {
            axes[axis.index()] = Axis::ALL[k];
        }
        Self(axes)
    }
}

impl FromStr for AxisPermutation {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut axes = Axis::ALL;
        let mut count = 0;
        for (k, ch) in s.chars().enumerate() {
            if k >= 4 {
                return Err(ImageError::InvalidPermutation(s.to_string()));
            }
            axes[k] = Axis::from_char(ch)?;
            count += 1;
        }
        if count < 4 {
            return Err(ImageError::InvalidPermutation(s.to_string()));
        }
        Self::new(axes).map_err(|_| ImageError::InvalidPermutation(s.to_string()))
    }
}
