//! Coordinate axes and diagonal inertia.

use std::fmt;

/// One of the three body-frame axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (`X = 0`, `Y = 1`, `Z = 2`).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes perpendicular to this one, in canonical order.
    ///
    /// The moment of inertia about an axis depends only on the
    /// coordinates along these two.
    pub fn perpendicular(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Moments of inertia about the three coordinate axes.
///
/// Products of inertia (off-diagonal terms) are not modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiagonalInertia {
    /// Moment about the x axis: `Σ m (y² + z²)`.
    pub ixx: f64,
    /// Moment about the y axis: `Σ m (x² + z²)`.
    pub iyy: f64,
    /// Moment about the z axis: `Σ m (x² + y²)`.
    pub izz: f64,
}

impl DiagonalInertia {
    /// Create from the three diagonal moments.
    pub fn new(ixx: f64, iyy: f64, izz: f64) -> Self {
        Self { ixx, iyy, izz }
    }

    /// Moment about `axis`.
    pub fn about(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.ixx,
            Axis::Y => self.iyy,
            Axis::Z => self.izz,
        }
    }

    /// The moments as `[ixx, iyy, izz]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.ixx, self.iyy, self.izz]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_axes_exclude_self() {
        for axis in Axis::ALL {
            let (a, b) = axis.perpendicular();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert!(a.index() < b.index());
        }
    }

    #[test]
    fn about_matches_fields() {
        let i = DiagonalInertia::new(1.0, 2.0, 3.0);
        assert_eq!(i.about(Axis::X), 1.0);
        assert_eq!(i.about(Axis::Y), 2.0);
        assert_eq!(i.about(Axis::Z), 3.0);
        assert_eq!(i.to_array(), [1.0, 2.0, 3.0]);
    }
}
