//! The synthesized point-mass cloud.

use nalgebra::Point3;

use crate::error::SmogError;
use crate::mass::{compute_mass_properties, MassProperties};

/// Paired positions and masses.
///
/// Constructed once and never mutated: [`concat`](PointMassCloud::concat)
/// builds a new cloud rather than extending an existing one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointMassCloud {
    positions: Vec<Point3<f64>>,
    masses: Vec<f64>,
}

impl PointMassCloud {
    /// Pair `positions` with `masses`.
    ///
    /// Returns [`SmogError::ShapeMismatch`] if the lengths differ.
    pub fn new(positions: Vec<Point3<f64>>, masses: Vec<f64>) -> Result<Self, SmogError> {
        if positions.len() != masses.len() {
            return Err(SmogError::ShapeMismatch {
                positions: positions.len(),
                masses: masses.len(),
            });
        }
        Ok(Self { positions, masses })
    }

    /// Join several clouds into one, preserving order.
    pub fn concat<'a>(clouds: impl IntoIterator<Item = &'a PointMassCloud>) -> Self {
        let mut positions = Vec::new();
        let mut masses = Vec::new();
        for cloud in clouds {
            positions.extend_from_slice(&cloud.positions);
            masses.extend_from_slice(&cloud.masses);
        }
        Self { positions, masses }
    }

    /// Point positions.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Point masses, index-aligned with [`positions`](Self::positions).
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Whether the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterate `(position, mass)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point3<f64>, f64)> + '_ {
        self.positions.iter().zip(self.masses.iter().copied())
    }

    /// Aggregate mass properties of the cloud.
    pub fn mass_properties(&self) -> Result<MassProperties, SmogError> {
        compute_mass_properties(&self.positions, &self.masses)
    }

    /// Split into `(positions, masses)`.
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<f64>) {
        (self.positions, self.masses)
    }
}
