//! Aggregate mass properties of a point-mass set.
//!
//! [`compute_mass_properties`] is used both to verify synthesized clouds
//! and as a standalone utility on arbitrary `(positions, masses)` input.

use nalgebra::{Point3, Vector3};

use crate::error::SmogError;
use crate::inertia::DiagonalInertia;

/// Total mass, center of gravity, and diagonal inertia of a mass set.
///
/// The inertia is taken about axes through the center of gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassProperties {
    /// Sum of all masses.
    pub total_mass: f64,
    /// Mass-weighted average position.
    pub center_of_gravity: Point3<f64>,
    /// Moments about axes through `center_of_gravity`.
    pub inertia: DiagonalInertia,
}

/// Compute total mass, center of gravity, and diagonal inertia.
///
/// Inertia is evaluated with coordinates relative to the computed center
/// of gravity, so a rigid translation of every position leaves it
/// unchanged.
///
/// # Errors
///
/// [`SmogError::ShapeMismatch`] if the slices differ in length, and
/// [`SmogError::InvalidInput`] if they are empty or the masses do not
/// sum to a finite positive total.
pub fn compute_mass_properties(
    positions: &[Point3<f64>],
    masses: &[f64],
) -> Result<MassProperties, SmogError> {
    if positions.len() != masses.len() {
        return Err(SmogError::ShapeMismatch {
            positions: positions.len(),
            masses: masses.len(),
        });
    }
    if masses.is_empty() {
        return Err(SmogError::invalid_input(
            "at least one point is required to compute mass properties",
        ));
    }

    let total_mass: f64 = masses.iter().sum();
    if !total_mass.is_finite() || total_mass <= 0.0 {
        return Err(SmogError::invalid_input(format!(
            "masses must sum to a finite positive value, got {total_mass}"
        )));
    }

    let first_moment = positions
        .iter()
        .zip(masses)
        .fold(Vector3::zeros(), |acc, (p, &m)| acc + p.coords * m);
    let center_of_gravity = Point3::from(first_moment / total_mass);

    let mut inertia = DiagonalInertia::default();
    for (p, &m) in positions.iter().zip(masses) {
        let r = p - center_of_gravity;
        let (x2, y2, z2) = (r.x * r.x, r.y * r.y, r.z * r.z);
        inertia.ixx += m * (y2 + z2);
        inertia.iyy += m * (x2 + z2);
        inertia.izz += m * (x2 + y2);
    }

    Ok(MassProperties {
        total_mass,
        center_of_gravity,
        inertia,
    })
}
