//! Linear constraint system for mass, first moment, and diagonal inertia.
//!
//! Each lattice point contributes one column to a 7×N matrix `A`:
//!
//! | row | quantity | entry |
//! |-----|----------|-------|
//! | 0 | mass | `1` |
//! | 1–3 | first moments | `x`, `y`, `z` |
//! | 4 | Ixx | `y² + z²` |
//! | 5 | Iyy | `x² + z²` |
//! | 6 | Izz | `x² + y²` |
//!
//! Coordinates are relative to the requested center of gravity, so the
//! first-moment targets are zero.

use nalgebra::{DMatrix, DVector, Vector3};
use smog_core::{Axis, DiagonalInertia, SmogError};

/// Number of constraint rows.
pub const CONSTRAINT_ROWS: usize = 7;

/// Row index of the total-mass constraint.
pub const ROW_MASS: usize = 0;

/// Slack added to the inertia bound before declaring infeasibility.
pub const FEASIBILITY_EPSILON: f64 = 1e-9;

/// Row index of the first-moment constraint along `axis`.
pub fn moment_row(axis: Axis) -> usize {
    1 + axis.index()
}

/// Row index of the inertia constraint about `axis`.
pub fn inertia_row(axis: Axis) -> usize {
    4 + axis.index()
}

/// Aggregate targets the mass distribution must reproduce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassTargets {
    /// Required sum of masses.
    pub total_mass: f64,
    /// Required diagonal inertia about the center of gravity.
    pub inertia: DiagonalInertia,
}

/// The equality constraints `A m = b`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl ConstraintSystem {
    /// Assemble `A` and `b` from CoG-relative point coordinates.
    pub fn assemble(points: &[Vector3<f64>], targets: &MassTargets) -> Self {
        let a = DMatrix::from_fn(CONSTRAINT_ROWS, points.len(), |row, col| {
            let p = &points[col];
            let (x2, y2, z2) = (p.x * p.x, p.y * p.y, p.z * p.z);
            match row {
                0 => 1.0,
                1 => p.x,
                2 => p.y,
                3 => p.z,
                4 => y2 + z2,
                5 => x2 + z2,
                _ => x2 + y2,
            }
        });
        let i = targets.inertia;
        let b = DVector::from_column_slice(&[
            targets.total_mass,
            0.0,
            0.0,
            0.0,
            i.ixx,
            i.iyy,
            i.izz,
        ]);
        Self { a, b }
    }

    /// The 7×N constraint matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// The 7-element target vector.
    pub fn target(&self) -> &DVector<f64> {
        &self.b
    }

    /// Number of variables (lattice points).
    pub fn n_vars(&self) -> usize {
        self.a.ncols()
    }

    /// `A m - b`.
    pub fn residual(&self, masses: &DVector<f64>) -> DVector<f64> {
        &self.a * masses - &self.b
    }

    /// `max |A m - b|`.
    pub fn max_abs_residual(&self, masses: &DVector<f64>) -> f64 {
        self.residual(masses).amax()
    }

    /// Residual tolerance scaled by the target magnitude:
    /// `tol * max(1, max |b|)`.
    pub fn residual_limit(&self, tol: f64) -> f64 {
        tol * self.b.amax().max(1.0)
    }
}

/// Reject inertia targets no mass distribution inside the box can reach.
///
/// The largest moment about an axis comes from concentrating all mass at
/// the corners of the box, at squared distance `h_a² + h_b²` where `h_a`,
/// `h_b` are the extents from the center of gravity along the two
/// perpendicular axes. `half_extents` holds the largest absolute
/// CoG-relative coordinate along each axis.
///
/// # Errors
///
/// [`SmogError::InertiaExceedsBound`] for the first axis (x, y, z order)
/// whose target exceeds `total_mass * r²_max + FEASIBILITY_EPSILON`.
pub fn check_feasibility(
    targets: &MassTargets,
    half_extents: &Vector3<f64>,
) -> Result<(), SmogError> {
    for axis in Axis::ALL {
        let (a, b) = axis.perpendicular();
        let (ha, hb) = (half_extents[a.index()], half_extents[b.index()]);
        let bound = targets.total_mass * (ha * ha + hb * hb);
        let requested = targets.inertia.about(axis);
        if requested > bound + FEASIBILITY_EPSILON {
            return Err(SmogError::InertiaExceedsBound {
                axis,
                requested,
                bound,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use smog_lattice::{GridShape, Lattice};

    fn targets(total_mass: f64, ixx: f64, iyy: f64, izz: f64) -> MassTargets {
        MassTargets {
            total_mass,
            inertia: DiagonalInertia::new(ixx, iyy, izz),
        }
    }

    #[test]
    fn rows_match_layout() {
        let points = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.5, 0.0)];
        let sys = ConstraintSystem::assemble(&points, &targets(10.0, 1.0, 2.0, 3.0));
        let a = sys.matrix();
        assert_eq!(a.shape(), (7, 2));
        assert_eq!(a[(ROW_MASS, 0)], 1.0);
        assert_eq!(a[(moment_row(Axis::X), 0)], 1.0);
        assert_eq!(a[(moment_row(Axis::Y), 0)], 2.0);
        assert_eq!(a[(moment_row(Axis::Z), 0)], 3.0);
        assert_eq!(a[(inertia_row(Axis::X), 0)], 13.0);
        assert_eq!(a[(inertia_row(Axis::Y), 0)], 10.0);
        assert_eq!(a[(inertia_row(Axis::Z), 0)], 5.0);
        assert_eq!(a[(inertia_row(Axis::Z), 1)], 1.25);
        assert_eq!(
            sys.target().as_slice(),
            &[10.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn uniform_masses_have_zero_moment_residual() {
        let lattice = Lattice::build(GridShape::new(3, 4, 5), Vector3::new(2.0, 2.0, 2.0)).unwrap();
        let sys = ConstraintSystem::assemble(lattice.points(), &targets(6.0, 0.0, 0.0, 0.0));
        let m = DVector::from_element(lattice.len(), 0.1);
        let r = sys.residual(&m);
        assert_relative_eq!(r[ROW_MASS], 0.0, epsilon = 1e-12);
        for axis in Axis::ALL {
            assert!(r[moment_row(axis)].abs() < 1e-12);
        }
    }

    #[test]
    fn residual_limit_scales_with_targets() {
        let sys = ConstraintSystem::assemble(&[Vector3::zeros()], &targets(0.5, 0.1, 0.2, 0.3));
        assert_eq!(sys.residual_limit(1e-8), 1e-8);
        let sys = ConstraintSystem::assemble(&[Vector3::zeros()], &targets(50.0, 0.1, 0.2, 0.3));
        assert_relative_eq!(sys.residual_limit(1e-8), 5e-7, max_relative = 1e-12);
    }

    #[test]
    fn feasible_targets_pass() {
        let h = Vector3::new(1.0, 1.0, 2.0);
        assert!(check_feasibility(&targets(10.0, 9.0, 10.0, 5.0), &h).is_ok());
    }

    #[test]
    fn bound_is_inclusive() {
        // r²_max about x = 1² + 1² = 2, so Ixx = 20 sits exactly on the bound.
        let h = Vector3::new(1.0, 1.0, 1.0);
        assert!(check_feasibility(&targets(10.0, 20.0, 0.0, 0.0), &h).is_ok());
    }

    #[test]
    fn excessive_inertia_names_axis() {
        let h = Vector3::new(1.0, 1.0, 1.0);
        match check_feasibility(&targets(10.0, 1.0, 1.0, 100.0), &h) {
            Err(SmogError::InertiaExceedsBound {
                axis,
                requested,
                bound,
            }) => {
                assert_eq!(axis, Axis::Z);
                assert_eq!(requested, 100.0);
                assert_relative_eq!(bound, 20.0);
            }
            other => panic!("expected InertiaExceedsBound, got {other:?}"),
        }
    }
}
