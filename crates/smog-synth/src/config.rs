//! Synthesis configuration and validation.
//!
//! [`SynthesisConfig`] is the input to [`synthesize`](crate::synthesize).
//! [`validate()`](SynthesisConfig::validate) checks every precondition up
//! front so the pipeline never starts on bad input.

use nalgebra::{Point3, Vector3};
use smog_core::{DiagonalInertia, SmogError};
use smog_solver::{MassTargets, SolverConfig};

/// Fewest points that give the seven constraints enough freedom.
pub const MIN_POINTS: usize = 7;

/// Default residual and significance tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Everything needed to synthesize one point-mass cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisConfig {
    /// Required total mass. Must be positive.
    pub total_mass: f64,
    /// Required center of gravity, in output coordinates.
    pub center_of_gravity: Point3<f64>,
    /// Required diagonal inertia about the center of gravity.
    pub inertia: DiagonalInertia,
    /// Lattice size before near-zero masses are dropped. At least [`MIN_POINTS`].
    pub n_points: usize,
    /// Full extent of the lattice along x, y, z. Every component must be positive.
    pub span: Vector3<f64>,
    /// Shift of the lattice center away from the center of gravity. Default: zero.
    pub grid_offset: Vector3<f64>,
    /// Residual tolerance (relative to `max(1, max |b|)`) and the mass
    /// at or below which a point is dropped. Default: [`DEFAULT_TOLERANCE`].
    pub tol: f64,
    /// Active-set solver settings.
    pub solver: SolverConfig,
}

impl SynthesisConfig {
    /// Create a config with no grid offset and default tolerances.
    pub fn new(
        total_mass: f64,
        center_of_gravity: Point3<f64>,
        inertia: DiagonalInertia,
        n_points: usize,
        span: Vector3<f64>,
    ) -> Self {
        Self {
            total_mass,
            center_of_gravity,
            inertia,
            n_points,
            span,
            grid_offset: Vector3::zeros(),
            tol: DEFAULT_TOLERANCE,
            solver: SolverConfig::default(),
        }
    }

    /// Shift the lattice center by `offset` relative to the center of gravity.
    pub fn with_grid_offset(mut self, offset: Vector3<f64>) -> Self {
        self.grid_offset = offset;
        self
    }

    /// Set the residual and significance tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Replace the solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Validate all preconditions.
    pub fn validate(&self) -> Result<(), SmogError> {
        // 1. Mass must be finite and positive.
        if !self.total_mass.is_finite() || self.total_mass <= 0.0 {
            return Err(SmogError::invalid_input(format!(
                "total_mass must be > 0, got {}",
                self.total_mass
            )));
        }
        // 2. Every span component must be finite and positive.
        if self.span.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(SmogError::invalid_input(format!(
                "span components must be > 0, got ({}, {}, {})",
                self.span.x, self.span.y, self.span.z
            )));
        }
        // 3. Seven constraints need at least seven degrees of freedom.
        if self.n_points < MIN_POINTS {
            return Err(SmogError::invalid_input(format!(
                "n_points must be >= {MIN_POINTS} (need at least {MIN_POINTS} DoF for constraints), got {}",
                self.n_points
            )));
        }
        // 4. Coordinates must be finite.
        if self.center_of_gravity.iter().any(|c| !c.is_finite()) {
            return Err(SmogError::invalid_input(
                "center_of_gravity components must be finite",
            ));
        }
        if self.grid_offset.iter().any(|c| !c.is_finite()) {
            return Err(SmogError::invalid_input(
                "grid_offset components must be finite",
            ));
        }
        // 5. Moments of inertia are sums of m r², so finite and nonnegative.
        if self
            .inertia
            .to_array()
            .iter()
            .any(|i| !i.is_finite() || *i < 0.0)
        {
            return Err(SmogError::invalid_input(format!(
                "inertia components must be finite and >= 0, got {:?}",
                self.inertia.to_array()
            )));
        }
        // 6. Tolerance must be finite and positive.
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(SmogError::invalid_input(format!(
                "tol must be finite and > 0, got {}",
                self.tol
            )));
        }
        // 7. Constraint entries and their Gram products must stay finite.
        let r2 = self.half_extents().norm_squared();
        if !(self.total_mass * r2).is_finite() || !(r2 * r2 * self.n_points as f64).is_finite() {
            return Err(SmogError::invalid_input(format!(
                "lattice extents too large for finite arithmetic: span ({}, {}, {}), offset ({}, {}, {})",
                self.span.x,
                self.span.y,
                self.span.z,
                self.grid_offset.x,
                self.grid_offset.y,
                self.grid_offset.z
            )));
        }
        self.solver.validate()
    }

    /// Largest absolute CoG-relative coordinate along each axis:
    /// `|grid_offset| + span / 2`.
    pub fn half_extents(&self) -> Vector3<f64> {
        self.grid_offset.abs() + self.span / 2.0
    }

    /// Constraint targets for the solver.
    pub fn targets(&self) -> MassTargets {
        MassTargets {
            total_mass: self.total_mass,
            inertia: self.inertia,
        }
    }
}
