//! Nonnegative least-perturbation solver.
//!
//! Solves
//!
//! ```text
//! minimize   ‖m − m0‖²
//! subject to A m = b,  m ≥ 0
//! ```
//!
//! by Lagrangian projection over a shrinking free set. Each iteration
//! projects `m0` onto the affine subspace `A m = b` using only the free
//! variables; any free variable that lands below `-tol` is pinned to zero
//! for the rest of the solve. Once no violations remain, a finishing pass
//! re-projects from the clamped vector itself rather than from `m0`, then
//! clamps any residual negative noise.

use nalgebra::DVector;
use smog_core::SmogError;
use tracing::debug;

use crate::constraint::ConstraintSystem;
use crate::linalg::{robust_solve, SolvePath};
use crate::metrics::SolveMetrics;

/// Tuning knobs for [`ActiveSetSolver`].
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Free variables below `-tol` are pinned to zero. Default: 1e-10.
    pub tol: f64,
    /// Iteration cap before giving up. Default: 200.
    pub max_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 200,
        }
    }
}

impl SolverConfig {
    /// Check that the tolerance is finite and nonnegative and that at
    /// least one iteration is allowed.
    pub fn validate(&self) -> Result<(), SmogError> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(SmogError::invalid_input(format!(
                "solver tol must be finite and >= 0, got {}",
                self.tol
            )));
        }
        if self.max_iter == 0 {
            return Err(SmogError::invalid_input("solver max_iter must be at least 1"));
        }
        Ok(())
    }
}

/// Output of a successful solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// One nonnegative mass per variable.
    pub masses: DVector<f64>,
    /// Counters describing how the solve went.
    pub metrics: SolveMetrics,
}

/// Active-set solver for the equality- and bound-constrained problem.
///
/// Stateless apart from its configuration; one instance can serve any
/// number of independent solves.
#[derive(Clone, Debug, Default)]
pub struct ActiveSetSolver {
    config: SolverConfig,
}

impl ActiveSetSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the nonnegative `m` closest to `m0` with `A m = b`.
    ///
    /// The returned masses are clamped to be `>= 0` but are not checked
    /// against `b`; callers verify the residual themselves.
    ///
    /// # Errors
    ///
    /// - [`SmogError::InvalidInput`] if `m0` does not have one entry per
    ///   column of `A`.
    /// - [`SmogError::AllVariablesPinned`] if every variable gets pinned.
    /// - [`SmogError::SolverExhausted`] after `max_iter` iterations.
    /// - [`SmogError::NonFiniteMultipliers`] if a multiplier solve
    ///   produces NaN or infinity.
    pub fn solve(
        &self,
        system: &ConstraintSystem,
        m0: &DVector<f64>,
    ) -> Result<Solution, SmogError> {
        let n = system.n_vars();
        if m0.len() != n {
            return Err(SmogError::invalid_input(format!(
                "initial guess has {} entries but the system has {n} variables",
                m0.len()
            )));
        }

        let tol = self.config.tol;
        let mut free = vec![true; n];
        let mut m = m0.clone();
        let mut metrics = SolveMetrics::default();

        for iteration in 0..self.config.max_iter {
            metrics.iterations = iteration + 1;
            for (i, &is_free) in free.iter().enumerate() {
                if !is_free {
                    m[i] = 0.0;
                }
            }

            let free_idx: Vec<usize> = (0..n).filter(|&i| free[i]).collect();
            if free_idx.is_empty() {
                return Err(SmogError::AllVariablesPinned { iteration });
            }
            let fixed_idx: Vec<usize> = (0..n).filter(|&i| !free[i]).collect();

            project(system, &free_idx, &fixed_idx, &mut m, m0, &mut metrics)?;

            let violators: Vec<usize> = free_idx
                .iter()
                .copied()
                .filter(|&i| m[i] < -tol)
                .collect();

            if violators.is_empty() {
                clamp_negative(&mut m);
                let baseline = m.clone();
                project(system, &free_idx, &fixed_idx, &mut m, &baseline, &mut metrics)?;
                clamp_negative(&mut m);
                metrics.free = free_idx.len();
                debug!(
                    iterations = metrics.iterations,
                    pinned = metrics.pinned,
                    free = metrics.free,
                    fallbacks = metrics.least_squares_fallbacks,
                    "active-set solve converged"
                );
                return Ok(Solution { masses: m, metrics });
            }

            debug!(
                iteration,
                newly_pinned = violators.len(),
                still_free = free_idx.len() - violators.len(),
                "pinning negative masses"
            );
            metrics.pinned += violators.len();
            for i in violators {
                free[i] = false;
            }
        }

        Err(SmogError::SolverExhausted {
            iterations: self.config.max_iter,
        })
    }
}

/// Project `baseline` onto `A m = b` over the free variables, writing the
/// result into the free entries of `m`. Fixed entries of `m` are read as-is.
fn project(
    system: &ConstraintSystem,
    free_idx: &[usize],
    fixed_idx: &[usize],
    m: &mut DVector<f64>,
    baseline: &DVector<f64>,
    metrics: &mut SolveMetrics,
) -> Result<(), SmogError> {
    let a = system.matrix();
    let a_free = a.select_columns(free_idx.iter());
    let base_free = DVector::from_iterator(free_idx.len(), free_idx.iter().map(|&i| baseline[i]));

    let mut rhs = system.target() - &a_free * &base_free;
    for &j in fixed_idx {
        rhs -= a.column(j) * m[j];
    }

    let gram = &a_free * a_free.transpose();
    let (lambda, path) = robust_solve(&gram, &rhs).ok_or(SmogError::NonFiniteMultipliers)?;
    if path == SolvePath::LeastSquares {
        metrics.least_squares_fallbacks += 1;
        debug!(free = free_idx.len(), "multiplier solve fell back to least squares");
    }
    if lambda.iter().any(|v| !v.is_finite()) {
        return Err(SmogError::NonFiniteMultipliers);
    }

    let update = a_free.transpose() * lambda;
    for (k, &i) in free_idx.iter().enumerate() {
        m[i] = base_free[k] + update[k];
    }
    Ok(())
}

fn clamp_negative(m: &mut DVector<f64>) {
    for v in m.iter_mut() {
        if *v < 0.0 {
            *v = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::MassTargets;
    use nalgebra::{Point3, Vector3};
    use proptest::prelude::*;
    use smog_core::{compute_mass_properties, DiagonalInertia, ErrorKind};
    use smog_lattice::{choose_grid_shape, Lattice};

    fn system(
        n_points: usize,
        span: [f64; 3],
        total_mass: f64,
        inertia: [f64; 3],
    ) -> ConstraintSystem {
        let shape = choose_grid_shape(n_points).unwrap();
        let lattice = Lattice::build(shape, Vector3::from(span)).unwrap();
        ConstraintSystem::assemble(
            lattice.points(),
            &MassTargets {
                total_mass,
                inertia: DiagonalInertia::new(inertia[0], inertia[1], inertia[2]),
            },
        )
    }

    fn uniform(n: usize, total_mass: f64) -> DVector<f64> {
        DVector::from_element(n, total_mass / n as f64)
    }

    #[test]
    fn uniform_target_returns_initial_guess() {
        // 3x3x3 over [-1, 1]: each axis has mean square 2/3, so uniform
        // unit masses give I = 27 * 4/3 = 36 about every axis.
        let sys = system(27, [2.0, 2.0, 2.0], 27.0, [36.0, 36.0, 36.0]);
        let sol = ActiveSetSolver::default().solve(&sys, &uniform(27, 27.0)).unwrap();
        assert_eq!(sol.metrics.iterations, 1);
        assert_eq!(sol.metrics.pinned, 0);
        assert_eq!(sol.metrics.free, 27);
        for &v in sol.masses.iter() {
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn concentrating_mass_pins_outer_points() {
        let sys = system(125, [2.0, 2.0, 2.0], 10.0, [1.0, 1.0, 1.0]);
        let sol = ActiveSetSolver::default().solve(&sys, &uniform(125, 10.0)).unwrap();
        assert!(sol.metrics.pinned > 0);
        assert!(sol.metrics.iterations > 1);
        assert!(sol.masses.iter().all(|&v| v >= 0.0));
        assert!(sys.max_abs_residual(&sol.masses) < 1e-9);
        let nonzero = sol.masses.iter().filter(|&&v| v > 1e-8).count();
        assert!(nonzero < 125);
    }

    #[test]
    fn single_point_axes_use_least_squares() {
        // 7 is prime: the lattice is a 1x1x7 line along z, so the x and y
        // moment rows vanish and the Gram matrix is singular.
        let sys = system(7, [1.0, 1.0, 2.0], 1.0, [0.5, 0.5, 0.0]);
        let sol = ActiveSetSolver::default().solve(&sys, &uniform(7, 1.0)).unwrap();
        assert!(sol.metrics.least_squares_fallbacks >= 1);
        assert!(sys.max_abs_residual(&sol.masses) < 1e-12);
        assert!(sol.masses.iter().all(|&v| v > 0.0));
    }

    #[test]
    fn negative_target_mass_pins_everything() {
        let points = [Vector3::zeros(), Vector3::zeros()];
        let sys = ConstraintSystem::assemble(
            &points,
            &MassTargets {
                total_mass: -1.0,
                inertia: DiagonalInertia::default(),
            },
        );
        let err = ActiveSetSolver::default()
            .solve(&sys, &uniform(2, 1.0))
            .unwrap_err();
        assert_eq!(err, SmogError::AllVariablesPinned { iteration: 1 });
    }

    #[test]
    fn iteration_cap_is_enforced() {
        let sys = system(125, [2.0, 2.0, 2.0], 10.0, [1.0, 1.0, 1.0]);
        let solver = ActiveSetSolver::new(SolverConfig {
            max_iter: 1,
            ..SolverConfig::default()
        });
        let err = solver.solve(&sys, &uniform(125, 10.0)).unwrap_err();
        assert_eq!(err, SmogError::SolverExhausted { iterations: 1 });
    }

    #[test]
    fn initial_guess_length_checked() {
        let sys = system(27, [2.0, 2.0, 2.0], 27.0, [36.0, 36.0, 36.0]);
        assert!(matches!(
            ActiveSetSolver::default().solve(&sys, &uniform(26, 27.0)),
            Err(SmogError::InvalidInput { .. })
        ));
    }

    #[test]
    fn overflowing_gram_matrix_is_numerical_failure() {
        // Inertia entries near 1e200 square to infinity in A Aᵀ.
        let points = [
            Vector3::new(1e100, 0.0, 0.0),
            Vector3::new(-1e100, 0.0, 0.0),
            Vector3::new(0.0, 1e100, 0.0),
        ];
        let sys = ConstraintSystem::assemble(
            &points,
            &MassTargets {
                total_mass: 1.0,
                inertia: DiagonalInertia::new(1.0, 1.0, 1.0),
            },
        );
        let err = ActiveSetSolver::default()
            .solve(&sys, &uniform(3, 1.0))
            .unwrap_err();
        assert_eq!(err, SmogError::NonFiniteMultipliers);
        assert_eq!(err.kind(), ErrorKind::NumericalSanity);
    }

    #[test]
    fn config_validation() {
        assert!(SolverConfig::default().validate().is_ok());
        let bad_iter = SolverConfig {
            max_iter: 0,
            ..SolverConfig::default()
        };
        assert!(bad_iter.validate().is_err());
        let bad_tol = SolverConfig {
            tol: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(bad_tol.validate().is_err());
    }

    const POINT_COUNTS: [usize; 5] = [27, 36, 64, 100, 125];

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // The weights themselves satisfy the constraints once the lattice
        // is expressed relative to their own center of gravity.
        #[test]
        fn weighted_lattice_is_solved_nonnegative(
            n_points in prop::sample::select(POINT_COUNTS.to_vec()),
            span in prop::array::uniform3(0.5f64..5.0),
            total_mass in 0.5f64..100.0,
            weights in prop::collection::vec(0.05f64..1.0, 125),
        ) {
            let shape = choose_grid_shape(n_points).unwrap();
            let lattice = Lattice::build(shape, Vector3::from(span)).unwrap();
            let positions: Vec<Point3<f64>> =
                lattice.points().iter().map(|v| Point3::from(*v)).collect();
            let weight_sum: f64 = weights[..n_points].iter().sum();
            let masses: Vec<f64> = weights[..n_points]
                .iter()
                .map(|w| total_mass * w / weight_sum)
                .collect();
            let props = compute_mass_properties(&positions, &masses).unwrap();

            let relative: Vec<Vector3<f64>> = positions
                .iter()
                .map(|p| p - props.center_of_gravity)
                .collect();
            let sys = ConstraintSystem::assemble(
                &relative,
                &MassTargets {
                    total_mass: props.total_mass,
                    inertia: props.inertia,
                },
            );
            let sol = ActiveSetSolver::default()
                .solve(&sys, &uniform(n_points, props.total_mass))
                .unwrap();

            prop_assert!(sol.masses.iter().all(|&v| v >= 0.0));
            prop_assert!(sys.max_abs_residual(&sol.masses) <= sys.residual_limit(1e-8));
        }
    }
}
