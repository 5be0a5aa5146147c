//! The synthesis pipeline.
//!
//! ```text
//! validate → grid shape → lattice → feasibility → assemble A m = b
//!          → active-set solve → residual / sign checks → filter → cloud
//! ```
//!
//! Every stage either succeeds or returns a [`SmogError`]; no partial
//! cloud is ever returned.

use nalgebra::{DVector, Point3, Vector3};
use smog_core::{DiagonalInertia, PointMassCloud, SmogError};
use smog_lattice::{choose_grid_shape, Lattice};
use smog_solver::{check_feasibility, ActiveSetSolver, ConstraintSystem};
use tracing::{debug, info};

use crate::config::SynthesisConfig;
use crate::report::{Synthesis, SynthesisReport};

/// Masses below this after solving are reported as a failure rather
/// than silently clamped.
pub const NEGATIVE_MASS_LIMIT: f64 = -1e-12;

/// Synthesize a point-mass cloud matching the configured mass, center of
/// gravity, and diagonal inertia.
///
/// # Errors
///
/// - [`SmogError::InvalidInput`] if the config fails validation.
/// - [`SmogError::InertiaExceedsBound`] if an inertia target cannot be
///   reached by any distribution inside the lattice box.
/// - Any solver error from [`ActiveSetSolver::solve`].
/// - [`SmogError::ResidualTooLarge`] if the solved masses miss the
///   targets by more than `tol * max(1, max |b|)`.
/// - [`SmogError::NegativeMass`] if a solved mass is below
///   [`NEGATIVE_MASS_LIMIT`].
pub fn synthesize(config: &SynthesisConfig) -> Result<Synthesis, SmogError> {
    config.validate()?;
    info!(
        total_mass = config.total_mass,
        n_points = config.n_points,
        ixx = config.inertia.ixx,
        iyy = config.inertia.iyy,
        izz = config.inertia.izz,
        "synthesizing point-mass cloud"
    );

    let shape = choose_grid_shape(config.n_points)?;
    let lattice = Lattice::build_offset(shape, config.span, config.grid_offset)?;
    debug!(nx = shape.nx, ny = shape.ny, nz = shape.nz, "grid shape chosen");

    let targets = config.targets();
    check_feasibility(&targets, &config.half_extents())?;
    let system = ConstraintSystem::assemble(lattice.points(), &targets);

    let m0 = DVector::from_element(lattice.len(), config.total_mass / lattice.len() as f64);
    let solution = ActiveSetSolver::new(config.solver.clone()).solve(&system, &m0)?;
    let masses = solution.masses;

    let max_residual = system.max_abs_residual(&masses);
    let limit = system.residual_limit(config.tol);
    if max_residual.is_nan() || max_residual > limit {
        return Err(SmogError::ResidualTooLarge {
            max_residual,
            limit,
        });
    }
    check_nonnegative(&masses)?;

    let mut positions = Vec::with_capacity(lattice.len());
    let mut kept = Vec::with_capacity(lattice.len());
    for (rel, &m) in lattice.points().iter().zip(masses.iter()) {
        let m = m.max(0.0);
        if m > config.tol {
            positions.push(config.center_of_gravity + *rel);
            kept.push(m);
        }
    }

    let cloud = PointMassCloud::new(positions, kept)?;
    let achieved = cloud.mass_properties()?;
    let report = SynthesisReport {
        grid_shape: shape,
        lattice_points: lattice.len(),
        retained_points: cloud.len(),
        solver: solution.metrics,
        max_residual,
        achieved,
    };
    info!(
        retained = report.retained_points,
        dropped = report.dropped_points(),
        iterations = report.solver.iterations,
        max_residual,
        "synthesis complete"
    );
    Ok(Synthesis { cloud, report })
}

/// Reject the first mass below [`NEGATIVE_MASS_LIMIT`].
fn check_nonnegative(masses: &DVector<f64>) -> Result<(), SmogError> {
    match masses
        .iter()
        .enumerate()
        .find(|&(_, &m)| m < NEGATIVE_MASS_LIMIT)
    {
        Some((index, &mass)) => Err(SmogError::NegativeMass { index, mass }),
        None => Ok(()),
    }
}

/// Convenience wrapper over [`synthesize`] taking plain arrays.
///
/// Uses no grid offset and the default solver settings. Pass
/// [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE) for `tol` unless you need something else.
#[allow(clippy::too_many_arguments)]
pub fn synthesize_point_mass_cloud(
    total_mass: f64,
    cog: [f64; 3],
    ixx: f64,
    iyy: f64,
    izz: f64,
    n_points: usize,
    span: [f64; 3],
    tol: f64,
) -> Result<PointMassCloud, SmogError> {
    let config = SynthesisConfig::new(
        total_mass,
        Point3::from(cog),
        DiagonalInertia::new(ixx, iyy, izz),
        n_points,
        Vector3::from(span),
    )
    .with_tolerance(tol);
    synthesize(&config).map(|s| s.cloud)
}
