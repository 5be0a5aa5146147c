//! Diagnostics returned alongside a synthesized cloud.

use smog_core::{MassProperties, PointMassCloud};
use smog_lattice::GridShape;
use smog_solver::SolveMetrics;

/// What happened during one [`synthesize`](crate::synthesize) call.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisReport {
    /// Lattice dimensions chosen for the requested point count.
    pub grid_shape: GridShape,
    /// Lattice points the solver worked with.
    pub lattice_points: usize,
    /// Points kept after dropping masses at or below the tolerance.
    pub retained_points: usize,
    /// Active-set solver counters.
    pub solver: SolveMetrics,
    /// `max |A m - b|` of the solved (unfiltered) mass vector.
    pub max_residual: f64,
    /// Mass properties recomputed from the returned cloud.
    pub achieved: MassProperties,
}

impl SynthesisReport {
    /// Lattice points dropped as insignificant.
    pub fn dropped_points(&self) -> usize {
        self.lattice_points - self.retained_points
    }
}

/// A synthesized cloud together with its report.
#[derive(Clone, Debug, PartialEq)]
pub struct Synthesis {
    /// The point masses, in output coordinates.
    pub cloud: PointMassCloud,
    /// Diagnostics for the run.
    pub report: SynthesisReport,
}
