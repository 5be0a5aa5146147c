//! Per-solve counters for the active-set solver.

/// Counters collected during a single [`ActiveSetSolver::solve`] call.
///
/// [`ActiveSetSolver::solve`]: crate::ActiveSetSolver::solve
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Active-set iterations run, counting the converging one.
    pub iterations: usize,
    /// Variables pinned to zero over the whole solve.
    pub pinned: usize,
    /// Variables still free at convergence.
    pub free: usize,
    /// Multiplier solves that fell back to least squares.
    pub least_squares_fallbacks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SolveMetrics::default();
        assert_eq!(m.iterations, 0);
        assert_eq!(m.pinned, 0);
        assert_eq!(m.free, 0);
        assert_eq!(m.least_squares_fallbacks, 0);
    }
}
