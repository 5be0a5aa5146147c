//! Two-path solve for the reduced Gram system.
//!
//! The multiplier system `(A_free A_freeᵀ) λ = r` is symmetric positive
//! semi-definite. When `A_free` has full row rank a Cholesky solve is
//! exact and cheap. Lattices with a single-point axis (or a free set that
//! has shrunk) make rows of `A_free` linearly dependent; the Gram matrix
//! is then singular and the minimum-norm least-squares solution is used
//! instead.

use nalgebra::{DMatrix, DVector};

/// Ratio of smallest to largest Cholesky pivot below which the direct
/// solve is treated as ill-conditioned (condition number above ~1e16).
pub const PIVOT_RATIO_LIMIT: f64 = 1e-8;

/// Sweep cap for the SVD fallback. Finite input converges in far fewer.
pub const MAX_SVD_ITERATIONS: usize = 1000;

/// Which branch of [`robust_solve`] produced the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolvePath {
    /// Cholesky factorization succeeded and was well conditioned.
    Direct,
    /// SVD minimum-norm least squares.
    LeastSquares,
}

/// Solve `gram * x = rhs`, falling back to least squares when `gram` is
/// singular or ill-conditioned.
///
/// Returns `None` if `gram` or `rhs` holds a NaN or infinity, or if the
/// SVD fallback fails to converge.
pub fn robust_solve(gram: &DMatrix<f64>, rhs: &DVector<f64>) -> Option<(DVector<f64>, SolvePath)> {
    if gram.iter().chain(rhs.iter()).any(|v| !v.is_finite()) {
        return None;
    }
    if let Some(chol) = gram.clone().cholesky() {
        let diag = chol.l_dirty().diagonal();
        let max = diag.amax();
        let min = diag.iter().fold(f64::INFINITY, |acc, d| acc.min(d.abs()));
        if max > 0.0 && min / max > PIVOT_RATIO_LIMIT {
            return Some((chol.solve(rhs), SolvePath::Direct));
        }
    }
    least_squares(gram, rhs).map(|x| (x, SolvePath::LeastSquares))
}

/// Minimum-norm least-squares solution via SVD.
///
/// Singular values below `max_sv * n * EPSILON` are treated as zero,
/// matching the conventional `rcond` default. Returns `None` if the
/// decomposition does not converge within [`MAX_SVD_ITERATIONS`].
pub fn least_squares(matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Option<DVector<f64>> {
    let n = matrix.nrows().max(matrix.ncols());
    let svd = matrix
        .clone()
        .try_svd(true, true, f64::EPSILON, MAX_SVD_ITERATIONS)?;
    let max_sv = svd.singular_values.amax();
    let eps = max_sv * n as f64 * f64::EPSILON;
    svd.solve(rhs, eps).ok()
}
