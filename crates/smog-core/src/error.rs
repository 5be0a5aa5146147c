//! Error types for point-mass synthesis.
//!
//! Every failure maps to one of four kinds (see [`ErrorKind`]): bad input,
//! impossible lattice dimensions, an infeasible constraint set, or a
//! numerically unsound solution. All errors are fail-fast; no partial
//! cloud is ever returned alongside one.

use std::error::Error;
use std::fmt;

use crate::inertia::Axis;

/// Coarse classification of a [`SmogError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied values violate a precondition.
    InputValidation,
    /// The requested point count cannot be laid out as a 3D lattice.
    Dimension,
    /// The mass targets cannot be met on the requested lattice.
    InfeasibleConstraint,
    /// The solver produced a result that fails post-solve verification.
    NumericalSanity,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputValidation => write!(f, "input validation"),
            Self::Dimension => write!(f, "dimension"),
            Self::InfeasibleConstraint => write!(f, "infeasible constraint"),
            Self::NumericalSanity => write!(f, "numerical sanity"),
        }
    }
}

/// Errors arising from cloud synthesis or mass-property computation.
#[derive(Clone, Debug, PartialEq)]
pub enum SmogError {
    /// A scalar input is out of range (non-positive mass, span, etc.).
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
    /// Positions and masses have different lengths.
    ShapeMismatch {
        /// Number of positions supplied.
        positions: usize,
        /// Number of masses supplied.
        masses: usize,
    },
    /// No `nx * ny * nz` factorization exists for the point count.
    NoGridFactorization {
        /// The requested point count.
        n_points: usize,
    },
    /// The built lattice does not have the expected number of points.
    LatticeSizeMismatch {
        /// Point count implied by the grid shape.
        expected: usize,
        /// Point count actually produced.
        actual: usize,
    },
    /// A requested moment of inertia exceeds what the span can hold.
    InertiaExceedsBound {
        /// Axis the inertia is taken about.
        axis: Axis,
        /// The requested inertia.
        requested: f64,
        /// Largest inertia achievable for the mass and span.
        bound: f64,
    },
    /// Every variable was pinned to zero before the constraints were met.
    AllVariablesPinned {
        /// Active-set iteration at which the free set emptied.
        iteration: usize,
    },
    /// The active-set loop hit its iteration cap.
    SolverExhausted {
        /// The iteration cap that was reached.
        iterations: usize,
    },
    /// `max |A m - b|` is above the accepted tolerance.
    ResidualTooLarge {
        /// Largest absolute constraint residual.
        max_residual: f64,
        /// The tolerance it was compared against.
        limit: f64,
    },
    /// A mass is negative beyond clamping noise.
    NegativeMass {
        /// Index of the offending mass.
        index: usize,
        /// Its value.
        mass: f64,
    },
    /// The Lagrange multiplier solve produced NaN or infinity.
    NonFiniteMultipliers,
}

impl SmogError {
    /// Shorthand for [`SmogError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// The taxonomy kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } | Self::ShapeMismatch { .. } => ErrorKind::InputValidation,
            Self::NoGridFactorization { .. } | Self::LatticeSizeMismatch { .. } => {
                ErrorKind::Dimension
            }
            Self::InertiaExceedsBound { .. }
            | Self::AllVariablesPinned { .. }
            | Self::SolverExhausted { .. } => ErrorKind::InfeasibleConstraint,
            Self::ResidualTooLarge { .. } | Self::NegativeMass { .. } | Self::NonFiniteMultipliers => {
                ErrorKind::NumericalSanity
            }
        }
    }
}

impl fmt::Display for SmogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::ShapeMismatch { positions, masses } => {
                write!(
                    f,
                    "shape mismatch: {positions} positions but {masses} masses"
                )
            }
            Self::NoGridFactorization { n_points } => {
                write!(f, "could not factor {n_points} points into a 3D grid")
            }
            Self::LatticeSizeMismatch { expected, actual } => {
                write!(f, "lattice has {actual} points, expected {expected}")
            }
            Self::InertiaExceedsBound {
                axis,
                requested,
                bound,
            } => {
                write!(
                    f,
                    "requested I{axis}{axis} = {requested} exceeds achievable bound {bound}; \
                     increase the span or reduce the inertia"
                )
            }
            Self::AllVariablesPinned { iteration } => {
                write!(
                    f,
                    "infeasible: all variables fixed at 0 at iteration {iteration} \
                     but constraints remain"
                )
            }
            Self::SolverExhausted { iterations } => {
                write!(
                    f,
                    "active-set solver did not converge in {iterations} iterations; \
                     constraints may be infeasible"
                )
            }
            Self::ResidualTooLarge {
                max_residual,
                limit,
            } => {
                write!(
                    f,
                    "solution residual too large: max|A m - b| = {max_residual:e} (limit {limit:e})"
                )
            }
            Self::NegativeMass { index, mass } => {
                write!(f, "negative mass {mass:e} at point {index}")
            }
            Self::NonFiniteMultipliers => write!(f, "Lagrange multipliers are not finite"),
        }
    }
}

impl Error for SmogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        assert_eq!(
            SmogError::invalid_input("x").kind(),
            ErrorKind::InputValidation
        );
        assert_eq!(
            SmogError::ShapeMismatch {
                positions: 2,
                masses: 3
            }
            .kind(),
            ErrorKind::InputValidation
        );
        assert_eq!(
            SmogError::NoGridFactorization { n_points: 0 }.kind(),
            ErrorKind::Dimension
        );
        assert_eq!(
            SmogError::InertiaExceedsBound {
                axis: Axis::X,
                requested: 5.0,
                bound: 1.0
            }
            .kind(),
            ErrorKind::InfeasibleConstraint
        );
        assert_eq!(
            SmogError::SolverExhausted { iterations: 200 }.kind(),
            ErrorKind::InfeasibleConstraint
        );
        assert_eq!(
            SmogError::NegativeMass {
                index: 3,
                mass: -1.0
            }
            .kind(),
            ErrorKind::NumericalSanity
        );
    }

    #[test]
    fn display_names_the_axis() {
        let err = SmogError::InertiaExceedsBound {
            axis: Axis::Y,
            requested: 50.0,
            bound: 20.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Iyy"), "{msg}");
        assert!(msg.contains("increase the span"));
    }

    #[test]
    fn display_shape_mismatch() {
        let msg = format!(
            "{}",
            SmogError::ShapeMismatch {
                positions: 4,
                masses: 5
            }
        );
        assert!(msg.contains("4 positions"));
        assert!(msg.contains("5 masses"));
    }
}
