//! Constraint formulation and nonnegative solver for smog.
//!
//! Given CoG-relative lattice coordinates and the mass targets, this crate
//! builds the 7×N system `A m = b` ([`ConstraintSystem`]), rejects
//! targets that no distribution inside the box can reach
//! ([`check_feasibility`]), and finds the nonnegative mass vector closest
//! to uniform that satisfies it ([`ActiveSetSolver`]).
//!
//! The 7×7 multiplier solves go through [`robust_solve`], which takes a
//! Cholesky fast path and falls back to SVD least squares when the Gram
//! matrix is singular. The fallback is a normal code path, not an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod active_set;
pub mod constraint;
pub mod linalg;
pub mod metrics;

pub use active_set::{ActiveSetSolver, Solution, SolverConfig};
pub use constraint::{check_feasibility, ConstraintSystem, MassTargets};
pub use linalg::{robust_solve, SolvePath};
pub use metrics::SolveMetrics;
