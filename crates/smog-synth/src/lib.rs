//! Point-mass cloud synthesis.
//!
//! [`synthesize`] turns a target total mass, center of gravity, and
//! diagonal inertia into a set of nonnegative point masses on a regular
//! lattice whose aggregate properties match the targets:
//!
//! 1. factor `n_points` into a near-cubic [`GridShape`](smog_lattice::GridShape);
//! 2. lay out the lattice over `span`, optionally shifted by `grid_offset`;
//! 3. reject inertia targets the box cannot reach;
//! 4. solve for the masses closest to uniform with an active-set method;
//! 5. verify the residual, drop negligible masses, and recompute the
//!    achieved properties for the [`SynthesisReport`].
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use smog_core::DiagonalInertia;
//! use smog_synth::{synthesize, SynthesisConfig};
//!
//! let config = SynthesisConfig::new(
//!     10.0,
//!     Point3::new(0.0, 0.0, 1.0),
//!     DiagonalInertia::new(9.0, 10.0, 5.0),
//!     64,
//!     Vector3::new(2.0, 2.0, 4.0),
//! );
//! let out = synthesize(&config).unwrap();
//! assert!((out.report.achieved.total_mass - 10.0).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod synth;

pub use config::{SynthesisConfig, DEFAULT_TOLERANCE, MIN_POINTS};
pub use report::{Synthesis, SynthesisReport};
pub use synth::{synthesize, synthesize_point_mass_cloud, NEGATIVE_MASS_LIMIT};
