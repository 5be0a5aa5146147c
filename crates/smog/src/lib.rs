//! Smog: point-mass clouds from mass properties.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all smog sub-crates. For most users, adding `smog` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use smog::prelude::*;
//!
//! let config = SynthesisConfig::new(
//!     5.0,
//!     Point3::new(1.0, 2.0, 3.0),
//!     DiagonalInertia::new(2.0, 3.0, 4.0),
//!     100,
//!     Vector3::new(3.0, 2.0, 1.0),
//! );
//! let out = synthesize(&config).unwrap();
//! let props = compute_mass_properties(out.cloud.positions(), out.cloud.masses()).unwrap();
//! assert!((props.total_mass - 5.0).abs() < 1e-6);
//! assert!((props.inertia.izz - 4.0).abs() < 1e-6);
//!
//! let mut ply = Vec::new();
//! write_ply(&mut ply, out.cloud.positions(), Some(out.cloud.masses())).unwrap();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `smog-core` | errors, `PointMassCloud`, mass-property computation |
//! | [`lattice`] | `smog-lattice` | grid shape selection and lattice layout |
//! | [`solver`] | `smog-solver` | constraint system, feasibility, active-set solver |
//! | [`synth`] | `smog-synth` | `SynthesisConfig` and the synthesis pipeline |
//! | [`io`] | `smog-io` | CSV, PLY and rigid-body exporters, sectional tables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and mass-property computation (`smog-core`).
pub use smog_core as types;

/// Grid shape selection and lattice layout (`smog-lattice`).
pub use smog_lattice as lattice;

/// Constraint assembly and the nonnegative solver (`smog-solver`).
///
/// Most users go through [`synth::synthesize`] instead; this module is for
/// callers who want to drive [`solver::ActiveSetSolver`] on their own
/// lattice.
pub use smog_solver as solver;

/// The synthesis pipeline (`smog-synth`).
pub use smog_synth as synth;

/// Import and export adapters (`smog-io`).
pub use smog_io as io;

/// Common imports for typical smog usage.
///
/// ```rust
/// use smog::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use nalgebra::{Point3, Vector3};

    // Core types
    pub use smog_core::{
        compute_mass_properties, Axis, DiagonalInertia, MassProperties, PointMassCloud,
    };

    // Errors
    pub use smog_core::{ErrorKind, SmogError};
    pub use smog_io::ExportError;

    // Synthesis
    pub use smog_synth::{
        synthesize, synthesize_point_mass_cloud, Synthesis, SynthesisConfig, SynthesisReport,
    };

    // Export
    pub use smog_io::{
        mass_rows, read_sections, write_mass_table_csv, write_ply, write_rbd_point_masses,
        MassRow, SectionRecord,
    };
}
