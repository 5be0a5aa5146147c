//! Core types for smog point-mass synthesis.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by the workspace, the [`PointMassCloud`] value
//! produced by synthesis, and [`compute_mass_properties`], which recovers
//! total mass, center of gravity, and diagonal inertia from any
//! `(positions, masses)` pair.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cloud;
pub mod error;
pub mod inertia;
pub mod mass;

pub use cloud::PointMassCloud;
pub use error::{ErrorKind, SmogError};
pub use inertia::{Axis, DiagonalInertia};
pub use mass::{compute_mass_properties, MassProperties};
