//! Lattice construction for smog point-mass synthesis.
//!
//! - [`choose_grid_shape`] factors a point count into a near-cubic
//!   [`GridShape`].
//! - [`Lattice`] lays that shape out as evenly spaced coordinates centered
//!   on a reference point, x slowest and z fastest.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lattice;
pub mod shape;

pub use lattice::{axis_coordinates, Lattice};
pub use shape::{choose_grid_shape, GridShape};
