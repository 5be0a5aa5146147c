//! Import and export adapters for smog point-mass clouds.
//!
//! All writers are generic over [`std::io::Write`] so tests can target a
//! `Vec<u8>` and callers can pass a `BufWriter<File>`.
//!
//! | Function | Format |
//! |----------|--------|
//! | [`write_mass_table_csv`] | CSV `m,cogx,cogy,cogz` |
//! | [`write_ply`] | ASCII PLY 1.0, optional `mass` vertex property |
//! | [`write_rbd_point_masses`] | `((x y z ) m )` per line |
//! | [`read_sections`] | sectional mass-property CSV |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ply;
pub mod rbd;
pub mod sections;
pub mod table;

pub use error::ExportError;
pub use ply::write_ply;
pub use rbd::write_rbd_point_masses;
pub use sections::{read_sections, SectionRecord};
pub use table::{mass_rows, write_mass_table_csv, MassRow};
