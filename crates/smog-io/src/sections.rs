//! Sectional mass-property tables.
//!
//! A sectional table describes a long body as consecutive slices
//! `[xstart, xend]`, each with its own mass, center of gravity and
//! diagonal inertia. Columns: `m, cog_x, cog_y, cog_z, Ixx, Iyy, Izz,
//! xstart, xend`.

use std::io::Read;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use smog_core::{DiagonalInertia, SmogError};

use crate::error::ExportError;

/// One slice of a sectional mass table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section mass.
    pub m: f64,
    /// Center of gravity, x.
    pub cog_x: f64,
    /// Center of gravity, y.
    pub cog_y: f64,
    /// Center of gravity, z.
    pub cog_z: f64,
    /// Moment of inertia about x through the CoG.
    #[serde(rename = "Ixx")]
    pub ixx: f64,
    /// Moment of inertia about y through the CoG.
    #[serde(rename = "Iyy")]
    pub iyy: f64,
    /// Moment of inertia about z through the CoG.
    #[serde(rename = "Izz")]
    pub izz: f64,
    /// Section start along x.
    pub xstart: f64,
    /// Section end along x.
    pub xend: f64,
}

impl SectionRecord {
    /// Center of gravity as a point.
    pub fn center_of_gravity(&self) -> Point3<f64> {
        Point3::new(self.cog_x, self.cog_y, self.cog_z)
    }

    /// Inertia columns as a [`DiagonalInertia`].
    pub fn inertia(&self) -> DiagonalInertia {
        DiagonalInertia::new(self.ixx, self.iyy, self.izz)
    }

    /// `xend - xstart`.
    pub fn length(&self) -> f64 {
        self.xend - self.xstart
    }
}

/// Read every record of a sectional table.
///
/// # Errors
///
/// [`ExportError::Csv`] for malformed rows or missing columns, and
/// [`ExportError::Core`] wrapping [`SmogError::InvalidInput`] for a
/// section whose `xend` is not past its `xstart`.
pub fn read_sections<R: Read>(reader: R) -> Result<Vec<SectionRecord>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for (i, record) in rdr.deserialize::<SectionRecord>().enumerate() {
        let record = record?;
        let length = record.length();
        if length.is_nan() || length <= 0.0 {
            return Err(SmogError::invalid_input(format!(
                "section {i}: xend ({}) must be greater than xstart ({})",
                record.xend, record.xstart
            ))
            .into());
        }
        out.push(record);
    }
    Ok(out)
}
