//! Tabular view of a point-mass cloud: one `(m, cogx, cogy, cogz)` row
//! per point.

use std::io::Write;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use smog_core::{PointMassCloud, SmogError};

use crate::error::ExportError;

/// One point mass as a table row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassRow {
    /// Mass.
    pub m: f64,
    /// Position, x.
    pub cogx: f64,
    /// Position, y.
    pub cogy: f64,
    /// Position, z.
    pub cogz: f64,
}

impl MassRow {
    /// Row for a single point.
    pub fn new(position: &Point3<f64>, m: f64) -> Self {
        Self {
            m,
            cogx: position.x,
            cogy: position.y,
            cogz: position.z,
        }
    }

    /// One row per point of `cloud`, in cloud order.
    pub fn from_cloud(cloud: &PointMassCloud) -> Vec<Self> {
        cloud.iter().map(|(p, m)| Self::new(p, m)).collect()
    }

    /// The position column as a point.
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.cogx, self.cogy, self.cogz)
    }
}

/// Build rows from parallel position and mass slices.
///
/// # Errors
///
/// [`ExportError::Core`] wrapping [`SmogError::ShapeMismatch`] if the
/// slices differ in length.
pub fn mass_rows(positions: &[Point3<f64>], masses: &[f64]) -> Result<Vec<MassRow>, ExportError> {
    if positions.len() != masses.len() {
        return Err(SmogError::ShapeMismatch {
            positions: positions.len(),
            masses: masses.len(),
        }
        .into());
    }
    Ok(positions
        .iter()
        .zip(masses)
        .map(|(p, &m)| MassRow::new(p, m))
        .collect())
}

/// Write rows as CSV with header `m,cogx,cogy,cogz`.
pub fn write_mass_table_csv<W: Write>(writer: W, rows: &[MassRow]) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        out.write_record(["m", "cogx", "cogy", "cogz"])?;
    }
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}
