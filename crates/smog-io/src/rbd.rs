//! Rigid-body point-mass table export.
//!
//! One point per line in the form `((x y z ) m )`, the tuple-list syntax
//! accepted by OpenFOAM's `List<Tuple2<point, scalar>>` table reader. No
//! header or count line is written.

use std::io::Write;

use crate::error::ExportError;
use crate::table::MassRow;

/// Write one `((x y z ) m )` line per row.
pub fn write_rbd_point_masses<W: Write>(mut writer: W, rows: &[MassRow]) -> Result<(), ExportError> {
    for row in rows {
        writeln!(
            writer,
            "(({} {} {} ) {} )",
            row.cogx, row.cogy, row.cogz, row.m
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let rows = [
            MassRow {
                m: 12.5,
                cogx: 1.0,
                cogy: -0.5,
                cogz: 3.25,
            },
            MassRow {
                m: 0.1,
                cogx: 0.0,
                cogy: 0.0,
                cogz: 0.0,
            },
        ];
        let mut buf = Vec::new();
        write_rbd_point_masses(&mut buf, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "((1 -0.5 3.25 ) 12.5 )\n((0 0 0 ) 0.1 )\n"
        );
    }

    #[test]
    fn no_rows_writes_nothing() {
        let mut buf = Vec::new();
        write_rbd_point_masses(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
