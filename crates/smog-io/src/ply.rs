//! ASCII PLY point export.

use std::io::Write;

use nalgebra::Point3;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use smog_core::SmogError;

use crate::error::ExportError;

const VERTEX: &str = "vertex";

/// Write `positions` as an ASCII PLY 1.0 vertex list.
///
/// With `masses`, each vertex carries an extra `mass` property. Every
/// property is declared `float`, so values are narrowed to `f32`.
///
/// # Errors
///
/// [`ExportError::Core`] wrapping [`SmogError::ShapeMismatch`] if
/// `masses` is given with a different length, and [`ExportError::Io`] if
/// the writer fails.
pub fn write_ply<W: Write>(
    mut writer: W,
    positions: &[Point3<f64>],
    masses: Option<&[f64]>,
) -> Result<(), ExportError> {
    if let Some(m) = masses {
        if m.len() != positions.len() {
            return Err(SmogError::ShapeMismatch {
                positions: positions.len(),
                masses: m.len(),
            }
            .into());
        }
    }

    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;

    let mut vertex_def = ElementDef::new(VERTEX.to_string());
    let mut names = vec!["x", "y", "z"];
    if masses.is_some() {
        names.push("mass");
    }
    for name in &names {
        vertex_def.properties.add(PropertyDef::new(
            (*name).to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    vertex_def.count = positions.len();
    ply.header.elements.add(vertex_def);

    let vertices: Vec<DefaultElement> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut values = vec![p.x, p.y, p.z];
            if let Some(m) = masses {
                values.push(m[i]);
            }
            let mut element = DefaultElement::new();
            for (name, v) in names.iter().zip(values) {
                #[allow(clippy::cast_possible_truncation)]
                element.insert((*name).to_string(), Property::Float(v as f32));
            }
            element
        })
        .collect();
    ply.payload.insert(VERTEX.to_string(), vertices);

    Writer::new().write_ply(&mut writer, &mut ply)?;
    writer.flush()?;
    Ok(())
}
