//! Centered, evenly spaced 3D lattices.

use nalgebra::Vector3;
use smog_core::SmogError;

use crate::shape::GridShape;

/// `n` evenly spaced values in `[-half_span, +half_span]`.
///
/// A single-point axis collapses to `[0.0]`. Both endpoints are exact.
pub fn axis_coordinates(n: usize, half_span: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 2.0 * half_span / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        half_span
                    } else {
                        -half_span + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// A rectangular lattice of coordinates relative to a reference point.
///
/// Points are ordered with x varying slowest and z fastest:
/// `index = (ix * ny + iy) * nz + iz`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    shape: GridShape,
    points: Vec<Vector3<f64>>,
}

impl Lattice {
    /// Build a lattice centered at the origin spanning `span` along each axis.
    pub fn build(shape: GridShape, span: Vector3<f64>) -> Result<Self, SmogError> {
        Self::build_offset(shape, span, Vector3::zeros())
    }

    /// Build a lattice centered at `offset` spanning `span` along each axis.
    ///
    /// # Errors
    ///
    /// [`SmogError::LatticeSizeMismatch`] if the product does not yield
    /// exactly `shape.cell_count()` points.
    pub fn build_offset(
        shape: GridShape,
        span: Vector3<f64>,
        offset: Vector3<f64>,
    ) -> Result<Self, SmogError> {
        let xs = axis_coordinates(shape.nx, span.x / 2.0);
        let ys = axis_coordinates(shape.ny, span.y / 2.0);
        let zs = axis_coordinates(shape.nz, span.z / 2.0);

        let mut points = Vec::with_capacity(shape.cell_count());
        for &x in &xs {
            for &y in &ys {
                for &z in &zs {
                    points.push(Vector3::new(x, y, z) + offset);
                }
            }
        }

        if points.len() != shape.cell_count() {
            return Err(SmogError::LatticeSizeMismatch {
                expected: shape.cell_count(),
                actual: points.len(),
            });
        }
        Ok(Self { shape, points })
    }

    /// The grid shape this lattice was built from.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Lattice coordinates in canonical order.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Number of lattice points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the lattice has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
