//! Test fixtures and assertion helpers for smog development.
//!
//! - [`fixtures`] holds a sectional hull mass table used by the
//!   end-to-end tests, the sectional example, and the benchmarks.
//! - [`assert_close`] and [`assert_mass_properties`] compare floats with
//!   a relative tolerance and report which quantity drifted.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use nalgebra::Point3;
use smog_core::{DiagonalInertia, MassProperties};

/// Panic unless `actual` is within `rel_tol * max(1, |expected|)` of `expected`.
#[track_caller]
pub fn assert_close(what: &str, actual: f64, expected: f64, rel_tol: f64) {
    let limit = rel_tol * expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= limit,
        "{what}: got {actual}, expected {expected} (|diff| = {diff:e} > {limit:e})"
    );
}

/// Panic unless every component of `props` matches the targets.
#[track_caller]
pub fn assert_mass_properties(
    props: &MassProperties,
    total_mass: f64,
    cog: Point3<f64>,
    inertia: DiagonalInertia,
    rel_tol: f64,
) {
    assert_close("total_mass", props.total_mass, total_mass, rel_tol);
    assert_close("cog.x", props.center_of_gravity.x, cog.x, rel_tol);
    assert_close("cog.y", props.center_of_gravity.y, cog.y, rel_tol);
    assert_close("cog.z", props.center_of_gravity.z, cog.z, rel_tol);
    assert_close("ixx", props.inertia.ixx, inertia.ixx, rel_tol);
    assert_close("iyy", props.inertia.iyy, inertia.iyy, rel_tol);
    assert_close("izz", props.inertia.izz, inertia.izz, rel_tol);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_close_accepts_small_drift() {
        assert_close("x", 1000.0 + 1e-7, 1000.0, 1e-9);
        assert_close("y", 1e-12, 0.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "ixx")]
    fn assert_mass_properties_names_the_quantity() {
        let props = MassProperties {
            total_mass: 1.0,
            center_of_gravity: Point3::origin(),
            inertia: DiagonalInertia::new(2.0, 1.0, 1.0),
        };
        assert_mass_properties(
            &props,
            1.0,
            Point3::origin(),
            DiagonalInertia::new(1.0, 1.0, 1.0),
            1e-9,
        );
    }
}
