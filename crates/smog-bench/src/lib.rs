//! Benchmark profiles for smog point-mass synthesis.
//!
//! - [`reference_profile`]: 64 points, raised center of gravity
//! - [`concentrated_profile`]: 125 points with heavy pinning
//! - [`hull_section_profiles`]: the eight 720-point hull sections
//! - [`scattered_cloud`]: deterministic large cloud for mass-property timing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nalgebra::{Point3, Vector3};
use smog_core::{DiagonalInertia, PointMassCloud};
use smog_synth::SynthesisConfig;
use smog_test_utils::fixtures::{section_span, HULL_POINTS_PER_SECTION, HULL_SECTIONS};

/// 10 kg on a 4x4x4 lattice over a 2x2x4 box, CoG at z = 1.
///
/// Converges after a few pinning rounds; no least-squares fallback.
pub fn reference_profile() -> SynthesisConfig {
    SynthesisConfig::new(
        10.0,
        Point3::new(0.0, 0.0, 1.0),
        DiagonalInertia::new(9.0, 10.0, 5.0),
        64,
        Vector3::new(2.0, 2.0, 4.0),
    )
}

/// 10 kg on a 5x5x5 lattice with inertia small enough that most points
/// are pinned to zero.
pub fn concentrated_profile() -> SynthesisConfig {
    SynthesisConfig::new(
        10.0,
        Point3::origin(),
        DiagonalInertia::new(1.0, 1.0, 1.0),
        125,
        Vector3::new(2.0, 2.0, 2.0),
    )
}

/// One config per hull fixture section, each on an 8x9x10 lattice.
pub fn hull_section_profiles() -> Vec<SynthesisConfig> {
    HULL_SECTIONS
        .iter()
        .map(|s| {
            SynthesisConfig::new(
                s.mass,
                Point3::from(s.cog),
                DiagonalInertia::new(s.inertia[0], s.inertia[1], s.inertia[2]),
                HULL_POINTS_PER_SECTION,
                Vector3::from(section_span(s)),
            )
        })
        .collect()
}

/// A deterministic cloud of `n` points scattered in a 10 m cube.
pub fn scattered_cloud(n: usize) -> PointMassCloud {
    let mut positions = Vec::with_capacity(n);
    let mut masses = Vec::with_capacity(n);
    for i in 0..n as u64 {
        let x = (i.wrapping_mul(6364136223846793007) % 1000) as f64 / 100.0;
        let y = (i.wrapping_mul(1442695040888963407) % 1000) as f64 / 100.0;
        let z = (i.wrapping_mul(2862933555777941757) % 1000) as f64 / 100.0;
        positions.push(Point3::new(x, y, z));
        masses.push(1.0 + (i % 7) as f64);
    }
    PointMassCloud::new(positions, masses).expect("positions and masses are pushed in lockstep")
}
