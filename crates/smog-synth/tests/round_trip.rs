//! Property test: targets taken from a random nonnegative distribution
//! on a lattice are reproduced by synthesis on a lattice of the same
//! size and span.

use nalgebra::{Point3, Vector3};
use proptest::prelude::*;
use smog_core::compute_mass_properties;
use smog_lattice::{choose_grid_shape, Lattice};
use smog_synth::{synthesize, SynthesisConfig};
use smog_test_utils::assert_mass_properties;

const POINT_COUNTS: [usize; 8] = [27, 36, 48, 60, 64, 80, 100, 125];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn weighted_lattice_targets_are_reproduced(
        n_points in prop::sample::select(POINT_COUNTS.to_vec()),
        span in prop::array::uniform3(0.5f64..5.0),
        total_mass in 0.5f64..100.0,
        weights in prop::collection::vec(0.05f64..1.0, 125),
    ) {
        let shape = choose_grid_shape(n_points).unwrap();
        let lattice = Lattice::build(shape, Vector3::from(span)).unwrap();
        let positions: Vec<Point3<f64>> =
            lattice.points().iter().map(|v| Point3::from(*v)).collect();
        let weight_sum: f64 = weights[..n_points].iter().sum();
        let masses: Vec<f64> = weights[..n_points]
            .iter()
            .map(|w| total_mass * w / weight_sum)
            .collect();
        let target = compute_mass_properties(&positions, &masses).unwrap();

        let cfg = SynthesisConfig::new(
            target.total_mass,
            target.center_of_gravity,
            target.inertia,
            n_points,
            Vector3::from(span),
        );
        let out = synthesize(&cfg).unwrap();

        prop_assert!(out.cloud.masses().iter().all(|&m| m > 0.0));
        prop_assert!(out.cloud.len() <= n_points);
        assert_mass_properties(
            &out.report.achieved,
            target.total_mass,
            target.center_of_gravity,
            target.inertia,
            1e-7,
        );
    }
}
