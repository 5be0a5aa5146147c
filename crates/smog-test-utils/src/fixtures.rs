//! Sectional hull fixture.
//!
//! Eight 20 m sections of a 160 m hull, each with its own mass, center of
//! gravity and diagonal inertia. The box each section is synthesized in
//! is `(xend - xstart, breadth_at_x(cog_x), 2 * cog_z)`; every section is
//! feasible on a 720-point lattice.

/// One row of the sectional mass table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullSection {
    pub mass: f64,
    pub cog: [f64; 3],
    pub inertia: [f64; 3],
    pub xstart: f64,
    pub xend: f64,
}

const fn section(
    mass: f64,
    cog: [f64; 3],
    inertia: [f64; 3],
    xstart: f64,
    xend: f64,
) -> HullSection {
    HullSection {
        mass,
        cog,
        inertia,
        xstart,
        xend,
    }
}

/// Lattice size used for every hull section.
pub const HULL_POINTS_PER_SECTION: usize = 720;

/// Beam of the parallel midbody.
pub const HULL_BEAM: f64 = 11.75;

pub const HULL_SECTIONS: [HullSection; 8] = [
    section(180.0, [9.5, 0.0, 4.2], [1889.8, 5999.6, 6090.2], 0.0, 20.0),
    section(420.0, [30.3, 0.0, 3.9], [5917.3, 13710.0, 16007.4], 20.0, 40.0),
    section(510.0, [50.2, 0.0, 3.7], [6965.7, 16428.2, 19437.5], 40.0, 60.0),
    section(530.0, [70.0, 0.0, 3.6], [7129.3, 16962.8, 20199.8], 60.0, 80.0),
    section(520.0, [89.8, 0.0, 3.6], [6994.7, 16642.8, 19818.6], 80.0, 100.0),
    section(480.0, [109.7, 0.0, 3.7], [6556.0, 15461.8, 18294.1], 100.0, 120.0),
    section(390.0, [130.4, 0.0, 4.0], [3913.4, 12818.0, 13195.4], 120.0, 140.0),
    section(150.0, [150.6, 0.0, 4.6], [1724.4, 5149.3, 5075.1], 140.0, 160.0),
];

/// Hull breadth at longitudinal position `x`: full beam amidships, 75%
/// of it in the bow and stern regions.
pub fn breadth_at_x(x: f64) -> f64 {
    if !(10.0..=130.0).contains(&x) {
        HULL_BEAM * 0.75
    } else {
        HULL_BEAM
    }
}

/// Lattice span for one section.
pub fn section_span(s: &HullSection) -> [f64; 3] {
    [s.xend - s.xstart, breadth_at_x(s.cog[0]), 2.0 * s.cog[2]]
}

/// Total mass of the whole hull.
pub fn hull_total_mass() -> f64 {
    HULL_SECTIONS.iter().map(|s| s.mass).sum()
}

/// The fixture as a sectional CSV table with header
/// `m,cog_x,cog_y,cog_z,Ixx,Iyy,Izz,xstart,xend`.
pub fn hull_sections_csv() -> String {
    let mut out = String::from("m,cog_x,cog_y,cog_z,Ixx,Iyy,Izz,xstart,xend\n");
    for s in &HULL_SECTIONS {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            s.mass,
            s.cog[0],
            s.cog[1],
            s.cog[2],
            s.inertia[0],
            s.inertia[1],
            s.inertia[2],
            s.xstart,
            s.xend
        ));
    }
    out
}
