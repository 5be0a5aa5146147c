//! Sectional hull: build a whole-body point-mass cloud from a table of
//! hull sections.
//!
//! Demonstrates:
//!   1. Reading a sectional mass table (CSV)
//!   2. Synthesizing one cloud per section inside its own box
//!   3. Concatenating the sections into one cloud
//!   4. Writing rigid-body, PLY and CSV outputs
//!
//! Run with:
//!   cargo run --example sectional_hull -- [sections.csv] [output-dir]
//!
//! Without arguments the built-in eight-section hull is used and output
//! goes to the system temp directory.

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use smog::prelude::*;
use smog_test_utils::fixtures::{breadth_at_x, hull_sections_csv, HULL_POINTS_PER_SECTION};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,smog_solver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let table = match args.next() {
        Some(path) => fs::read_to_string(path)?,
        None => hull_sections_csv(),
    };
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("smog-sectional-hull"));
    fs::create_dir_all(&out_dir)?;

    // ─── Per-section synthesis ──────────────────────────────────

    let sections = read_sections(table.as_bytes())?;
    let mut clouds = Vec::with_capacity(sections.len());
    for (i, s) in sections.iter().enumerate() {
        let span = Vector3::new(s.length(), breadth_at_x(s.cog_x), 2.0 * s.cog_z);
        let config = SynthesisConfig::new(
            s.m,
            s.center_of_gravity(),
            s.inertia(),
            HULL_POINTS_PER_SECTION,
            span,
        );
        let out = synthesize(&config)?;
        info!(
            section = i,
            retained = out.report.retained_points,
            iterations = out.report.solver.iterations,
            "section synthesized"
        );
        clouds.push(out.cloud);
    }
    let hull = PointMassCloud::concat(&clouds);
    let props = hull.mass_properties()?;
    println!(
        "hull: {} points, mass {:.3}, cog ({:.3}, {:.3}, {:.3})",
        hull.len(),
        props.total_mass,
        props.center_of_gravity.x,
        props.center_of_gravity.y,
        props.center_of_gravity.z
    );

    // ─── Export ─────────────────────────────────────────────────

    let rows = MassRow::from_cloud(&hull);
    let rbd_path = out_dir.join("point_masses.txt");
    let ply_path = out_dir.join("point_masses.ply");
    let csv_path = out_dir.join("point_masses.csv");
    write_rbd_point_masses(BufWriter::new(File::create(&rbd_path)?), &rows)?;
    write_ply(
        BufWriter::new(File::create(&ply_path)?),
        hull.positions(),
        Some(hull.masses()),
    )?;
    write_mass_table_csv(BufWriter::new(File::create(&csv_path)?), &rows)?;

    println!("wrote {}", rbd_path.display());
    println!("wrote {}", ply_path.display());
    println!("wrote {}", csv_path.display());
    Ok(())
}
