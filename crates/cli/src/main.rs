use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use geokernel::{BoundingBox, Geometry, Position, SimplifyCfg};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::fmt::SubscriberBuilder;

mod geojson;

#[derive(Parser)]
#[command(name = "geokernel")]
#[command(about = "Simplify, hull and measure GeoJSON geometries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reduce vertices of every line and polygon ring (Douglas–Peucker)
    Simplify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Tolerance in degrees
        #[arg(long, default_value_t = SimplifyCfg::default().tolerance)]
        tolerance: f64,
        /// Skip the radial-distance pre-filter
        #[arg(long)]
        highest_quality: bool,
    },
    /// Write the convex hull of all positions as a Polygon
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the bounding box of all positions as JSON
    Bbox {
        #[arg(long)]
        input: PathBuf,
        /// Allow a box that wraps across ±180° longitude
        #[arg(long)]
        antimeridian: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Simplify {
            input,
            output,
            tolerance,
            highest_quality,
        } => simplify(&input, &output, SimplifyCfg::new(tolerance, highest_quality)),
        Action::Hull { input, output } => hull(&input, &output),
        Action::Bbox {
            input,
            antimeridian,
        } => {
            let report = bbox(&input, antimeridian)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn vertex_total(doc: &Value) -> Result<usize> {
    Ok(geojson::geometries(doc)?
        .iter()
        .map(Geometry::vertex_count)
        .sum())
}

fn all_positions(doc: &Value) -> Result<Vec<Position>> {
    Ok(geojson::geometries(doc)?
        .iter()
        .flat_map(Geometry::positions)
        .collect())
}

fn simplify(input: &Path, output: &Path, cfg: SimplifyCfg) -> Result<()> {
    if cfg.tolerance.is_nan() || cfg.tolerance < 0.0 {
        bail!("tolerance must be a non-negative number, got {}", cfg.tolerance);
    }
    let doc = geojson::read_document(input)?;
    let before = vertex_total(&doc)?;
    let simplified =
        geojson::map_geometries(&doc, |g| g.simplified(cfg.tolerance, cfg.highest_quality))?;
    let after = vertex_total(&simplified)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        tolerance = cfg.tolerance,
        highest_quality = cfg.highest_quality,
        before,
        after,
        "simplify"
    );
    geojson::write_document(output, &simplified)
}

fn hull(input: &Path, output: &Path) -> Result<()> {
    let doc = geojson::read_document(input)?;
    let positions = all_positions(&doc)?;
    let count = positions.len();
    let Some(polygon) = Geometry::MultiPoint(positions).convex_hull() else {
        bail!(
            "{}: convex hull needs three non-collinear positions, found {count} positions",
            input.display()
        );
    };
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        positions = count,
        hull_vertices = polygon.exterior.coordinates.len() - 1,
        "hull"
    );
    geojson::write_document(output, &geojson::to_value(&Geometry::Polygon(polygon)))
}

/// JSON summary printed by `bbox`; corners are `[longitude, latitude]`.
#[derive(Debug, Serialize)]
struct BboxReport {
    south_west: [f64; 2],
    north_east: [f64; 2],
    center: [f64; 2],
    spans_antimeridian: bool,
    min_elevation: Option<f64>,
    max_elevation: Option<f64>,
}

impl From<BoundingBox> for BboxReport {
    fn from(b: BoundingBox) -> Self {
        let lon_lat = |p: Position| [p.longitude, p.latitude];
        Self {
            south_west: lon_lat(b.south_west),
            north_east: lon_lat(b.north_east),
            center: lon_lat(b.center()),
            spans_antimeridian: b.spans_antimeridian(),
            min_elevation: b.min_elevation,
            max_elevation: b.max_elevation,
        }
    }
}

fn bbox(input: &Path, antimeridian: bool) -> Result<BboxReport> {
    let doc = geojson::read_document(input)?;
    let positions = all_positions(&doc)?;
    let Some(b) = BoundingBox::from_positions_spanning(&positions, antimeridian) else {
        bail!("{}: no positions", input.display());
    };
    tracing::info!(
        input = %input.display(),
        positions = positions.len(),
        spans_antimeridian = b.spans_antimeridian(),
        "bbox"
    );
    Ok(b.into())
}
