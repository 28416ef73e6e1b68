//! Geometry kernel for geographic coordinates.
//!
//! Pure functions and value types over (latitude, longitude) sequences that
//! follow the GeoJSON geometry model: points, line strings, closed rings and
//! polygons.
//!
//! Layout
//! - `coord`: haversine distance, bearing, destination, angle wrapping.
//! - `bbox`: bounding boxes, optionally spanning the antimeridian.
//! - `geometry`: value types plus containment, area, closest-point projection.
//! - `intersect`: planar segment intersection.
//! - `simplify`: radial pre-filter, Douglas–Peucker, Visvalingam–Whyatt.
//! - `hull`: monotone-chain convex hull.
//!
//! Every function is synchronous and side-effect free; degenerate inputs give
//! `None` or an empty result rather than an error.

pub mod bbox;
pub mod cfg;
pub mod coord;
pub mod geometry;
pub mod hull;
pub mod intersect;
pub mod simplify;
mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bbox::BoundingBox;
pub use coord::{destination, direction, distance, mid, to_degrees, to_radians, wrap, Position};
pub use geometry::{
    Geometry, IndexedCoordinate, LineString, LinearRing, MultiPolygon, Polygon,
};
pub use hull::convex_hull;
pub use intersect::{intersection, LineSegment};
pub use simplify::{simplify, simplify_ring, simplify_vw, SimplifyCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bbox::BoundingBox;
    pub use crate::coord::{destination, direction, distance, Position};
    pub use crate::geometry::{
        Geometry, IndexedCoordinate, LineString, LinearRing, MultiPolygon, Polygon,
    };
    pub use crate::hull::convex_hull;
    pub use crate::intersect::intersection;
    pub use crate::simplify::SimplifyCfg;
}
