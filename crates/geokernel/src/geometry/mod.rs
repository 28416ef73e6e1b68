//! Geometry value types (GeoJSON model) and their queries.
//!
//! - `LineString`: open path; closest-point projection, slicing, trimming.
//! - `LinearRing`: closed path; containment and spherical area.
//! - `Polygon`, `MultiPolygon`: rings with holes; containment, area, centroids.
//! - `Geometry`: closed sum type over all of the above.
//!
//! Values are immutable. Each `simplify(&mut self, ..)` only rebinds `self` to
//! the result of the matching pure `simplified(&self, ..)`.

mod line;
mod polygon;
mod ring;

pub use line::{IndexedCoordinate, LineString};
pub use polygon::{MultiPolygon, Polygon};
pub use ring::LinearRing;

use crate::bbox::BoundingBox;
use crate::coord::Position;
use crate::hull::convex_hull;

/// Any GeoJSON geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(LineString),
    MultiLineString(Vec<LineString>),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// GeoJSON `type` member for this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// All positions in document order (rings keep their closing position).
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::new();
        self.collect_positions(&mut out);
        out
    }

    fn collect_positions(&self, out: &mut Vec<Position>) {
        match self {
            Geometry::Point(p) => out.push(*p),
            Geometry::MultiPoint(ps) => out.extend_from_slice(ps),
            Geometry::LineString(ls) => out.extend_from_slice(&ls.coordinates),
            Geometry::MultiLineString(lines) => {
                for ls in lines {
                    out.extend_from_slice(&ls.coordinates);
                }
            }
            Geometry::Polygon(poly) => poly.collect_positions(out),
            Geometry::MultiPolygon(mp) => {
                for poly in &mp.polygons {
                    poly.collect_positions(out);
                }
            }
            Geometry::GeometryCollection(items) => {
                for g in items {
                    g.collect_positions(out);
                }
            }
        }
    }

    /// Number of positions across all parts.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(ps) => ps.len(),
            Geometry::LineString(ls) => ls.coordinates.len(),
            Geometry::MultiLineString(lines) => lines.iter().map(|l| l.coordinates.len()).sum(),
            Geometry::Polygon(poly) => poly.vertex_count(),
            Geometry::MultiPolygon(mp) => mp.polygons.iter().map(Polygon::vertex_count).sum(),
            Geometry::GeometryCollection(items) => items.iter().map(Geometry::vertex_count).sum(),
        }
    }

    pub fn bounding_box(&self, allow_spanning_antimeridian: bool) -> Option<BoundingBox> {
        BoundingBox::from_positions_spanning(&self.positions(), allow_spanning_antimeridian)
    }

    /// Convex hull of every position as a closed polygon.
    ///
    /// `None` when fewer than three hull vertices remain (empty, single point,
    /// or collinear input).
    pub fn convex_hull(&self) -> Option<Polygon> {
        let mut hull = convex_hull(&self.positions());
        if hull.len() < 3 {
            return None;
        }
        hull.push(hull[0]);
        Some(Polygon::new(LinearRing::new(hull), Vec::new()))
    }

    /// Simplified copy; points are returned unchanged.
    pub fn simplified(&self, tolerance: f64, highest_quality: bool) -> Geometry {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => self.clone(),
            Geometry::LineString(ls) => {
                Geometry::LineString(ls.simplified(tolerance, highest_quality))
            }
            Geometry::MultiLineString(lines) => Geometry::MultiLineString(
                lines
                    .iter()
                    .map(|l| l.simplified(tolerance, highest_quality))
                    .collect(),
            ),
            Geometry::Polygon(poly) => Geometry::Polygon(poly.simplified(tolerance, highest_quality)),
            Geometry::MultiPolygon(mp) => {
                Geometry::MultiPolygon(mp.simplified(tolerance, highest_quality))
            }
            Geometry::GeometryCollection(items) => Geometry::GeometryCollection(
                items
                    .iter()
                    .map(|g| g.simplified(tolerance, highest_quality))
                    .collect(),
            ),
        }
    }

    #[inline]
    pub fn simplify(&mut self, tolerance: f64, highest_quality: bool) {
        *self = self.simplified(tolerance, highest_quality);
    }

    /// Point-in-geometry for areal variants; other variants never contain.
    pub fn contains(&self, p: Position, ignore_boundary: bool) -> bool {
        match self {
            Geometry::Polygon(poly) => poly.contains(p, ignore_boundary),
            Geometry::MultiPolygon(mp) => mp.contains(p, ignore_boundary),
            Geometry::GeometryCollection(items) => {
                items.iter().any(|g| g.contains(p, ignore_boundary))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
