//! Polygons with holes and collections of polygons.

use nalgebra::Vector2;

use super::ring::LinearRing;
use crate::coord::{destination, Position};
use crate::util::{from_xy, perp_dot, xy};

/// Exterior ring plus zero or more holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub exterior: LinearRing,
    pub interiors: Vec<LinearRing>,
}

impl Polygon {
    #[inline]
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Regular `vertices`-gon approximating a circle of `radius` meters.
    ///
    /// Vertices are placed clockwise starting due north; the ring is closed.
    pub fn circle(center: Position, radius: f64, vertices: usize) -> Self {
        let n = vertices.max(3);
        let mut coords: Vec<Position> = (0..n)
            .map(|i| destination(center, radius, i as f64 * 360.0 / n as f64))
            .collect();
        coords.push(coords[0]);
        Self::new(LinearRing::new(coords), Vec::new())
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.exterior.coordinates.len()
            + self
                .interiors
                .iter()
                .map(|r| r.coordinates.len())
                .sum::<usize>()
    }

    pub(crate) fn collect_positions(&self, out: &mut Vec<Position>) {
        out.extend_from_slice(&self.exterior.coordinates);
        for hole in &self.interiors {
            out.extend_from_slice(&hole.coordinates);
        }
    }

    /// Inside the exterior and outside every hole.
    ///
    /// Holes are tested with the opposite boundary flag, so a point on a hole's
    /// edge counts as being on this polygon's boundary.
    pub fn contains(&self, p: Position, ignore_boundary: bool) -> bool {
        if !self.exterior.contains(p, ignore_boundary) {
            return false;
        }
        !self
            .interiors
            .iter()
            .any(|hole| hole.contains(p, !ignore_boundary))
    }

    /// Unsigned area in square meters, holes subtracted.
    pub fn area(&self) -> f64 {
        self.exterior.area().abs() - self.interiors.iter().map(|r| r.area().abs()).sum::<f64>()
    }

    /// Mean of the exterior's vertices (closing duplicate excluded).
    pub fn centroid(&self) -> Option<Position> {
        let vertices = self.exterior.vertices();
        if vertices.is_empty() {
            return None;
        }
        let sum = vertices
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + xy(*p));
        Some(from_xy(sum / vertices.len() as f64))
    }

    /// Planar area-weighted centroid of the exterior ring.
    ///
    /// Coordinates are shifted to the vertex mean before the shoelace sums to
    /// limit cancellation. Degenerate (zero-area) rings give the vertex mean.
    pub fn center_of_mass(&self) -> Option<Position> {
        let centroid = self.centroid()?;
        let origin = xy(centroid);
        let vertices = self.exterior.vertices();
        if vertices.len() == 1 {
            return Some(vertices[0]);
        }
        let mut sum = Vector2::zeros();
        let mut twice_area = 0.0;
        // Cyclic pairs, so an unclosed exterior still gets its closing edge.
        for (i, &p) in vertices.iter().enumerate() {
            let a = xy(p) - origin;
            let b = xy(vertices[(i + 1) % vertices.len()]) - origin;
            let w = perp_dot(a, b);
            twice_area += w;
            sum += (a + b) * w;
        }
        if twice_area == 0.0 {
            return Some(centroid);
        }
        Some(from_xy(origin + sum / (3.0 * twice_area)))
    }

    /// Simplified copy; every ring stays valid and closed.
    pub fn simplified(&self, tolerance: f64, highest_quality: bool) -> Polygon {
        Polygon::new(
            self.exterior.simplified(tolerance, highest_quality),
            self.interiors
                .iter()
                .map(|r| r.simplified(tolerance, highest_quality))
                .collect(),
        )
    }

    #[inline]
    pub fn simplify(&mut self, tolerance: f64, highest_quality: bool) {
        *self = self.simplified(tolerance, highest_quality);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    #[inline]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn contains(&self, p: Position, ignore_boundary: bool) -> bool {
        self.polygons.iter().any(|poly| poly.contains(p, ignore_boundary))
    }

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    pub fn simplified(&self, tolerance: f64, highest_quality: bool) -> MultiPolygon {
        MultiPolygon::new(
            self.polygons
                .iter()
                .map(|p| p.simplified(tolerance, highest_quality))
                .collect(),
        )
    }

    #[inline]
    pub fn simplify(&mut self, tolerance: f64, highest_quality: bool) {
        *self = self.simplified(tolerance, highest_quality);
    }
}
