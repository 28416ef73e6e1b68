//! Closed rings: point containment and spherical area.

use crate::bbox::BoundingBox;
use crate::cfg::EQUATORIAL_RADIUS;
use crate::coord::{to_radians, Position};
use crate::simplify::simplify_ring;

/// Closed sequence of positions bounding an area.
///
/// Invariants (by convention, not enforced):
/// - first == last;
/// - at least 3 distinct vertices for a non-degenerate ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRing {
    pub coordinates: Vec<Position>,
}

impl LinearRing {
    #[inline]
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.coordinates.len() > 1 && self.coordinates.first() == self.coordinates.last()
    }

    /// Vertices without the closing duplicate.
    pub(crate) fn vertices(&self) -> &[Position] {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) if first == last => {
                &self.coordinates[..self.coordinates.len() - 1]
            }
            _ => &self.coordinates,
        }
    }

    /// Signed spherical area in square meters (Chamberlain–Duquette).
    ///
    /// Positive for clockwise rings. Every stored position takes part, the
    /// closing duplicate included, with indices wrapping around.
    pub fn area(&self) -> f64 {
        let coords = &self.coordinates;
        let n = coords.len();
        if n <= 2 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let lower = coords[i];
            let middle = coords[(i + 1) % n];
            let upper = coords[(i + 2) % n];
            sum += (to_radians(upper.longitude) - to_radians(lower.longitude))
                * to_radians(middle.latitude).sin();
        }
        sum * EQUATORIAL_RADIUS * EQUATORIAL_RADIUS / 2.0
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.area() > 0.0
    }

    /// Point-in-ring test.
    ///
    /// Rings with exactly three distinct vertices take a barycentric fast path
    /// that does not look at `ignore_boundary`; points on a triangle's edge are
    /// reported as whatever the sign test yields. All other rings reject via
    /// their bounding box first, then walk the edges: a point exactly on an
    /// edge returns `!ignore_boundary`, otherwise even/odd ray crossing decides.
    pub fn contains(&self, p: Position, ignore_boundary: bool) -> bool {
        let ring = self.vertices();
        match ring.len() {
            0 => return false,
            3 => return triangle_contains(ring[0], ring[1], ring[2], p),
            _ => {}
        }
        match BoundingBox::from_positions(&self.coordinates) {
            Some(bbox) if bbox.contains(p, ignore_boundary) => {}
            _ => return false,
        }

        let (x, y) = (p.longitude, p.latitude);
        let mut inside = false;
        let mut j = ring.len() - 1;
        for i in 0..ring.len() {
            let (xi, yi) = (ring[i].longitude, ring[i].latitude);
            let (xj, yj) = (ring[j].longitude, ring[j].latitude);
            let on_boundary = y * (xi - xj) + yi * (xj - x) + yj * (x - xi) == 0.0
                && (xi - x) * (xj - x) <= 0.0
                && (yi - y) * (yj - y) <= 0.0;
            if on_boundary {
                return !ignore_boundary;
            }
            let crosses = ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi);
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Simplified ring, always valid and closed when the input was valid.
    pub fn simplified(&self, tolerance: f64, highest_quality: bool) -> LinearRing {
        LinearRing::new(simplify_ring(&self.coordinates, tolerance, highest_quality))
    }

    #[inline]
    pub fn simplify(&mut self, tolerance: f64, highest_quality: bool) {
        *self = self.simplified(tolerance, highest_quality);
    }
}

/// Barycentric sign test on (x = longitude, y = latitude).
///
/// `s` and `t` are the unnormalized barycentric weights of `v1` and `v2`;
/// `a` is twice the signed triangle area, so the weight of `v0` is
/// `a - s - t`. Inside (edges included) when all three share the sign of `a`.
fn triangle_contains(v0: Position, v1: Position, v2: Position, p: Position) -> bool {
    let (x0, y0) = (v0.longitude, v0.latitude);
    let (x1, y1) = (v1.longitude, v1.latitude);
    let (x2, y2) = (v2.longitude, v2.latitude);
    let (x, y) = (p.longitude, p.latitude);

    let s = (x0 - x2) * (y - y2) - (y0 - y2) * (x - x2);
    let t = (x1 - x0) * (y - y0) - (y1 - y0) * (x - x0);
    let a = (x1 - x0) * (y2 - y0) - (y1 - y0) * (x2 - x0);
    if a < 0.0 {
        s <= 0.0 && t <= 0.0 && s + t >= a
    } else {
        s >= 0.0 && t >= 0.0 && s + t <= a
    }
}
