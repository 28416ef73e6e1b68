//! Planar helpers on (longitude, latitude) treated as (x, y).

use nalgebra::Vector2;

use crate::coord::Position;

#[inline]
pub(crate) fn xy(p: Position) -> Vector2<f64> {
    Vector2::new(p.longitude, p.latitude)
}

#[inline]
pub(crate) fn from_xy(v: Vector2<f64>) -> Position {
    Position::new(v.y, v.x)
}

/// z-component of `a × b`.
#[inline]
pub(crate) fn perp_dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of `c` relative to the directed line `a → b` (positive = left turn).
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    perp_dot(b - a, c - a)
}

#[inline]
pub(crate) fn sq_distance(a: Position, b: Position) -> f64 {
    (xy(b) - xy(a)).norm_squared()
}

/// Squared planar distance from `p` to the segment `start → end`.
///
/// A zero-length segment degrades to the distance to `start`.
pub(crate) fn sq_segment_distance(p: Position, start: Position, end: Position) -> f64 {
    let mut foot = xy(start);
    let d = xy(end) - foot;
    let len_sq = d.norm_squared();
    if len_sq != 0.0 {
        let t = (xy(p) - foot).dot(&d) / len_sq;
        if t > 1.0 {
            foot = xy(end);
        } else if t > 0.0 {
            foot += d * t;
        }
    }
    (xy(p) - foot).norm_squared()
}

/// Twice the unsigned planar area of the triangle (a, b, c).
#[inline]
pub(crate) fn triangle_area2(a: Position, b: Position, c: Position) -> f64 {
    cross(xy(a), xy(b), xy(c)).abs()
}
