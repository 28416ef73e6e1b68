//! Planar intersection of two line segments.
//!
//! Coordinates are treated as (x = longitude, y = latitude) with no spherical
//! correction; callers use this on short segments where that is adequate.

use crate::coord::Position;
use crate::util::{from_xy, perp_dot, xy};

/// A pair of positions; only used as intersection input.
pub type LineSegment = (Position, Position);

/// Intersection point of two segments, if both contain it.
///
/// Solves `p0 + a·r = q0 + b·s` for `a`, `b`. Parallel or collinear segments
/// (determinant exactly zero) give `None`; so does any solution with `a` or
/// `b` outside `[0, 1]`.
pub fn intersection(seg1: LineSegment, seg2: LineSegment) -> Option<Position> {
    let p0 = xy(seg1.0);
    let r = xy(seg1.1) - p0;
    let q0 = xy(seg2.0);
    let s = xy(seg2.1) - q0;

    let denominator = perp_dot(r, s);
    if denominator == 0.0 {
        return None;
    }
    let start = p0 - q0;
    let a = perp_dot(s, start) / denominator;
    let b = perp_dot(r, start) / denominator;
    if !(0.0..=1.0).contains(&a) || !(0.0..=1.0).contains(&b) {
        return None;
    }
    Some(from_xy(p0 + r * a))
}
