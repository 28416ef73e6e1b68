//! Convex hull of a coordinate set.
//!
//! Andrew's monotone chain on (x = longitude, y = latitude). Collinear points
//! on the hull boundary are dropped; duplicates are not filtered beforehand.

use std::cmp::Ordering;

use crate::coord::Position;
use crate::util::{cross, xy};

fn turn(a: Position, b: Position, c: Position) -> f64 {
    cross(xy(a), xy(b), xy(c))
}

/// Hull vertices in counter-clockwise order, not closed.
///
/// Inputs with at most one position are returned unchanged. Every output
/// position is one of the inputs as stored (altitude included), and output
/// length never exceeds input length.
pub fn convex_hull(positions: &[Position]) -> Vec<Position> {
    if positions.len() <= 1 {
        return positions.to_vec();
    }
    let mut pts = positions.to_vec();
    pts.sort_by(|a, b| {
        match a.longitude.partial_cmp(&b.longitude).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.latitude.partial_cmp(&b.latitude).unwrap_or(Ordering::Equal),
            o => o,
        }
    });

    let mut lower: Vec<Position> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Position> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
