//! Shape-preserving vertex reduction.
//!
//! - `simplify`: radial-distance pre-filter followed by Douglas–Peucker.
//! - `simplify_ring`: same, with tolerance relaxation so rings stay valid.
//! - `simplify_vw`: Visvalingam–Whyatt by repeated minimum-area scan.
//!
//! All distances are planar and squared, measured in degrees on
//! (x = longitude, y = latitude). Douglas–Peucker runs over an explicit stack of
//! index ranges so adversarial inputs cannot exhaust the call stack.

use crate::cfg::{RING_RELAX_MAX_ITER, RING_RELAX_STEP};
use crate::coord::Position;
use crate::util::{sq_distance, sq_segment_distance, triangle_area2};

/// Simplification parameters.
///
/// `tolerance` is in degrees; `highest_quality` skips the radial pre-filter.
#[derive(Clone, Copy, Debug)]
pub struct SimplifyCfg {
    pub tolerance: f64,
    pub highest_quality: bool,
}

impl Default for SimplifyCfg {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            highest_quality: false,
        }
    }
}

impl SimplifyCfg {
    #[inline]
    pub fn new(tolerance: f64, highest_quality: bool) -> Self {
        Self {
            tolerance,
            highest_quality,
        }
    }

    #[inline]
    pub fn line(&self, coordinates: &[Position]) -> Vec<Position> {
        simplify(coordinates, self.tolerance, self.highest_quality)
    }

    #[inline]
    pub fn ring(&self, coordinates: &[Position]) -> Vec<Position> {
        simplify_ring(coordinates, self.tolerance, self.highest_quality)
    }
}

/// Reduce an open coordinate sequence.
///
/// The first and last input positions are always kept and the output is never
/// longer than the input. Inputs with two or fewer positions are returned as-is.
pub fn simplify(coordinates: &[Position], tolerance: f64, highest_quality: bool) -> Vec<Position> {
    if coordinates.len() <= 2 {
        return coordinates.to_vec();
    }
    let sq_tolerance = tolerance * tolerance;
    let points = if highest_quality {
        coordinates.to_vec()
    } else {
        radial_filter(coordinates, sq_tolerance)
    };
    douglas_peucker(&points, sq_tolerance)
}

/// Reduce a closed ring, keeping it a valid ring.
///
/// When the result collapses (fewer than three positions, or three with the
/// closing duplicate) the tolerance shrinks by one percent and the input is
/// simplified again. The result is re-closed if needed. Rings with fewer than
/// four positions cannot be simplified and are returned unchanged.
pub fn simplify_ring(
    coordinates: &[Position],
    tolerance: f64,
    highest_quality: bool,
) -> Vec<Position> {
    if coordinates.len() < 4 {
        return coordinates.to_vec();
    }
    let mut tolerance = tolerance;
    let mut ring = simplify(coordinates, tolerance, highest_quality);
    let mut iterations = 0;
    while !is_valid_ring(&ring) {
        if iterations == RING_RELAX_MAX_ITER {
            ring = simplify(coordinates, 0.0, highest_quality);
            if !is_valid_ring(&ring) {
                return coordinates.to_vec();
            }
            break;
        }
        tolerance -= tolerance * RING_RELAX_STEP;
        ring = simplify(coordinates, tolerance, highest_quality);
        iterations += 1;
    }
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    ring
}

/// Visvalingam–Whyatt: repeatedly drop the interior vertex whose triangle with
/// its current neighbours has the smallest area, while that area is below
/// `area_tolerance` (square degrees). Endpoints are kept.
pub fn simplify_vw(coordinates: &[Position], area_tolerance: f64) -> Vec<Position> {
    let mut points = coordinates.to_vec();
    while points.len() > 2 {
        let (index, area) = (1..points.len() - 1)
            .map(|i| (i, triangle_area2(points[i - 1], points[i], points[i + 1]) / 2.0))
            .fold((0, f64::INFINITY), |best, cand| {
                if cand.1 < best.1 {
                    cand
                } else {
                    best
                }
            });
        if area >= area_tolerance {
            break;
        }
        points.remove(index);
    }
    points
}

#[inline]
fn is_valid_ring(ring: &[Position]) -> bool {
    ring.len() >= 3 && !(ring.len() == 3 && ring[2] == ring[0])
}

/// Keep a point only when it is farther than the tolerance from the previous
/// kept point; the last input point is always kept.
fn radial_filter(points: &[Position], sq_tolerance: f64) -> Vec<Position> {
    let mut prev = points[0];
    let mut kept = vec![prev];
    for &p in &points[1..] {
        if sq_distance(p, prev) > sq_tolerance {
            kept.push(p);
            prev = p;
        }
    }
    let last = points[points.len() - 1];
    if prev != last {
        kept.push(last);
    }
    kept
}

fn douglas_peucker(points: &[Position], sq_tolerance: f64) -> Vec<Position> {
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((first, last)) = stack.pop() {
        let mut max_sq = sq_tolerance;
        let mut index = 0;
        for i in first + 1..last {
            let d = sq_segment_distance(points[i], points[first], points[last]);
            if d > max_sq {
                index = i;
                max_sq = d;
            }
        }
        if max_sq > sq_tolerance {
            keep[index] = true;
            if index - first > 1 {
                stack.push((first, index));
            }
            if last - index > 1 {
                stack.push((index, last));
            }
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}
