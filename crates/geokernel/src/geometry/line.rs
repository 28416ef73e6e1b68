//! Open paths: closest-point projection and the operations built on it.
//!
//! Distances along a line are great-circle arc lengths in meters; the
//! perpendicular foot on each segment is found with the planar segment
//! intersection from `crate::intersect`.

use crate::coord::{destination, direction, distance, Position};
use crate::intersect::intersection;
use crate::simplify::simplify;

/// A position on a line together with where it sits.
///
/// - `index`: the vertex preceding the segment the position lies on (or the
///   vertex itself when the position is one).
/// - `distance`: meters from the line's start along the line (the single-point
///   line is the exception: there it is the distance to the query).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedCoordinate {
    pub coordinate: Position,
    pub index: usize,
    pub distance: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub coordinates: Vec<Position>,
}

impl LineString {
    #[inline]
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    /// Total arc length in meters.
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }

    /// Point of the line closest to `query`.
    ///
    /// Each segment contributes three candidates: both endpoints and the foot
    /// of the perpendicular through `query`. The foot comes from intersecting
    /// the segment with a chord through `query` at right angles to the
    /// segment's initial bearing, long enough to reach either endpoint. Ties
    /// keep the earlier candidate, so a query equal to a vertex returns that
    /// vertex as stored.
    pub fn closest_coordinate(&self, query: Position) -> Option<IndexedCoordinate> {
        let first = *self.coordinates.first()?;
        if self.coordinates.len() == 1 {
            return Some(IndexedCoordinate {
                coordinate: first,
                index: 0,
                distance: distance(query, first),
            });
        }

        let mut best: Option<(IndexedCoordinate, f64)> = None;
        let mut consider = |candidate: IndexedCoordinate, to_query: f64| {
            if best.map_or(true, |(_, d)| to_query < d) {
                best = Some((candidate, to_query));
            }
        };

        let mut traveled = 0.0;
        for (index, pair) in self.coordinates.windows(2).enumerate() {
            let (s0, s1) = (pair[0], pair[1]);
            let d0 = distance(query, s0);
            let d1 = distance(query, s1);
            let reach = d0.max(d1);
            let heading = direction(s0, s1);
            let chord = (
                destination(query, reach, heading + 90.0),
                destination(query, reach, heading - 90.0),
            );
            let segment_length = distance(s0, s1);

            consider(
                IndexedCoordinate {
                    coordinate: s0,
                    index,
                    distance: traveled,
                },
                d0,
            );
            consider(
                IndexedCoordinate {
                    coordinate: s1,
                    index: index + 1,
                    distance: traveled + segment_length,
                },
                d1,
            );
            if let Some(foot) = intersection(chord, (s0, s1)) {
                consider(
                    IndexedCoordinate {
                        coordinate: foot,
                        index,
                        distance: traveled + distance(s0, foot),
                    },
                    distance(query, foot),
                );
            }
            traveled += segment_length;
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Portion of the line between the projections of `start` and `end`.
    ///
    /// Missing ends default to the line's first and last vertex. The two ends
    /// are ordered along the line, so swapping them gives the same path.
    pub fn sliced(&self, start: Option<Position>, end: Option<Position>) -> Option<LineString> {
        let first = *self.coordinates.first()?;
        let last_index = self.coordinates.len() - 1;
        let start = start
            .and_then(|p| self.closest_coordinate(p))
            .unwrap_or(IndexedCoordinate {
                coordinate: first,
                index: 0,
                distance: 0.0,
            });
        let end = end
            .and_then(|p| self.closest_coordinate(p))
            .unwrap_or(IndexedCoordinate {
                coordinate: self.coordinates[last_index],
                index: last_index,
                distance: 0.0,
            });
        let (head, tail) = if start.index <= end.index {
            (start, end)
        } else {
            (end, start)
        };

        let mut coords = vec![head.coordinate];
        if head.index != tail.index {
            let between = &self.coordinates[head.index + 1..=tail.index];
            // Only the vertex right after the head can repeat it.
            let skip = usize::from(between.first() == Some(&head.coordinate));
            coords.extend_from_slice(&between[skip..]);
        }
        if coords.last() != Some(&tail.coordinate) {
            coords.push(tail.coordinate);
        }
        Some(LineString::new(coords))
    }

    /// Arc length between the projections of `from` and `to` (whole line when
    /// both are `None`).
    pub fn distance(&self, from: Option<Position>, to: Option<Position>) -> Option<f64> {
        self.sliced(from, to).map(|slice| slice.length())
    }

    /// Sub-path of `meters` arc length starting at the projection of `from`.
    ///
    /// Positive `meters` walk towards the end of the line, negative towards
    /// its start. The walk stops early at the line's end; otherwise the last
    /// vertex is interpolated inside the final segment. `meters == 0` yields
    /// `None`.
    pub fn trimmed(&self, from: Position, meters: f64) -> Option<LineString> {
        if meters == 0.0 {
            return None;
        }
        let start = self.closest_coordinate(from)?;
        let budget = meters.abs();
        let path: Vec<Position> = if meters > 0.0 {
            self.coordinates[start.index + 1..].to_vec()
        } else {
            self.coordinates[..=start.index].iter().rev().copied().collect()
        };

        let mut vertices = vec![start.coordinate];
        let mut walked = 0.0;
        for vertex in path {
            let last = vertices[vertices.len() - 1];
            if vertex == last {
                continue;
            }
            let step = distance(last, vertex);
            if walked + step <= budget {
                vertices.push(vertex);
                walked += step;
            } else {
                let remaining = budget - walked;
                vertices.push(destination(last, remaining, direction(last, vertex)));
                break;
            }
        }
        Some(LineString::new(vertices))
    }

    /// Position `meters` along the line, with its segment index.
    ///
    /// Negative distances clamp to the start; distances past the end clamp to
    /// the last vertex (reporting the full length).
    pub fn indexed_coordinate_from_start(&self, meters: f64) -> Option<IndexedCoordinate> {
        let first = *self.coordinates.first()?;
        if meters < 0.0 {
            return Some(IndexedCoordinate {
                coordinate: first,
                index: 0,
                distance: 0.0,
            });
        }
        let mut traveled = 0.0;
        for (index, pair) in self.coordinates.windows(2).enumerate() {
            if meters == traveled {
                return Some(IndexedCoordinate {
                    coordinate: pair[0],
                    index,
                    distance: meters,
                });
            }
            let segment_length = distance(pair[0], pair[1]);
            if meters < traveled + segment_length {
                let heading = direction(pair[0], pair[1]);
                return Some(IndexedCoordinate {
                    coordinate: destination(pair[0], meters - traveled, heading),
                    index,
                    distance: meters,
                });
            }
            traveled += segment_length;
        }
        let last_index = self.coordinates.len() - 1;
        Some(IndexedCoordinate {
            coordinate: self.coordinates[last_index],
            index: last_index,
            distance: traveled,
        })
    }

    #[inline]
    pub fn coordinate_from_start(&self, meters: f64) -> Option<Position> {
        self.indexed_coordinate_from_start(meters)
            .map(|ic| ic.coordinate)
    }

    /// Every point where a segment of `self` meets a segment of `other`.
    pub fn intersections(&self, other: &LineString) -> Vec<Position> {
        let mut hits = Vec::new();
        for a in self.coordinates.windows(2) {
            for b in other.coordinates.windows(2) {
                if let Some(p) = intersection((a[0], a[1]), (b[0], b[1])) {
                    hits.push(p);
                }
            }
        }
        hits
    }

    /// Simplified copy; see `crate::simplify::simplify`.
    pub fn simplified(&self, tolerance: f64, highest_quality: bool) -> LineString {
        LineString::new(simplify(&self.coordinates, tolerance, highest_quality))
    }

    #[inline]
    pub fn simplify(&mut self, tolerance: f64, highest_quality: bool) {
        *self = self.simplified(tolerance, highest_quality);
    }
}
