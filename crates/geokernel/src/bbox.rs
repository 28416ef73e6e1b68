//! Axis-aligned bounding boxes in latitude/longitude.
//!
//! A box spans the antimeridian when its east edge is numerically west of its
//! west edge (`north_east.longitude < south_west.longitude`). Only the
//! antimeridian-aware constructor produces such boxes from positions.

use crate::coord::{wrap, Position};

/// Latitude/longitude extent with optional elevation range.
///
/// Invariants:
/// - `north_east.latitude >= south_west.latitude`.
/// - `spans_antimeridian() ⇔ north_east.longitude < south_west.longitude`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub south_west: Position,
    pub north_east: Position,
    pub min_elevation: Option<f64>,
    pub max_elevation: Option<f64>,
}

impl BoundingBox {
    #[inline]
    pub fn new(south_west: Position, north_east: Position) -> Self {
        Self {
            south_west,
            north_east,
            min_elevation: None,
            max_elevation: None,
        }
    }

    /// Plain min/max extent; never spans the antimeridian. `None` when empty.
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        let first = positions.first()?;
        let (mut south, mut north) = (first.latitude, first.latitude);
        let (mut west, mut east) = (first.longitude, first.longitude);
        for p in &positions[1..] {
            south = south.min(p.latitude);
            north = north.max(p.latitude);
            west = west.min(p.longitude);
            east = east.max(p.longitude);
        }
        let (min_elevation, max_elevation) = elevation_range(positions);
        Some(Self {
            south_west: Position::new(south, west),
            north_east: Position::new(north, east),
            min_elevation,
            max_elevation,
        })
    }

    /// Extent that may wrap across ±180° when that gives the narrower box.
    ///
    /// With `allow_spanning_antimeridian == false` this is `from_positions`.
    pub fn from_positions_spanning(
        positions: &[Position],
        allow_spanning_antimeridian: bool,
    ) -> Option<Self> {
        if !allow_spanning_antimeridian {
            return Self::from_positions(positions);
        }
        let mut sorted = positions.to_vec();
        sorted.sort_by(|a, b| {
            a.longitude
                .partial_cmp(&b.longitude)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let first = *sorted.first()?;
        let corner = Position::new(first.latitude, first.longitude);
        let mut bbox = Self::new(corner, corner);
        for p in &sorted[1..] {
            bbox.append(*p);
        }
        let (min_elevation, max_elevation) = elevation_range(positions);
        bbox.min_elevation = min_elevation;
        bbox.max_elevation = max_elevation;
        Some(bbox)
    }

    #[inline]
    pub fn spans_antimeridian(&self) -> bool {
        self.north_east.longitude < self.south_west.longitude
    }

    /// Whether `longitude` already lies between the west and east edges.
    fn covers_longitude(&self, longitude: f64) -> bool {
        let (west, east) = (self.south_west.longitude, self.north_east.longitude);
        if self.spans_antimeridian() {
            longitude >= west || longitude <= east
        } else {
            longitude >= west && longitude <= east
        }
    }

    /// Grow the box to include `p`, moving whichever longitude edge needs the
    /// smaller angular step.
    fn append(&mut self, p: Position) {
        self.south_west.latitude = self.south_west.latitude.min(p.latitude);
        self.north_east.latitude = self.north_east.latitude.max(p.latitude);
        if self.covers_longitude(p.longitude) {
            return;
        }
        let east_gap = wrap(p.longitude - self.north_east.longitude, 0.0, 360.0);
        let west_gap = wrap(self.south_west.longitude - p.longitude, 0.0, 360.0);
        if east_gap <= west_gap {
            self.north_east.longitude = p.longitude;
        } else {
            self.south_west.longitude = p.longitude;
        }
    }

    /// Point-in-box test.
    ///
    /// With `ignore_boundary` the edges themselves are outside. For a box that
    /// spans the antimeridian the longitude test accepts either side of the cut.
    pub fn contains(&self, p: Position, ignore_boundary: bool) -> bool {
        let (south, west) = (self.south_west.latitude, self.south_west.longitude);
        let (north, east) = (self.north_east.latitude, self.north_east.longitude);
        let (lat, lon) = (p.latitude, p.longitude);
        if self.spans_antimeridian() {
            if ignore_boundary {
                south < lat && lat < north && (lon > west || lon < east)
            } else {
                south <= lat && lat <= north && (lon >= west || lon <= east)
            }
        } else if ignore_boundary {
            south < lat && lat < north && west < lon && lon < east
        } else {
            south <= lat && lat <= north && west <= lon && lon <= east
        }
    }

    /// Center of the box; for spanning boxes the longitude is shifted by 180°
    /// and wrapped into [-180, 180).
    pub fn center(&self) -> Position {
        let lat = (self.south_west.latitude + self.north_east.latitude) / 2.0;
        let lon = (self.south_west.longitude + self.north_east.longitude) / 2.0;
        if self.spans_antimeridian() {
            Position::new(lat, wrap(lon + 180.0, -180.0, 180.0))
        } else {
            Position::new(lat, lon)
        }
    }
}

fn elevation_range(positions: &[Position]) -> (Option<f64>, Option<f64>) {
    positions
        .iter()
        .filter_map(|p| p.altitude)
        .fold((None, None), |(lo, hi): (Option<f64>, Option<f64>), z| {
            (
                Some(lo.map_or(z, |v| v.min(z))),
                Some(hi.map_or(z, |v| v.max(z))),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> Position {
        Position::new(lat, lon)
    }

    #[test]
    fn simple_extent() {
        let b = BoundingBox::from_positions(&[p(1.0, 2.0), p(-3.0, 5.0), p(4.0, -1.0)]).unwrap();
        assert_eq!(b.south_west, p(-3.0, -1.0));
        assert_eq!(b.north_east, p(4.0, 5.0));
        assert!(!b.spans_antimeridian());
        assert_eq!(b.min_elevation, None);
    }

    #[test]
    fn empty_input_has_no_box() {
        assert!(BoundingBox::from_positions(&[]).is_none());
        assert!(BoundingBox::from_positions_spanning(&[], true).is_none());
    }

    #[test]
    fn spanning_box_over_fiji() {
        let b = BoundingBox::from_positions_spanning(&[p(-20.0, 177.0), p(-16.0, -178.0)], true)
            .unwrap();
        assert!(b.spans_antimeridian());
        assert_eq!(b.south_west, p(-20.0, 177.0));
        assert_eq!(b.north_east, p(-16.0, -178.0));
    }

    #[test]
    fn spanning_disallowed_gives_wide_box() {
        let b = BoundingBox::from_positions_spanning(&[p(-20.0, 177.0), p(-16.0, -178.0)], false)
            .unwrap();
        assert!(!b.spans_antimeridian());
        assert_eq!(b.south_west, p(-20.0, -178.0));
        assert_eq!(b.north_east, p(-16.0, 177.0));
    }

    #[test]
    fn spanning_builder_keeps_narrow_box_when_not_needed() {
        let b = BoundingBox::from_positions_spanning(&[p(0.0, 10.0), p(1.0, 20.0), p(2.0, 15.0)], true)
            .unwrap();
        assert!(!b.spans_antimeridian());
        assert_eq!(b.south_west, p(0.0, 10.0));
        assert_eq!(b.north_east, p(2.0, 20.0));
    }

    #[test]
    fn spanning_builder_absorbs_covered_points() {
        let b = BoundingBox::from_positions_spanning(
            &[p(0.0, 170.0), p(1.0, -170.0), p(2.0, 179.0), p(-1.0, -175.0)],
            true,
        )
        .unwrap();
        assert!(b.spans_antimeridian());
        assert_eq!(b.south_west, p(-1.0, 170.0));
        assert_eq!(b.north_east, p(2.0, -170.0));
    }

    #[test]
    fn equal_gaps_extend_east() {
        // From 0° both ways round to 180° are 180° long.
        let b = BoundingBox::from_positions_spanning(&[p(0.0, 180.0), p(1.0, 0.0)], true).unwrap();
        assert!(!b.spans_antimeridian());
        assert_eq!(b.south_west, p(0.0, 0.0));
        assert_eq!(b.north_east, p(1.0, 180.0));

        let mut s = BoundingBox::new(p(0.0, 170.0), p(0.0, -170.0));
        s.append(p(0.0, 0.0));
        assert_eq!(s.south_west.longitude, 170.0);
        assert_eq!(s.north_east.longitude, 0.0);
        assert!(s.spans_antimeridian());
    }

    #[test]
    fn append_flips_to_spanning_and_stays_there() {
        let mut b = BoundingBox::new(p(0.0, -170.0), p(0.0, -170.0));
        b.append(p(0.0, 170.0));
        assert!(b.spans_antimeridian());
        assert_eq!((b.south_west.longitude, b.north_east.longitude), (170.0, -170.0));

        // Covered longitudes leave the edges alone.
        b.append(p(2.0, 179.0));
        assert_eq!((b.south_west.longitude, b.north_east.longitude), (170.0, -170.0));
        assert_eq!(b.north_east.latitude, 2.0);

        // Growing westward keeps the wrap.
        b.append(p(0.0, 100.0));
        assert!(b.spans_antimeridian());
        assert_eq!((b.south_west.longitude, b.north_east.longitude), (100.0, -170.0));
    }

    #[test]
    fn elevation_is_tracked() {
        let pts = [p(0.0, 0.0).with_altitude(12.0), p(1.0, 1.0), p(2.0, 2.0).with_altitude(-3.0)];
        let b = BoundingBox::from_positions(&pts).unwrap();
        assert_eq!(b.min_elevation, Some(-3.0));
        assert_eq!(b.max_elevation, Some(12.0));
        let s = BoundingBox::from_positions_spanning(&pts, true).unwrap();
        assert_eq!(s.min_elevation, Some(-3.0));
        assert_eq!(s.max_elevation, Some(12.0));
    }

    #[test]
    fn contains_respects_boundary_flag() {
        let b = BoundingBox::new(p(0.0, 0.0), p(1.0, 1.0));
        assert!(b.contains(p(0.5, 0.5), true));
        assert!(!b.contains(p(1.0, 0.5), true));
        assert!(b.contains(p(1.0, 0.5), false));
        assert!(!b.contains(p(1.5, 0.5), false));
    }

    #[test]
    fn contains_across_antimeridian() {
        let b = BoundingBox::new(p(-20.0, 177.0), p(-16.0, -178.0));
        assert!(b.contains(p(-18.0, 179.0), true));
        assert!(b.contains(p(-18.0, -179.0), true));
        assert!(!b.contains(p(-18.0, 0.0), false));
        assert!(!b.contains(p(-18.0, 177.0), true));
        assert!(b.contains(p(-18.0, 177.0), false));
        assert!(!b.contains(p(-10.0, 179.0), false));
    }

    #[test]
    fn center_plain_and_spanning() {
        let b = BoundingBox::new(p(0.0, 0.0), p(2.0, 4.0));
        assert_eq!(b.center(), p(1.0, 2.0));
        let s = BoundingBox::new(p(-20.0, 177.0), p(-16.0, -178.0));
        assert_eq!(s.center(), p(-18.0, 179.5));
    }
}
