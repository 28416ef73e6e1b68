//! Spherical coordinate math.
//!
//! - `Position`: (latitude, longitude, altitude?) in degrees, exact equality.
//! - `distance`: haversine great-circle distance in meters.
//! - `direction`: initial bearing in degrees, range (-180, 180].
//! - `destination`: point reached from an origin along a bearing.
//!
//! All functions work on a sphere of radius `cfg::EARTH_MEAN_RADIUS`.

use std::f64::consts::PI;

use crate::cfg::EARTH_MEAN_RADIUS;

/// Geographic position in degrees.
///
/// Invariants:
/// - Equality is exact field equality (no epsilon), altitude included.
/// - Longitude is not normalized on construction; see `normalized`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

impl Position {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    #[inline]
    pub const fn with_altitude(self, altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..self
        }
    }

    /// Same position with longitude wrapped into [-180, 180).
    #[inline]
    pub fn normalized(&self) -> Self {
        Self {
            longitude: wrap(self.longitude, -180.0, 180.0),
            ..*self
        }
    }
}

impl From<(f64, f64)> for Position {
    /// `(latitude, longitude)`.
    #[inline]
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Wrap `value` into `[min, max)` with a double `fmod`.
#[inline]
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let d = max - min;
    ((value - min) % d + d) % d + min
}

/// Central angle (radians) between two positions, haversine form.
///
/// The products are grouped so that swapping `a` and `b` yields bit-identical
/// results.
fn central_angle(a: Position, b: Position) -> f64 {
    let lat1 = to_radians(a.latitude);
    let lat2 = to_radians(b.latitude);
    let half_dlat = ((lat2 - lat1).abs() / 2.0).sin();
    let half_dlon = ((to_radians(b.longitude) - to_radians(a.longitude)).abs() / 2.0).sin();
    let h = half_dlat * half_dlat + half_dlon * half_dlon * (lat1.cos() * lat2.cos());
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in meters.
#[inline]
pub fn distance(a: Position, b: Position) -> f64 {
    central_angle(a, b) * EARTH_MEAN_RADIUS
}

/// Initial bearing from `from` towards `to`, degrees in (-180, 180].
pub fn direction(from: Position, to: Position) -> f64 {
    let lat1 = to_radians(from.latitude);
    let lat2 = to_radians(to.latitude);
    let dlon = to_radians(to.longitude) - to_radians(from.longitude);
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = to_degrees(y.atan2(x));
    if bearing <= -180.0 {
        bearing + 360.0
    } else {
        bearing
    }
}

/// Position reached by travelling `meters` from `origin` along `bearing` degrees.
///
/// Longitude of the result is not wrapped; altitude is dropped.
pub fn destination(origin: Position, meters: f64, bearing: f64) -> Position {
    let delta = meters / EARTH_MEAN_RADIUS;
    let theta = to_radians(bearing);
    let lat1 = to_radians(origin.latitude);
    let lon1 = to_radians(origin.longitude);
    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
    Position::new(to_degrees(lat2), to_degrees(lon2))
}

/// Great-circle midpoint: half the distance along the initial bearing.
pub fn mid(a: Position, b: Position) -> Position {
    destination(a, distance(a, b) / 2.0, direction(a, b))
}
