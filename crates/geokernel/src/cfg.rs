//! Numeric constants shared across the kernel.
//!
//! Policy
//! - Fixed compile-time values; nothing here is configurable at runtime.
//! - Distance functions and ring area deliberately use different radii.

/// Mean Earth radius (meters) used by haversine distance and destination.
pub const EARTH_MEAN_RADIUS: f64 = 6_373_000.0;

/// Equatorial radius (meters) used only by the spherical-excess ring area.
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Fraction of the tolerance removed per ring-simplification retry.
pub(crate) const RING_RELAX_STEP: f64 = 0.01;

/// Upper bound on ring-simplification retries before falling back to a
/// zero-tolerance pass.
pub(crate) const RING_RELAX_MAX_ITER: usize = 10_000;
