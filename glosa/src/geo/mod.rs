//! Geographic distance module
//!
//! Provides the great-circle (haversine) distance between a vehicle and a
//! junction. The result feeds the advisory engine as meters.

mod types;

pub use types::{GeoError, GeoPoint, EARTH_RADIUS_M};

/// Computes the haversine great-circle distance between two points.
///
/// # Arguments
///
/// * `a` - First point in decimal degrees
/// * `b` - Second point in decimal degrees
///
/// # Returns
///
/// Distance in meters. Non-finite input yields `NaN`, so callers should
/// build points with [`GeoPoint::new_checked`] when the input is untrusted.
#[inline]
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    // Rounding can leave h just outside [0, 1] near antipodes
    let h = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests;
