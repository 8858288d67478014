//! Geographic point type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point without any validation.
    ///
    /// Out-of-range values are accepted; non-finite values propagate as NaN
    /// through any distance computed from this point.
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a point, rejecting NaN and infinite coordinates.
    pub fn new_checked(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { axis: "lat", value: lat });
        }
        if !lng.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { axis: "lng", value: lng });
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Errors that can occur when building geographic points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// A coordinate was NaN or infinite
    #[error("Invalid {axis}: {value} (must be a finite number)")]
    NonFiniteCoordinate { axis: &'static str, value: f64 },
}
