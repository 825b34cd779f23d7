//! Geographic coordinate as a raw latitude/longitude pair.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient::null_as_default;

/// A latitude/longitude pair.
///
/// No range validation is performed: out-of-range and non-finite values are
/// stored as given. Missing or `null` fields decode as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(default)]
pub struct Coordinate {
    /// Latitude in degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
