//! Planar distance between coordinates.
//!
//! Latitude and longitude are treated as Cartesian axes. There is no
//! correction for the curvature of the Earth, so results are only
//! comparable with each other, not convertible to meters.

use sensorhub_types::Coordinate;

/// Euclidean distance `sqrt(Δlat² + Δlng²)` over raw degrees.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = b.latitude - a.latitude;
    let d_lng = b.longitude - a.longitude;
    d_lat.hypot(d_lng)
}
