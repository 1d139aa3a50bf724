//! Great-circle distance between two coordinates using the Haversine formula.

use crate::models::facility::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Non-negative distance in kilometers, symmetric in its arguments
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = (from.latitude().to_radians(), from.longitude().to_radians());
    let (lat2, lon2) = (to.latitude().to_radians(), to.longitude().to_radians());

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // rounding can push `h` a hair outside [0, 1] for antipodal points
    let h = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
