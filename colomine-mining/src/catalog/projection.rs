//! Equirectangular projection of latitude/longitude to kilometres.

use colomine_core::constants::EARTH_RADIUS_KM;
use colomine_core::types::Point;

/// Plain equirectangular projection: `(x, y)` in kilometres, without the
/// latitude correction.
#[inline]
pub fn equirectangular(lat_deg: f64, lon_deg: f64) -> (f64, f64) {
    (
        EARTH_RADIUS_KM * lon_deg.to_radians(),
        EARTH_RADIUS_KM * lat_deg.to_radians(),
    )
}

/// Scale every x by `cos(mean latitude)` so east-west distances match
/// north-south ones around the data's centre. Latitude is recovered from
/// the projected y. Returns the factor applied (1.0 for no points).
pub fn correct_longitude_scale(points: &mut [Point]) -> f64 {
    if points.is_empty() {
        return 1.0;
    }
    let mean_lat = points.iter().map(|p| p.y / EARTH_RADIUS_KM).sum::<f64>() / points.len() as f64;
    let factor = mean_lat.cos();
    for p in points.iter_mut() {
        p.x *= factor;
    }
    factor
}
