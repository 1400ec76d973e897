// Great-circle distance helpers

use crate::models::place::Coordinate;

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance between two coordinates, in meters.
pub fn distance_m(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

/// `"350m"` below a kilometer, `"1.2km"` above, `"Unknown"` without a fix.
pub fn distance_label(user: Option<Coordinate>, place: Coordinate) -> String {
    let Some(user) = user else {
        return "Unknown".to_string();
    };

    let meters = distance_m(user, place);
    if meters < 1000.0 {
        format!("{}m", meters.round() as u64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
