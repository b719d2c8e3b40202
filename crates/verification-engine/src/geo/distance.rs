//! Great-circle distance between GPS coordinates (haversine)

use shared_types::{Distance, GpsCoordinate};

pub const EARTH_RADIUS_MILES: f64 = 3959.0;
pub const FEET_PER_MILE: f64 = 5280.0;

/// Haversine distance between two coordinates. Total over real inputs:
/// identical points yield zero, NaN propagates, and nothing is rounded
/// here; callers round for display only.
pub fn distance_between(a: &GpsCoordinate, b: &GpsCoordinate) -> Distance {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2))
    .min(1.0); // rounding can nudge h past 1 at antipodes
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let miles = EARTH_RADIUS_MILES * c;
    Distance {
        feet: miles * FEET_PER_MILE,
        miles,
    }
}

/// Scalar call shape: bare feet between two lat/lng pairs.
pub fn distance_feet(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    distance_between(
        &GpsCoordinate::new(lat1, lng1),
        &GpsCoordinate::new(lat2, lng2),
    )
    .feet
}
