//! GPS distance and geofence evaluation

pub mod distance;
pub mod geofence;

pub use distance::{distance_between, distance_feet};
pub use geofence::{
    check_geofence, check_geofence_with_radius, format_accuracy, is_accuracy_acceptable,
    DEFAULT_GEOFENCE_RADIUS_FEET, MAX_ACCURACY_FEET, WIDE_GEOFENCE_RADIUS_FEET,
};
