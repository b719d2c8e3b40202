//! Fixed-radius geofence evaluation with sensor-accuracy gating

use shared_types::{GeofenceStatus, GpsCoordinate, GpsLocation};

use crate::geo::distance::distance_between;

/// Radius used by `check_geofence`. The driver flows historically applied
/// `WIDE_GEOFENCE_RADIUS_FEET` inline; which value is canonical is an
/// open product question, so both are named and the radius is a
/// parameter of the single evaluation path.
pub const DEFAULT_GEOFENCE_RADIUS_FEET: f64 = 500.0;

/// 0.5-mile threshold used by the pickup and delivery flows.
pub const WIDE_GEOFENCE_RADIUS_FEET: f64 = 2640.0;

/// Fixes with a 1-sigma radius beyond this are reported as weak signal.
pub const MAX_ACCURACY_FEET: f64 = 200.0;

pub const FEET_PER_METER: f64 = 3.28084;

/// Evaluate the default-radius geofence for one position sample.
pub fn check_geofence(current: &GpsLocation, target: &GpsCoordinate) -> GeofenceStatus {
    check_geofence_with_radius(current, target, DEFAULT_GEOFENCE_RADIUS_FEET)
}

/// Evaluate a geofence of the given radius. `is_inside` is purely a
/// distance comparison; poor accuracy changes the message but never the
/// boolean. Stateless; callers re-invoke on every new position sample.
pub fn check_geofence_with_radius(
    current: &GpsLocation,
    target: &GpsCoordinate,
    radius_feet: f64,
) -> GeofenceStatus {
    let distance = distance_between(&current.coordinate, target);
    let accuracy_feet = current.accuracy_meters * FEET_PER_METER;

    let is_inside = distance.feet <= radius_feet;

    let message = if accuracy_feet > MAX_ACCURACY_FEET {
        "Weak GPS signal. Move to open area.".to_string()
    } else if is_inside {
        "✓ At pickup location - GPS confirmed".to_string()
    } else if distance.miles >= 1.0 {
        format!("Not at pickup - {:.1} miles away", distance.miles)
    } else {
        format!("Not at pickup - {} ft away", distance.feet.round() as i64)
    };

    GeofenceStatus {
        is_inside,
        distance_feet: distance.feet,
        distance_miles: distance.miles,
        accuracy_feet,
        message,
    }
}

/// Standalone accuracy gate, usable to block proceeding even when the
/// distance check passes.
pub fn is_accuracy_acceptable(accuracy_meters: f64) -> bool {
    accuracy_meters * FEET_PER_METER <= MAX_ACCURACY_FEET
}

/// Display helper: "±64ft"
pub fn format_accuracy(accuracy_meters: f64) -> String {
    format!("±{}ft", (accuracy_meters * FEET_PER_METER).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    // At the equator one degree is ~364,832 ft, so 0.001 degrees is
    // ~365 ft and 0.0015 degrees is ~547 ft.
    fn at(latitude: f64, accuracy_meters: f64) -> GpsLocation {
        GpsLocation::new(latitude, 0.0, accuracy_meters)
    }

    const TARGET: GpsCoordinate = GpsCoordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    #[test]
    fn test_inside_fence_confirms() {
        let status = check_geofence(&at(0.001, 10.0), &TARGET);
        assert!(status.is_inside);
        assert!(status.message.contains("confirmed"));
        assert!(status.distance_feet > 350.0 && status.distance_feet < 380.0);
    }

    #[test]
    fn test_outside_fence_reports_feet() {
        let status = check_geofence(&at(0.0015, 10.0), &TARGET);
        assert!(!status.is_inside);
        assert!(status.message.contains("ft away"), "{}", status.message);
    }

    #[test]
    fn test_far_outside_reports_miles() {
        // ~0.03 degrees is ~2 miles
        let status = check_geofence(&at(0.03, 10.0), &TARGET);
        assert!(!status.is_inside);
        assert!(status.message.contains("miles away"), "{}", status.message);
        assert!(status.distance_miles >= 1.0);
    }

    #[test]
    fn test_boundary_at_radius() {
        // 500 ft is ~0.00137050 degrees of latitude
        let just_inside = check_geofence(&at(0.001365, 10.0), &TARGET);
        assert!(just_inside.is_inside, "{} ft", just_inside.distance_feet);

        let just_outside = check_geofence(&at(0.001376, 10.0), &TARGET);
        assert!(!just_outside.is_inside, "{} ft", just_outside.distance_feet);
    }

    #[test]
    fn test_weak_signal_overrides_message_not_boolean() {
        // 100 m accuracy is ~328 ft, past the 200 ft gate
        let status = check_geofence(&at(0.001, 100.0), &TARGET);
        assert!(status.message.contains("Weak GPS signal"));
        // distance still says inside
        assert!(status.is_inside);
    }

    #[test]
    fn test_wide_radius_path() {
        // ~1,459 ft: outside the default fence, inside the wide one
        let location = at(0.004, 10.0);
        assert!(!check_geofence(&location, &TARGET).is_inside);
        assert!(
            check_geofence_with_radius(&location, &TARGET, WIDE_GEOFENCE_RADIUS_FEET).is_inside
        );
    }

    #[test]
    fn test_accuracy_gate() {
        assert!(is_accuracy_acceptable(10.0));
        assert!(is_accuracy_acceptable(60.0)); // ~197 ft
        assert!(!is_accuracy_acceptable(61.0)); // ~200.1 ft
        assert!(!is_accuracy_acceptable(100.0));
    }

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(10.0), "±33ft");
        assert_eq!(format_accuracy(0.0), "±0ft");
    }
}
