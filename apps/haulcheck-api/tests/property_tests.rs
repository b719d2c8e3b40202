//! Property-based tests for haulcheck-api
//!
//! Exercises the validation boundaries the API exposes using proptest.

use proptest::prelude::*;
use shared_types::{GpsCoordinate, GpsLocation};
use verification_engine::{
    check_geofence, classify_confidence, distance_between, validate_cdl_number,
};

// ============================================================
// Coordinate Strategies
// ============================================================

fn valid_coordinate() -> impl Strategy<Value = GpsCoordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(latitude, longitude)| GpsCoordinate {
        latitude,
        longitude,
    })
}

fn out_of_range_coordinate() -> impl Strategy<Value = GpsCoordinate> {
    prop_oneof![
        (90.0001f64..1000.0, -180.0f64..=180.0),
        (-1000.0f64..-90.0001, -180.0f64..=180.0),
        (-90.0f64..=90.0, 180.0001f64..1000.0),
        (-90.0f64..=90.0, -1000.0f64..-180.0001),
    ]
    .prop_map(|(latitude, longitude)| GpsCoordinate {
        latitude,
        longitude,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Coordinate Validation Tests
    // ============================================================

    #[test]
    fn valid_coordinates_pass_validation(coord in valid_coordinate()) {
        prop_assert!(coord.validate().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_fail_validation(coord in out_of_range_coordinate()) {
        prop_assert!(coord.validate().is_err());
    }

    // ============================================================
    // Geofence Tests
    // ============================================================

    #[test]
    fn geofence_status_is_consistent(
        a in valid_coordinate(),
        b in valid_coordinate(),
        accuracy in 0.0f64..200.0,
    ) {
        let current = GpsLocation {
            coordinate: a,
            accuracy_meters: accuracy,
        };
        let status = check_geofence(&current, &b);
        let distance = distance_between(&a, &b);

        // the status reports exactly the distance the calculator gives
        prop_assert_eq!(status.distance_feet, distance.feet);
        prop_assert_eq!(status.is_inside, distance.feet <= 500.0);
        prop_assert!(!status.message.is_empty());
    }

    #[test]
    fn geofence_boolean_ignores_accuracy(
        a in valid_coordinate(),
        b in valid_coordinate(),
    ) {
        let sharp = check_geofence(
            &GpsLocation { coordinate: a, accuracy_meters: 5.0 },
            &b,
        );
        let blurry = check_geofence(
            &GpsLocation { coordinate: a, accuracy_meters: 500.0 },
            &b,
        );
        prop_assert_eq!(sharp.is_inside, blurry.is_inside);
    }

    // ============================================================
    // CDL Validator Tests
    // ============================================================

    #[test]
    fn cdl_validator_is_total(raw in "\\PC{0,60}") {
        // arbitrary input never panics
        let _ = validate_cdl_number(&raw);
    }

    #[test]
    fn cdl_validator_normalizes_accepted_numbers(digits in "[0-9]{7,10}") {
        let raw = format!("ca{}", digits);
        let license = validate_cdl_number(&raw).unwrap();
        prop_assert_eq!(license.number, raw.to_uppercase());
    }

    // ============================================================
    // Confidence Classification Tests
    // ============================================================

    #[test]
    fn confidence_partition_is_exclusive(confidence in 0.0f64..=100.0) {
        let t = classify_confidence(confidence);
        let trues = [t.verified, t.low_confidence, t.failed]
            .iter()
            .filter(|&&b| b)
            .count();
        prop_assert_eq!(trues, 1);
    }
}
