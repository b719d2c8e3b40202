use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Range-check the coordinate. Positioning providers occasionally hand
    /// back garbage; callers validate before feeding the geofence.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} out of range (-90 to 90)")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} out of range (-180 to 180)")]
    LongitudeOutOfRange(f64),
}

/// A positioning fix: where the sensor thinks the device is, and how sure
/// it is (1-sigma radius in meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsLocation {
    pub coordinate: GpsCoordinate,
    pub accuracy_meters: f64,
}

impl GpsLocation {
    pub fn new(latitude: f64, longitude: f64, accuracy_meters: f64) -> Self {
        Self {
            coordinate: GpsCoordinate::new(latitude, longitude),
            accuracy_meters,
        }
    }
}

/// Great-circle distance in both display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub feet: f64,
    pub miles: f64,
}

/// Outcome of one geofence evaluation. Produced fresh on every position
/// sample; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceStatus {
    pub is_inside: bool,
    pub distance_feet: f64,
    pub distance_miles: f64,
    pub accuracy_feet: f64,
    pub message: String,
}

/// Wire shape for CDL validation responses. The engine works with typed
/// `Result`s internally and converts at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdlValidation {
    pub is_valid: bool,
    pub error: Option<String>,
    pub license_number: Option<String>,
    pub state_code: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

impl CdlValidation {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            license_number: None,
            state_code: None,
            expiration_date: None,
        }
    }

    pub fn valid_license(license_number: impl Into<String>, state_code: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            error: None,
            license_number: Some(license_number.into()),
            state_code: Some(state_code.into()),
            expiration_date: None,
        }
    }

    pub fn valid_date(expiration_date: NaiveDate) -> Self {
        Self {
            is_valid: true,
            error: None,
            license_number: None,
            state_code: None,
            expiration_date: Some(expiration_date),
        }
    }

    pub fn valid(
        license_number: impl Into<String>,
        state_code: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            is_valid: true,
            error: None,
            license_number: Some(license_number.into()),
            state_code: Some(state_code.into()),
            expiration_date: Some(expiration_date),
        }
    }
}

/// Stages a face comparison passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStage {
    Uploading,
    Detecting,
    Comparing,
    Complete,
}

/// One progress snapshot emitted during a face comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceComparisonProgress {
    pub stage: ComparisonStage,
    pub progress: u8,
    pub message: String,
}

/// Threshold classification of a confidence score. Exactly one flag is
/// true for any score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub verified: bool,
    pub low_confidence: bool,
    pub failed: bool,
}

/// Final outcome of a face comparison. `success` mirrors
/// `thresholds.verified`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceVerificationResult {
    pub success: bool,
    pub confidence: f64,
    pub message: String,
    pub thresholds: ConfidenceThresholds,
}

/// Presentation severity for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Ok,
    Warn,
    Fail,
}

/// Opaque reference to a captured image, carried as a data URL. The
/// engine passes these through to the comparison backend without
/// inspecting pixel data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub data_url: String,
}

impl ImageHandle {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }
}
