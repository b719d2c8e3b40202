//! Driver verification engine
//!
//! The algorithms that gate load unlocking:
//! - `geo`: great-circle distance and geofence evaluation
//! - `cdl`: commercial driver's-license number and expiration validation
//! - `face`: face-match confidence gate over a pluggable comparison backend
//! - `image`: capture intake checks and data-URL decoding
//!
//! Everything here is a pure function over its inputs except the face
//! gate, which awaits one backend round trip per call. Nothing logs,
//! retries, or caches; callers re-invoke on every new sample.

pub mod cdl;
pub mod face;
pub mod geo;
pub mod image;

pub use cdl::{
    parse_and_validate_cdl, validate_cdl_number, validate_expiration_date, CdlLicense,
    CdlValidationError, StateCode, ValidatedCdl,
};
pub use face::{
    classify_confidence, confidence_level, FaceBackend, FaceMatchGate, FaceVerificationError,
    MockFaceBackend,
};
pub use geo::{
    check_geofence, check_geofence_with_radius, distance_between, distance_feet,
    is_accuracy_acceptable,
};
