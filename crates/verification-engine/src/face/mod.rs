//! Face-match confidence gate
//!
//! Wraps a pluggable comparison backend and classifies its confidence
//! score. Verification passing is a pure threshold decision; how the
//! score is produced is the backend's business.

pub mod backend;
pub mod gate;

pub use backend::{FaceBackend, MockFaceBackend};
pub use gate::{FaceMatchGate, FaceVerificationError};

use shared_types::{ConfidenceLevel, ConfidenceThresholds};

pub const CONFIDENCE_THRESHOLD_VERIFIED: f64 = 95.0;
pub const CONFIDENCE_THRESHOLD_LOW: f64 = 80.0;

/// Partition a confidence score. Exactly one flag comes back true for
/// any score.
pub fn classify_confidence(confidence: f64) -> ConfidenceThresholds {
    let verified = confidence >= CONFIDENCE_THRESHOLD_VERIFIED;
    let low_confidence =
        confidence >= CONFIDENCE_THRESHOLD_LOW && confidence < CONFIDENCE_THRESHOLD_VERIFIED;
    let failed = confidence < CONFIDENCE_THRESHOLD_LOW;

    ConfidenceThresholds {
        verified,
        low_confidence,
        failed,
    }
}

/// Presentation severity for a confidence score. Carries no information
/// beyond the thresholds.
pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= CONFIDENCE_THRESHOLD_VERIFIED {
        ConfidenceLevel::Ok
    } else if confidence >= CONFIDENCE_THRESHOLD_LOW {
        ConfidenceLevel::Warn
    } else {
        ConfidenceLevel::Fail
    }
}
