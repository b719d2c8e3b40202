pub mod events;
pub mod types;

pub use events::{EventLog, VerificationAction, VerificationEvent};
pub use types::{
    CdlValidation, ComparisonStage, ConfidenceLevel, ConfidenceThresholds, CoordinateError,
    Distance, FaceComparisonProgress, FaceVerificationResult, GeofenceStatus, GpsCoordinate,
    GpsLocation, ImageHandle,
};
