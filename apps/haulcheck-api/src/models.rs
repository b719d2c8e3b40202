//! Request and response models for HaulCheck API

use serde::{Deserialize, Serialize};
use shared_types::{
    CdlValidation, FaceComparisonProgress, FaceVerificationResult, GpsCoordinate, GpsLocation,
};
use verification_engine::cdl::{CdlValidationError, ValidatedCdl};

#[derive(Debug, Deserialize)]
pub struct GeofenceCheckRequest {
    /// Driver identifier the event is recorded under
    pub subject: String,
    pub load_id: Option<String>,
    pub current: GpsLocation,
    pub target: GpsCoordinate,
}

#[derive(Debug, Deserialize)]
pub struct CdlValidateRequest {
    pub subject: Option<String>,
    pub license_number: String,
    pub expiration_date: String,
}

#[derive(Debug, Deserialize)]
pub struct FaceVerifyRequest {
    pub subject: String,
    pub load_id: Option<String>,
    /// Onboarding photo, as a data URL
    pub reference_image: String,
    /// Live capture, as a data URL
    pub live_image: String,
}

#[derive(Debug, Serialize)]
pub struct FaceVerifyResponse {
    pub result: FaceVerificationResult,
    /// Stage snapshots collected during the comparison, in emission order
    pub progress: Vec<FaceComparisonProgress>,
}

/// Convert the engine's typed result into the wire record.
pub fn cdl_result_to_wire(result: Result<ValidatedCdl, CdlValidationError>) -> CdlValidation {
    match result {
        Ok(cdl) => CdlValidation::valid(cdl.number, cdl.state.to_string(), cdl.expiration),
        Err(e) => CdlValidation::invalid(e.to_string()),
    }
}
