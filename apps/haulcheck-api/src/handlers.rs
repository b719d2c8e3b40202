//! HTTP handlers for HaulCheck API

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use shared_types::{
    CdlValidation, EventLog, GeofenceStatus, ImageHandle, VerificationAction,
};
use verification_engine::{check_geofence_with_radius, image, parse_and_validate_cdl};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Evaluate the geofence for one position sample
pub async fn check_geofence(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GeofenceCheckRequest>,
) -> Result<Json<GeofenceStatus>, ApiError> {
    req.current
        .coordinate
        .validate()
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid current location: {}", e)))?;
    req.target
        .validate()
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid target location: {}", e)))?;

    let status = check_geofence_with_radius(&req.current, &req.target, state.geofence_radius_feet);

    record_event(
        &state,
        &req.subject,
        VerificationAction::GeofenceCheck {
            is_inside: status.is_inside,
            distance_feet: status.distance_feet,
        },
        req.load_id,
    )
    .await;

    tracing::info!(
        "Geofence check for {}: inside={} distance={:.0}ft",
        req.subject,
        status.is_inside,
        status.distance_feet
    );

    Ok(Json(status))
}

/// Validate a CDL number and expiration date together
pub async fn validate_cdl(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CdlValidateRequest>,
) -> Result<Json<CdlValidation>, ApiError> {
    let result = parse_and_validate_cdl(&req.license_number, &req.expiration_date);

    if let (Ok(cdl), Some(subject)) = (&result, &req.subject) {
        record_event(
            &state,
            subject,
            VerificationAction::CdlSubmitted {
                state_code: cdl.state.to_string(),
            },
            None,
        )
        .await;
    }

    // Validation failure is a business outcome, not an HTTP error; the
    // wire record carries the driver-facing message either way.
    Ok(Json(cdl_result_to_wire(result)))
}

/// Run the face-match confidence gate
pub async fn verify_face(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FaceVerifyRequest>,
) -> Result<Json<FaceVerifyResponse>, ApiError> {
    let reference = ImageHandle::new(req.reference_image);
    let live = ImageHandle::new(req.live_image);

    if !image::is_data_url(&reference) || !image::is_data_url(&live) {
        return Err(ApiError::InvalidRequest(
            "Both images must be data URLs".to_string(),
        ));
    }

    let mut progress = Vec::new();
    let result = state
        .face_gate
        .compare_with_progress(&reference, &live, |p| progress.push(p))
        .await?;

    record_event(
        &state,
        &req.subject,
        VerificationAction::FaceComparison {
            confidence: result.confidence,
            verified: result.thresholds.verified,
        },
        req.load_id.clone(),
    )
    .await;

    if result.success {
        record_event(&state, &req.subject, VerificationAction::LoadUnlocked, req.load_id).await;
    }

    tracing::info!(
        "Face verification for {}: confidence={:.1} success={}",
        req.subject,
        result.confidence,
        result.success
    );

    Ok(Json(FaceVerifyResponse { result, progress }))
}

/// Get the verification event chain for a subject
pub async fn get_events(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Result<Json<EventLog>, ApiError> {
    let events = state.events.lock().await;
    let log = events
        .get(&subject)
        .ok_or_else(|| ApiError::SubjectNotFound(subject.clone()))?;

    log.verify()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Event chain corrupted: {}", e)))?;

    Ok(Json(log.clone()))
}

async fn record_event(
    state: &AppState,
    subject: &str,
    action: VerificationAction,
    load_id: Option<String>,
) {
    let mut events = state.events.lock().await;
    events
        .entry(subject.to_string())
        .or_insert_with(|| EventLog::new(subject))
        .append(action, load_id);
}
