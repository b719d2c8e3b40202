//! Error types for HaulCheck API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use verification_engine::FaceVerificationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No events recorded for subject: {0}")]
    SubjectNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    FaceVerification(#[from] FaceVerificationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::SubjectNotFound(subject) => (
                StatusCode::NOT_FOUND,
                format!("No events recorded for subject: {}", subject),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // A backend failure is an infrastructure problem; a resolved
            // low-confidence result never reaches this path.
            ApiError::FaceVerification(e) => {
                tracing::error!("Face verification transport error: {:#}", e);
                let status = match e {
                    FaceVerificationError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    FaceVerificationError::Network(_) => StatusCode::BAD_GATEWAY,
                    FaceVerificationError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
