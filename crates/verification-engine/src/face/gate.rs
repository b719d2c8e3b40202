//! The confidence gate around one face comparison call

use shared_types::{
    ComparisonStage, FaceComparisonProgress, FaceVerificationResult, ImageHandle,
};
use thiserror::Error;

use crate::face::backend::FaceBackend;
use crate::face::classify_confidence;

/// Transport/processing failure from the comparison backend. A resolved
/// low-confidence score never comes through here; that is a legitimate
/// business outcome, not an infrastructure problem.
#[derive(Debug, Error)]
pub enum FaceVerificationError {
    #[error("Verification timed out. Please check your connection and try again.")]
    Timeout(#[source] anyhow::Error),

    #[error("Network error. Please check your internet connection.")]
    Network(#[source] anyhow::Error),

    #[error("Face verification failed. Please try again.")]
    Backend(#[source] anyhow::Error),
}

impl FaceVerificationError {
    /// Classify a backend failure by what it reports about itself.
    pub fn classify(err: anyhow::Error) -> Self {
        let text = err.to_string().to_lowercase();
        if text.contains("timeout") {
            Self::Timeout(err)
        } else if text.contains("network") {
            Self::Network(err)
        } else {
            Self::Backend(err)
        }
    }
}

/// Wraps a comparison backend with staged progress reporting and the
/// threshold classification. One invocation, one backend round trip; no
/// retry, no dedup of concurrent calls, no cancellation. Callers wanting
/// a timeout race the call against their own timer.
pub struct FaceMatchGate<B: FaceBackend> {
    backend: B,
}

impl<B: FaceBackend> FaceMatchGate<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Compare without observing progress.
    pub async fn compare(
        &self,
        reference: &ImageHandle,
        live: &ImageHandle,
    ) -> Result<FaceVerificationResult, FaceVerificationError> {
        self.compare_with_progress(reference, live, |_| {}).await
    }

    /// Compare, emitting exactly four ordered snapshots: uploading(15),
    /// detecting(45), comparing(75), complete(100). Progress is strictly
    /// increasing and terminates at 100; timing between stages is not
    /// part of the contract.
    pub async fn compare_with_progress(
        &self,
        reference: &ImageHandle,
        live: &ImageHandle,
        mut on_progress: impl FnMut(FaceComparisonProgress),
    ) -> Result<FaceVerificationResult, FaceVerificationError> {
        on_progress(FaceComparisonProgress {
            stage: ComparisonStage::Uploading,
            progress: 15,
            message: "Uploading images...".to_string(),
        });

        on_progress(FaceComparisonProgress {
            stage: ComparisonStage::Detecting,
            progress: 45,
            message: "Detecting faces...".to_string(),
        });

        on_progress(FaceComparisonProgress {
            stage: ComparisonStage::Comparing,
            progress: 75,
            message: "Comparing faces...".to_string(),
        });

        let confidence = self
            .backend
            .compare(reference, live)
            .await
            .map_err(FaceVerificationError::classify)?;

        on_progress(FaceComparisonProgress {
            stage: ComparisonStage::Complete,
            progress: 100,
            message: format!("Match confidence: {:.1}%", confidence),
        });

        Ok(build_result(confidence))
    }
}

fn build_result(confidence: f64) -> FaceVerificationResult {
    let thresholds = classify_confidence(confidence);

    let message = if thresholds.verified {
        "Face verified successfully! ✓"
    } else if thresholds.low_confidence {
        "Low confidence. Try again in better lighting."
    } else {
        "Face verification failed. Please contact support."
    };

    FaceVerificationResult {
        success: thresholds.verified,
        confidence,
        message: message.to_string(),
        thresholds,
    }
}
