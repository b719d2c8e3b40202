//! Pluggable face comparison backends

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use shared_types::ImageHandle;

/// The seam for a real embedding-distance or vendor comparison service.
/// Implementations take two opaque image handles and return a raw
/// confidence score in [0, 100]; transport and inference failures come
/// back as errors, never as a score.
pub trait FaceBackend: Send + Sync {
    fn compare(
        &self,
        reference: &ImageHandle,
        live: &ImageHandle,
    ) -> impl Future<Output = Result<f64>> + Send;
}

/// Placeholder backend: draws a uniform score in [70, 100), with a short
/// delay standing in for the upload/inference round trip. Replace with a
/// real provider behind the same trait.
#[derive(Debug, Default, Clone)]
pub struct MockFaceBackend;

impl FaceBackend for MockFaceBackend {
    async fn compare(&self, _reference: &ImageHandle, _live: &ImageHandle) -> Result<f64> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok(rand::rng().random_range(70.0..100.0))
    }
}
