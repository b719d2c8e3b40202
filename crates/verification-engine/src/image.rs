//! Capture intake checks and data-URL decoding
//!
//! The engine treats images as opaque; these helpers only gate what gets
//! accepted from the capture UI and unwrap data URLs for backends that
//! want raw bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use shared_types::ImageHandle;
use thiserror::Error;

/// Accepted upload formats
pub const VALID_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Upload size ceiling
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image must be JPEG, PNG, or WebP")]
    UnsupportedFormat,

    #[error("Image must be less than 10MB")]
    TooLarge,

    #[error("Not a data URL")]
    NotADataUrl,

    #[error("Invalid base64 payload")]
    InvalidPayload,
}

/// Gate an upload before it is stored or compared.
pub fn validate_image_upload(content_type: &str, size_bytes: u64) -> Result<(), ImageError> {
    if !VALID_IMAGE_TYPES.contains(&content_type) {
        return Err(ImageError::UnsupportedFormat);
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge);
    }
    Ok(())
}

/// An image handle unwrapped to raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Split and decode a `data:<type>;base64,<payload>` URL. The content
/// type defaults to image/jpeg when the header omits it.
pub fn decode_data_url(handle: &ImageHandle) -> Result<DecodedImage, ImageError> {
    let (header, payload) = handle
        .data_url
        .split_once(',')
        .ok_or(ImageError::NotADataUrl)?;

    let header = header
        .strip_prefix("data:")
        .ok_or(ImageError::NotADataUrl)?;

    let content_type = header
        .split(';')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("image/jpeg")
        .to_string();

    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| ImageError::InvalidPayload)?;

    Ok(DecodedImage {
        content_type,
        bytes,
    })
}

/// Quick shape check for request validation.
pub fn is_data_url(handle: &ImageHandle) -> bool {
    handle.data_url.starts_with("data:") && handle.data_url.contains(',')
}
