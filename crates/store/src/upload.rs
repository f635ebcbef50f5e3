//! Client-side image "upload".

use crate::error::StoreError;
use crate::traits::ImageStore;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Largest accepted image payload (5 MB), matching the upload form's
/// limit.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Encodes images into data URIs instead of uploading them anywhere.
///
/// The degenerate implementation of the upload collaborator: the resulting
/// URI is stored directly in the component's `source` property, so screens
/// stay self-contained.
#[derive(Debug, Default)]
pub struct DataUriUploader;

impl DataUriUploader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for DataUriUploader {
    fn upload_image(&mut self, bytes: &[u8], content_type: &str) -> Result<String, StoreError> {
        if !content_type.starts_with("image/") {
            return Err(StoreError::Rejected(format!(
                "not an image content type: {}",
                content_type
            )));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(StoreError::Rejected(format!(
                "image too large: {} bytes",
                bytes.len()
            )));
        }
        Ok(format!(
            "data:{};base64,{}",
            content_type,
            STANDARD.encode(bytes)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_data_uri() {
        let mut uploader = DataUriUploader::new();
        let uri = uploader.upload_image(b"abc", "image/png").unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn rejects_non_images() {
        let mut uploader = DataUriUploader::new();
        let err = uploader.upload_image(b"abc", "text/plain").unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }
}
