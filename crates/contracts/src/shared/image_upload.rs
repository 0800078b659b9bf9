use serde::Deserialize;
use thiserror::Error;

pub const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;
/// Per-request limit for the image host; the backend client has none.
pub const UPLOAD_TIMEOUT_MS: u32 = 30_000;
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UploadError {
    #[error("no image selected")]
    NoFile,
    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("unsupported image type `{0}`")]
    UnsupportedType(String),
    #[error("upload failed: {0}")]
    Failed(String),
}

impl UploadError {
    /// Code into the upload message table.
    pub fn code(&self) -> &'static str {
        match self {
            UploadError::NoFile | UploadError::Failed(_) => "UPLOAD_FAILED",
            UploadError::TooLarge { .. } => "FILE_TOO_LARGE",
            UploadError::UnsupportedType(_) => "UNSUPPORTED_FILE_TYPE",
        }
    }
}

/// Checks a picked file before it is sent to the image host.
pub fn validate_image(size: u64, mime: &str, limit: u64) -> Result<(), UploadError> {
    let mime = mime.trim().to_ascii_lowercase();
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(UploadError::UnsupportedType(mime));
    }
    if size > limit {
        return Err(UploadError::TooLarge { size, limit });
    }
    Ok(())
}

/// Response of the image host: `{ success, status, data: { url, display_url } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostedImageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: u16,
    pub data: Option<HostedImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedImage {
    pub url: String,
    #[serde(default)]
    pub display_url: Option<String>,
}

impl HostedImageResponse {
    pub fn into_url(self) -> Result<String, UploadError> {
        match (self.success, self.data) {
            (true, Some(img)) if !img.url.is_empty() => Ok(img.url),
            _ => Err(UploadError::Failed(format!("image host status {}", self.status))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_limits() {
        assert!(validate_image(1024, "image/PNG", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image(MAX_IMAGE_BYTES, "image/webp", MAX_IMAGE_BYTES).is_ok());
        assert_eq!(
            validate_image(MAX_IMAGE_BYTES + 1, "image/jpeg", MAX_IMAGE_BYTES)
                .unwrap_err()
                .code(),
            "FILE_TOO_LARGE"
        );
        assert_eq!(
            validate_image(10, "application/pdf", MAX_IMAGE_BYTES).unwrap_err(),
            UploadError::UnsupportedType("application/pdf".into())
        );
    }

    #[test]
    fn test_hosted_response() {
        let ok: HostedImageResponse = serde_json::from_str(
            r#"{"success":true,"status":200,"data":{"url":"https://i.ibb.co/x/logo.png"}}"#,
        )
        .unwrap();
        assert_eq!(ok.into_url().unwrap(), "https://i.ibb.co/x/logo.png");

        let bad: HostedImageResponse =
            serde_json::from_str(r#"{"success":false,"status":400}"#).unwrap();
        assert!(bad.into_url().is_err());
    }
}
