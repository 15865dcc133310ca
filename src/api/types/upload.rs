//! Multipart image upload extractor that returns errors as JSON

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::StatusCode,
};

use super::error::ApiError;
use crate::domain::DomainError;

/// Name of the multipart field carrying the image
pub const UPLOAD_FIELD: &str = "file";

/// Image uploaded through a `multipart/form-data` request.
///
/// Reads the first field named `file`; other fields are skipped. Rejections
/// and missing or empty files are reported in the API error format.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Consume the extractor and return the raw image bytes
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request(format!(
                "Expected a multipart/form-data upload: {}",
                rejection.body_text()
            ))
            .with_param(UPLOAD_FIELD)
        })?;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;

            if bytes.is_empty() {
                return Err(missing_file("Uploaded file is empty"));
            }

            return Ok(Self { file_name, bytes });
        }

        Err(missing_file(format!(
            "No file uploaded; expected multipart field '{}'",
            UPLOAD_FIELD
        )))
    }
}

fn missing_file(message: impl Into<String>) -> ApiError {
    ApiError::from(DomainError::validation(message)).with_param(UPLOAD_FIELD)
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::payload_too_large(err.body_text()).with_param(UPLOAD_FIELD);
    }

    ApiError::bad_request(format!("Failed to read multipart upload: {}", err.body_text()))
        .with_param(UPLOAD_FIELD)
}
