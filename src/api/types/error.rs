//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Broad error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    UnprocessableError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::UnprocessableError => write!(f, "unprocessable_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Well-formed request that cannot be served
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::UnprocessableError,
            message,
        )
    }

    /// Payload too large
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// Service unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::ModelUnavailable => Self::unavailable(
                "Could not identify the image: the classifier model is not loaded",
            )
            .with_code("model_unavailable"),
            DomainError::ImageDecodeFailure { message } => Self::bad_request(format!(
                "Could not identify the image: not a readable image ({})",
                message
            ))
            .with_param("file")
            .with_code("image_decode_failure"),
            DomainError::UnknownSpecies { label } => Self::unprocessable(format!(
                "Identified as '{}' but no species data is on file",
                label
            ))
            .with_code("unknown_species"),
            DomainError::SpeciesNotFound { key } => {
                Self::not_found(format!("Species '{}' not found", key))
                    .with_code("species_not_found")
            }
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Inference { message } => Self::internal(message),
            DomainError::Report { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Missing file");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Missing file");
    }

    #[test]
    fn test_domain_error_status_codes() {
        let cases = [
            (DomainError::ModelUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::image_decode("bad"), StatusCode::BAD_REQUEST),
            (DomainError::unknown_species("Tilapia"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::species_not_found("tilapia"), StatusCode::NOT_FOUND),
            (DomainError::validation("no file"), StatusCode::BAD_REQUEST),
            (DomainError::inference("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::report("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_err, status) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, status);
        }
    }

    #[test]
    fn test_identification_messages_are_distinct() {
        let decode: ApiError = DomainError::image_decode("bad magic").into();
        let unknown: ApiError = DomainError::unknown_species("Tilapia").into();

        assert!(decode.response.error.message.starts_with("Could not identify"));
        assert!(unknown.response.error.message.contains("no species data"));
        assert_eq!(decode.response.error.code.as_deref(), Some("image_decode_failure"));
        assert_eq!(unknown.response.error.code.as_deref(), Some("unknown_species"));
    }

    #[test]
    fn test_error_serialization() {
        let err: ApiError = DomainError::species_not_found("tilapia").into();
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"not_found_error\""));
        assert!(json.contains("\"code\":\"species_not_found\""));
        assert!(!json.contains("param"));
    }
}
