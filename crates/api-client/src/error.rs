//! Error types for the API client

use crate::model::FieldErrors;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Shared sentinel returned by every validator when the request is absent.
pub const ERR_NIL_REQUEST: ValidationError = ValidationError::NilRequest;

/// Outcome of a failed request precondition check.
///
/// Messages are part of the public contract: callers and tests compare the
/// rendered text, so variants carry the final message rather than codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request value is absent
    #[error("request cannot be nil")]
    NilRequest,

    /// A single violated field precondition
    #[error("{0}")]
    Field(String),
}

impl ValidationError {
    /// Create a field error with a free-form message
    pub fn field(msg: impl Into<String>) -> Self {
        Self::Field(msg.into())
    }

    /// `"<field> is required"`
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::Field(format!("{field} is required"))
    }

    /// `"<a> and <b> cannot be used in the same request"`
    #[must_use]
    pub fn conflict(a: &str, b: &str) -> Self {
        Self::Field(format!("{a} and {b} cannot be used in the same request"))
    }

    /// `invalid <what>: "<value>"`
    #[must_use]
    pub fn invalid(what: &str, value: &str) -> Self {
        Self::Field(format!("invalid {what}: {value:?}"))
    }

    /// `"<field> must be between <min> and <max>"`
    #[must_use]
    pub fn out_of_range(field: &str, min: i64, max: i64) -> Self {
        Self::Field(format!("{field} must be between {min} and {max}"))
    }
}

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request failed local validation and was not built
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// API rejected one or more request fields
    #[error("API validation error ({status}): {}", join_field_errors(.errors))]
    InvalidFields {
        /// HTTP status code
        status: u16,
        /// Per-field errors reported by the API
        errors: Vec<FieldErrors>,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if it came from a response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiResponse { status, .. } | Self::InvalidFields { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

fn join_field_errors(errors: &[FieldErrors]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_request_message() {
        assert_eq!(ERR_NIL_REQUEST.to_string(), "request cannot be nil");
        assert_eq!(ValidationError::NilRequest, ERR_NIL_REQUEST);
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::conflict("branchId", "directoryId").to_string(),
            "branchId and directoryId cannot be used in the same request"
        );
        assert_eq!(
            ValidationError::invalid("vote type", "invalid").to_string(),
            "invalid vote type: \"invalid\""
        );
        assert_eq!(
            ValidationError::out_of_range("minRelevant", 0, 100).to_string(),
            "minRelevant must be between 0 and 100"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = ApiError::from(ValidationError::required("title"));
        assert_eq!(err.to_string(), "title is required");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_classification() {
        let err = ApiError::api_response(404, "Project Not Found");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = ApiError::api_response(503, "unavailable");
        assert!(err.is_server_error());
    }
}
