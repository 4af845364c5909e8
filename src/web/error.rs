//! API error handling for the Corkboard Web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error codes.
///
/// Status mapping follows the API contract: validation failures and
/// duplicate nicknames are reported as 400, missing and invalid tokens
/// both as 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Missing or malformed input (400).
    Validation,
    /// Missing token (401).
    Unauthenticated,
    /// Bad or expired token (401).
    InvalidToken,
    /// Ownership mismatch (403).
    Forbidden,
    /// Missing post or comment (404).
    NotFound,
    /// Duplicate nickname (400).
    Conflict,
    /// Storage failure or unexpected error (500).
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Create an unauthenticated error (missing token).
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthenticated, message)
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidToken, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<crate::auth::ValidationError> for ApiError {
    fn from(err: crate::auth::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<crate::CorkboardError> for ApiError {
    fn from(err: crate::CorkboardError) -> Self {
        match &err {
            crate::CorkboardError::Auth(msg) => ApiError::unauthenticated(msg.clone()),
            crate::CorkboardError::Permission(msg) => ApiError::forbidden(msg.clone()),
            crate::CorkboardError::Validation(msg) => ApiError::validation(msg.clone()),
            crate::CorkboardError::NotFound(what) => {
                ApiError::not_found(format!("{what} not found"))
            }
            crate::CorkboardError::Conflict(what) => {
                ApiError::conflict(format!("{what} is already in use"))
            }
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal("an internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CorkboardError;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Conflict.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_constructors() {
        assert_eq!(ApiError::validation("bad").code, ErrorCode::Validation);
        assert_eq!(
            ApiError::unauthenticated("login required").code,
            ErrorCode::Unauthenticated
        );
        assert_eq!(
            ApiError::invalid_token("invalid token").code,
            ErrorCode::InvalidToken
        );
        assert_eq!(ApiError::forbidden("no").code, ErrorCode::Forbidden);
        assert_eq!(ApiError::not_found("missing").code, ErrorCode::NotFound);
        assert_eq!(ApiError::conflict("dup").code, ErrorCode::Conflict);
        assert_eq!(ApiError::internal("boom").code, ErrorCode::Internal);
    }

    #[test]
    fn test_from_domain_error() {
        let err: ApiError = CorkboardError::NotFound("post".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CorkboardError::Conflict("nickname".to_string()).into();
        assert_eq!(err.code, ErrorCode::Conflict);

        let err: ApiError = CorkboardError::Database("boom".to_string()).into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_from_validation_error() {
        let err: ApiError = crate::auth::ValidationError::NicknameRequired.into();
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "please enter a nickname");
    }
}
