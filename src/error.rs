//! Error types for Corkboard.

use thiserror::Error;

/// Common error type for Corkboard.
#[derive(Error, Debug)]
pub enum CorkboardError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Duplicate resource (unique constraint).
    #[error("{0} already exists")]
    Conflict(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for CorkboardError {
    fn from(e: sqlx::Error) -> Self {
        CorkboardError::Database(e.to_string())
    }
}

/// Result type alias for Corkboard operations.
pub type Result<T> = std::result::Result<T, CorkboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = CorkboardError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_permission_error_display() {
        let err = CorkboardError::Permission("not the author".to_string());
        assert_eq!(err.to_string(), "permission denied: not the author");
    }

    #[test]
    fn test_validation_error_display() {
        let err = CorkboardError::Validation("nickname too short".to_string());
        assert_eq!(err.to_string(), "validation error: nickname too short");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = CorkboardError::NotFound("post".to_string());
        assert_eq!(err.to_string(), "post not found");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = CorkboardError::Conflict("nickname".to_string());
        assert_eq!(err.to_string(), "nickname already exists");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CorkboardError = io_err.into();
        assert!(matches!(err, CorkboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(CorkboardError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
