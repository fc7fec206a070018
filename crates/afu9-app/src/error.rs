// Rust guideline compliant 2026-10-16

//! Error handling for AFU-9 application services.

use afu9_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested state transition is invalid.
    InvalidTransition,
    /// The request included invalid inputs.
    InvalidInput,
    /// A snapshot contained conflicting records.
    ValidationError,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading snapshot or configuration data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

impl ErrorCode {
    /// HTTP status a route handler should answer with for this code.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InvalidTransition => 409,
            ErrorCode::InvalidInput | ErrorCode::ValidationError | ErrorCode::JsonError => 400,
            ErrorCode::ConfigError | ErrorCode::IoError => 500,
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::UnknownStatus(_) => ErrorCode::InvalidInput,
                CoreError::DuplicateId { .. } => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::DuplicateId { kind, id }) => Some(serde_json::json!({
                "kind": kind,
                "id": id,
            })),
            AppError::Core(CoreError::UnknownStatus(value)) => Some(serde_json::json!({
                "status": value,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_errors_map_to_conflict() {
        let error = AppError::Core(CoreError::InvalidTransition("nope".to_string()));
        assert_eq!(error.code(), ErrorCode::InvalidTransition);
        assert_eq!(error.code().http_status(), 409);
    }

    #[test]
    fn test_input_errors_map_to_bad_request() {
        let error = AppError::InvalidInput("bad".to_string());
        assert_eq!(error.code().http_status(), 400);

        let error = AppError::Core(CoreError::UnknownStatus("BOGUS".to_string()));
        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert_eq!(
            error.details(),
            Some(serde_json::json!({ "status": "BOGUS" }))
        );
    }

    #[test]
    fn test_http_statuses_are_closed_set() {
        let codes = [
            ErrorCode::InvalidTransition,
            ErrorCode::InvalidInput,
            ErrorCode::ValidationError,
            ErrorCode::ConfigError,
            ErrorCode::IoError,
            ErrorCode::JsonError,
        ];
        for code in codes {
            assert!(
                [400, 409, 500].contains(&code.http_status()),
                "{:?} maps to {}",
                code,
                code.http_status()
            );
        }
        assert_eq!(ErrorCode::IoError.http_status(), 500);
    }

    #[test]
    fn test_duplicate_details() {
        let error = AppError::Core(CoreError::DuplicateId {
            kind: "issue",
            id: "I-1".to_string(),
        });
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert_eq!(
            error.details(),
            Some(serde_json::json!({ "kind": "issue", "id": "I-1" }))
        );
    }
}
