//! # App Error Type
//!
//! Unified error type of the state store and the controllers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Forkify                                │
//! │                                                                         │
//! │  ClientError::Timeout ────────┐                                         │
//! │  ClientError::NotFound ───────┤                                         │
//! │  ValidationError ─────────────┼──► AppError { code, message }           │
//! │  CoreError::InvalidServings ──┤          │                              │
//! │  StoreError ──────────────────┘          ▼                              │
//! │                                  controller renders the                 │
//! │                                  view's error placeholder               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `AppError` serializes as `{ "code": "NOT_FOUND", "message": "..." }` so a
//! browser host can branch on `code`.

use forkify_client::ClientError;
use forkify_core::{CoreError, ValidationError};
use forkify_store::StoreError;
use serde::Serialize;

use crate::config::ConfigError;
use crate::state::ToggleError;

/// Result alias of store operations and controllers.
pub type AppResult<T> = Result<T, AppError>;

/// Error reported to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes of [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Recipe not found on the service
    NotFound,

    /// Upload form rejected before the network
    ValidationError,

    /// Caller passed an unusable value (servings, page, event syntax)
    InvalidArgument,

    /// Request exceeded the configured timeout
    Timeout,

    /// Service failure, transport failure, or unusable response
    RequestFailed,

    /// Bookmark persistence failed
    StorageError,

    /// Anything else
    Internal,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidServings { .. } | CoreError::NoRecipeLoaded => {
                AppError::invalid_argument(err.to_string())
            }
            CoreError::InvalidPayload { .. } => {
                AppError::new(ErrorCode::RequestFailed, err.to_string())
            }
            CoreError::Validation(inner) => inner.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let code = match &err {
            ClientError::Timeout { .. } => ErrorCode::Timeout,
            ClientError::NotFound { .. } => ErrorCode::NotFound,
            ClientError::Request { .. } | ClientError::Transport(_) | ClientError::Decode(_) => {
                ErrorCode::RequestFailed
            }
        };
        AppError::new(code, err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::invalid_argument(err.to_string())
    }
}

impl From<ToggleError> for AppError {
    fn from(err: ToggleError) -> Self {
        match err {
            ToggleError::Core(inner) => inner.into(),
            ToggleError::Store(inner) => inner.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let err = AppError::new(ErrorCode::NotFound, "No recipe found");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"NOT_FOUND","message":"No recipe found"}"#);
    }

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = CoreError::InvalidServings { value: 0 }.into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err: AppError = CoreError::Validation(ValidationError::Required {
            field: "title".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "title is required");
    }

    #[test]
    fn test_client_error_mapping() {
        let err: AppError = ClientError::Timeout { secs: 10.0 }.into();
        assert_eq!(err.code, ErrorCode::Timeout);
        assert!(err.to_string().contains("10 second"));

        let err: AppError = ClientError::Request {
            message: "Invalid _id".to_string(),
            status: 400,
        }
        .into();
        assert_eq!(err.code, ErrorCode::RequestFailed);
        assert_eq!(err.message, "Invalid _id (400)");
    }
}
