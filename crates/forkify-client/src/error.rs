//! # Client Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  Timeout     the timeout won the race                                  │
//! │  Request     non-2xx status, message from the failure body             │
//! │  NotFound    404 from the service                                      │
//! │  Transport   connection, TLS, URL construction                         │
//! │  Decode      2xx body that is not the expected JSON                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Remote data client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete in time.
    #[error("Request took too long! Timeout after {secs} second(s)")]
    Timeout { secs: f64 },

    /// The service answered with a failure status.
    #[error("{message} ({status})")]
    Request { message: String, status: u16 },

    /// The requested resource does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The request could not be sent or the response not received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
