//! Error types for the client crate.

use thiserror::Error;

/// The one message shown to users for any analysis failure, regardless of
/// whether the service was unreachable, rejected the request, or returned
/// a body this client could not parse.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Failed to analyze code. Make sure the backend is running.";

/// Errors that can occur while talking to the analysis service.
///
/// The variants keep the failure kinds apart for logs and operators;
/// [`ClientError::user_message`] collapses them for display.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never completed (connection refused, DNS, timeout, ...).
    #[error("request to analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("analysis service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the service.
        body: String,
    },

    /// The service answered 2xx but the body was not valid JSON.
    #[error("malformed analysis response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// The user-facing rendering of this failure.
    pub fn user_message(&self) -> &'static str {
        SERVICE_UNAVAILABLE_MESSAGE
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
