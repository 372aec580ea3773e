//! API Errors
//!
//! Failure taxonomy for calls against the roadmap API.

use thiserror::Error;

/// Errors surfaced by service calls.
///
/// Views never branch on the variant; they log it and show one localized message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), body: err.to_string() }
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 403, body: "forbidden".into() };
        assert_eq!(err.to_string(), "Server responded with 403: forbidden");
        assert_eq!(ApiError::Validation("name is required".into()).to_string(), "Invalid input: name is required");
    }
}
