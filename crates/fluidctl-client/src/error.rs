//! Error types for the Atlas API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Atlas API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to the Atlas API failed")]
    Transport(#[from] reqwest::Error),

    /// The bearer token contains bytes that cannot appear in a header.
    #[error("bearer token is not a valid header value")]
    InvalidToken,

    /// The API answered with a status the operation does not expect.
    #[error("failed to {operation}: unexpected status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },
}

/// Check a response status against the one the operation expects.
pub(crate) fn expect_status(
    operation: &'static str,
    expected: StatusCode,
    actual: StatusCode,
) -> Result<(), ApiError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus {
            operation,
            status: actual,
        })
    }
}
