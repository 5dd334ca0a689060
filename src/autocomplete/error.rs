//! Backend client errors

use thiserror::Error;

/// Errors talking to the search backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or protocol failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{endpoint} request failed: {status} - {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// An endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}
