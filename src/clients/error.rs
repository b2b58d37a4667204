//! Error type for the Resource Repository Client.

use thiserror::Error;

/// Every way a repository operation can fail.
///
/// The remote collection does not distinguish "not found" from other failures,
/// so a missing id surfaces as [`TransportError::Status`] with the status code
/// the backend chose (404 for the in-memory collection).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collection answered with a non-2xx status.
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The in-memory collection task is gone.
    #[error("Collection unavailable")]
    Unavailable,
}

impl TransportError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        TransportError::Status {
            status: 404,
            message: format!("Not found: {}", id),
        }
    }

    /// Status code of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
