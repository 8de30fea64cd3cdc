//! Summarization backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} {message}")]
    Status { status: u16, message: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// HTTP status reported by the backend, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
