//! Errors surfaced to the user.

use thiserror::Error;

use tldr_config::ConfigError;
use tldr_protocols::{BackendError, ExtractError};

/// Anything that can make a user action fail.
///
/// None of these are fatal: surfaces turn them into a message and stay ready
/// for the user to try again.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("No active tab found")]
    NoActivePage,

    #[error("No text content found on this page")]
    EmptyText,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Settings storage failed: {0}")]
    Storage(#[from] ConfigError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl SurfaceError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
