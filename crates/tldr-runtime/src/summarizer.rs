//! Turning page text into a backend summary.

use std::time::Duration;

use tracing::debug;

use tldr_client::BackendClient;
use tldr_config::{AppConfig, Settings};
use tldr_protocols::{HealthStatus, SummarizeRequest, SummarizeResponse};

use crate::error::SurfaceError;

/// Client options that come from process configuration rather than settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl ClientOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            timeout: config.backend.request_timeout_secs.map(Duration::from_secs),
            user_agent: Some(config.backend.user_agent.clone()).filter(|a| !a.is_empty()),
        }
    }
}

/// Sends text to the backend named by the current settings.
///
/// A client is built per call because the backend URL is a user setting
/// and may change between calls.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    options: ClientOptions,
}

impl Summarizer {
    pub fn new(options: ClientOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    fn client(&self, backend_url: &str) -> Result<BackendClient, SurfaceError> {
        Ok(BackendClient::with_options(
            backend_url,
            self.options.timeout,
            self.options.user_agent.as_deref(),
        )?)
    }

    /// Summarize `text` from the page at `url` with the length and style in `settings`.
    pub async fn summarize(
        &self,
        text: &str,
        url: &str,
        settings: &Settings,
    ) -> Result<SummarizeResponse, SurfaceError> {
        if text.trim().is_empty() {
            return Err(SurfaceError::EmptyText);
        }

        let truncated = truncate_chars(text, settings.max_text_length);
        if truncated.len() < text.len() {
            debug!(
                max = settings.max_text_length,
                "Truncated page text before summarization"
            );
        }

        let request = SummarizeRequest {
            text: truncated.to_string(),
            length: settings.length,
            style: settings.style,
            url: url.to_string(),
        };
        Ok(self.client(&settings.backend_url)?.summarize(&request).await?)
    }

    /// Probe the backend at `backend_url`.
    pub async fn health(&self, backend_url: &str) -> Result<HealthStatus, SurfaceError> {
        Ok(self.client(backend_url)?.health().await?)
    }
}

/// The first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
