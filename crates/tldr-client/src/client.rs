//! Summarization backend client.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, warn};

use tldr_protocols::{BackendError, HealthStatus, SummarizeRequest, SummarizeResponse};

pub const SUMMARIZE_PATH: &str = "/api/summarize";
pub const HEALTH_PATH: &str = "/api/health";

/// HTTP client bound to one backend base URL.
///
/// Requests are sent once; retrying is left to the user.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a client without a request timeout.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_options(base_url, None, None)
    }

    /// Create a client with an optional request timeout and user agent.
    pub fn with_options(
        base_url: &str,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, BackendError> {
        let base_url = Self::normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = user_agent.filter(|a| !a.is_empty()) {
            builder = builder.user_agent(agent.to_string());
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API path on this backend.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request a summary of `request.text`.
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, BackendError> {
        info!(
            "Summarization request: length={}, style={}, text_length={}",
            request.length,
            request.style,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint(SUMMARIZE_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(format!("Failed to read body: {}", e)))?;

        let parsed: SummarizeResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        debug!("Received summary of {} characters", parsed.summary.chars().count());
        Ok(parsed)
    }

    /// Probe backend reachability. Any 2xx is healthy.
    pub async fn health(&self) -> Result<HealthStatus, BackendError> {
        let response = self
            .client
            .get(self.endpoint(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let status_code = response.status().as_u16();
        let details = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str(&body).ok());

        Ok(HealthStatus {
            status_code,
            details,
        })
    }

    async fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(status, &body);
        warn!("Backend returned {}: {}", status.as_u16(), message);
        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Prefer the backend's `{"error": "..."}` message over the reason phrase.
    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"].as_str().map(String::from))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
    }

    fn normalize_base_url(base_url: &str) -> Result<String, BackendError> {
        let trimmed = base_url.trim();
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(BackendError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                trimmed,
                parsed.scheme()
            )));
        }
        Ok(trimmed.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
