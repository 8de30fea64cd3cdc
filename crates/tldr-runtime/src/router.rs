//! Dispatch of [`SurfaceRequest`] messages.

use std::sync::Arc;

use tracing::{debug, info, warn};

use tldr_config::SettingsRepository;
use tldr_extract::{Extractor, PageSnapshot};

use crate::error::SurfaceError;
use crate::message::{SurfaceRequest, SurfaceResponse};
use crate::summarizer::Summarizer;
use crate::tabs::TabSource;

/// Answers messages sent by the popup, the options page or a page script.
///
/// Every request gets a response; failures are reported in
/// [`SurfaceResponse::error`] rather than returned.
pub struct MessageRouter {
    tabs: Arc<dyn TabSource>,
    settings: SettingsRepository,
    summarizer: Summarizer,
    extractor: Extractor,
}

impl MessageRouter {
    pub fn new(
        tabs: Arc<dyn TabSource>,
        settings: SettingsRepository,
        summarizer: Summarizer,
        extractor: Extractor,
    ) -> Self {
        Self {
            tabs,
            settings,
            summarizer,
            extractor,
        }
    }

    pub async fn handle(&self, request: SurfaceRequest) -> SurfaceResponse {
        debug!(?request, "Handling message");
        match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Message failed: {}", e);
                SurfaceResponse::failure(e.user_message())
            }
        }
    }

    /// Handle a raw JSON message and serialize the reply.
    pub async fn handle_json(&self, message: &str) -> String {
        let response = match serde_json::from_str::<SurfaceRequest>(message) {
            Ok(request) => self.handle(request).await,
            Err(e) => SurfaceResponse::failure(format!("Invalid message: {}", e)),
        };
        serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":"Failed to encode response: {}"}}"#, e)
        })
    }

    async fn dispatch(&self, request: SurfaceRequest) -> Result<SurfaceResponse, SurfaceError> {
        match request {
            SurfaceRequest::ExtractText => {
                let page = self.active_page().await?;
                Ok(SurfaceResponse::ok().with_text(self.extractor.extract_text(&page)))
            }
            SurfaceRequest::GetPageInfo => {
                let page = self.active_page().await?;
                Ok(SurfaceResponse::ok().with_page_info(self.extractor.page_info(&page)))
            }
            SurfaceRequest::GetSettings => {
                Ok(SurfaceResponse::ok().with_settings(self.settings.load().await?))
            }
            SurfaceRequest::SaveSettings { settings } => {
                self.settings.save(&settings).await?;
                Ok(SurfaceResponse::ok().with_settings(settings))
            }
            SurfaceRequest::Summarize { text } => {
                let page = self.tabs.active_page().await;
                let text = match text {
                    Some(text) => text,
                    None => {
                        let page = page.as_ref().ok_or(SurfaceError::NoActivePage)?;
                        self.extractor.extract_text(page)
                    }
                };
                let url = page.as_ref().map(|p| p.url().to_string()).unwrap_or_default();
                let settings = self.settings.load().await?;
                let response = self.summarizer.summarize(&text, &url, &settings).await?;
                Ok(SurfaceResponse::ok().with_summary(response.summary))
            }
            SurfaceRequest::OpenOptions => {
                info!("Options page requested");
                Ok(SurfaceResponse::ok())
            }
        }
    }

    async fn active_page(&self) -> Result<PageSnapshot, SurfaceError> {
        self.tabs.active_page().await.ok_or(SurfaceError::NoActivePage)
    }
}
